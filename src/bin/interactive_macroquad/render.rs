use glide_approach::core::window::format_axis_value;
use macroquad::prelude::*;

use crate::constants::{
    GRID_COLOR, NOTICE_SHADE, PATH_2D_COLOR, PATH_3D_COLOR, POINT_RADIUS, SCENE_LENGTH,
    X_GRID_LINES, Y_GRID_LINES,
};
use crate::projection::{PlotArea, orbit_camera_position, world_to_screen};

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_plot_grid(area: PlotArea) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * (area.right - area.left);
        draw_line(x, area.top, x, area.bottom, 1.0, GRID_COLOR);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.top + t * (area.bottom - area.top);
        draw_line(area.left, y, area.right, y, 1.0, GRID_COLOR);
    }
    draw_line(area.left, area.top, area.right, area.top, 2.0, DARKGRAY);
    draw_line(area.left, area.top, area.left, area.bottom, 2.0, DARKGRAY);
}

pub(crate) fn draw_axis_tick_labels(
    area: PlotArea,
    world_max_x: f32,
    world_max_y: f32,
    font: Option<&Font>,
) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * (area.right - area.left);
        let label = format_axis_value((t * world_max_x) as f64, world_max_x as f64);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            area.bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    // Inverted axis: zero altitude at the top edge.
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.top + t * (area.bottom - area.top);
        let label = format_axis_value((t * world_max_y) as f64, world_max_y as f64);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (area.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }

    draw_ui_text(
        "Horizontal Distance (ft)",
        area.right - 210.0,
        area.bottom + 48.0,
        18,
        label_color,
        font,
    );
    draw_ui_text(
        "Altitude (ft)",
        area.left + 10.0,
        area.top - 8.0,
        18,
        label_color,
        font,
    );
}

pub(crate) fn draw_path_2d(points: &[Vec2], world_max_x: f32, world_max_y: f32, area: PlotArea) {
    if points.len() < 2 {
        return;
    }
    let screen: Vec<Vec2> = points
        .iter()
        .map(|p| world_to_screen(*p, world_max_x, world_max_y, area))
        .collect();
    for pair in screen.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        draw_line(a.x, a.y, b.x, b.y, 3.0, PATH_2D_COLOR);
    }
    for p in &screen {
        draw_circle(p.x, p.y, POINT_RADIUS, PATH_2D_COLOR);
        draw_circle_lines(p.x, p.y, POINT_RADIUS, 2.0, DARKBLUE);
    }
}

/// Draws the path in world space and restores the screen camera afterwards.
pub(crate) fn draw_path_3d(points: &[Vec3], orbit_yaw: f32) {
    set_camera(&Camera3D {
        position: orbit_camera_position(orbit_yaw),
        target: vec3(0.0, SCENE_LENGTH * 0.1, 0.0),
        up: vec3(0.0, 1.0, 0.0),
        ..Default::default()
    });

    macroquad::models::draw_grid(20, SCENE_LENGTH / 10.0, DARKGRAY, GRID_COLOR);

    let half = SCENE_LENGTH * 0.5;
    let origin = vec3(-half, 0.0, 0.0);
    draw_line_3d(origin, vec3(half, 0.0, 0.0), BLUE);
    draw_line_3d(origin, vec3(-half, SCENE_LENGTH * 0.4, 0.0), DARKGREEN);
    let lateral = vec3(0.0, 0.0, half * 0.5);
    draw_line_3d(origin - lateral, origin + lateral, ORANGE);

    for pair in points.windows(2) {
        draw_line_3d(pair[0], pair[1], PATH_3D_COLOR);
    }
    for p in points {
        draw_sphere(*p, 0.12, None, PATH_3D_COLOR);
        // Drop line to the ground shows the altitude of each point.
        draw_line_3d(*p, vec3(p.x, 0.0, p.z), Color::new(0.9, 0.2, 0.2, 0.35));
    }

    set_default_camera();
}

pub(crate) fn draw_axes_legend_3d(x: f32, y: f32, font: Option<&Font>) {
    draw_ui_text("Distance (ft)", x, y, 18, BLUE, font);
    draw_ui_text("Altitude (ft)", x, y + 22.0, 18, DARKGREEN, font);
    draw_ui_text("Lateral Offset (ft)", x, y + 44.0, 18, ORANGE, font);
}

pub(crate) fn draw_notice_shade(screen_w: f32, screen_h: f32) {
    draw_rectangle(0.0, 0.0, screen_w, screen_h, NOTICE_SHADE);
}
