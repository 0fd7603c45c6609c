use glide_approach::output::format::{
    ANGLE_PLACEHOLDER, SPEED_PLACEHOLDER, float_text, format_angle, format_speed,
};
use macroquad::prelude::*;

use crate::constants::{NOTICE_BUTTON_COLOR, NOTICE_FILL, TITLE_Y, WINDOW_TITLE};
use crate::render::{draw_notice_shade, draw_ui_text};
use crate::state::{AppRuntime, ErrorNotice, PathView};

pub(crate) fn draw_hud(state: &AppRuntime, left: f32, screen_h: f32, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    draw_ui_text(WINDOW_TITLE, 18.0, TITLE_Y, 30, header_color, font);
    draw_ui_text(
        match state.view {
            PathView::TwoD => "Approach Path",
            PathView::ThreeD => "3D Approach Path",
        },
        left,
        TITLE_Y + 34.0,
        22,
        DARKGRAY,
        font,
    );

    let (angle_line, speed_line, inputs_line) = match state.last {
        Some((m, r)) => (
            format_angle(&r),
            format_speed(&r),
            format!(
                "Altitude: {} ft | Distance: {} ft | Time: {} min",
                float_text(m.altitude_ft),
                float_text(m.horizontal_distance_ft),
                float_text(m.time_min)
            ),
        ),
        None => (
            ANGLE_PLACEHOLDER.to_string(),
            SPEED_PLACEHOLDER.to_string(),
            "No calculation yet".to_string(),
        ),
    };

    draw_ui_text(
        &format!("{angle_line} | {speed_line}"),
        left,
        screen_h - 45.0,
        24,
        header_color,
        font,
    );
    draw_ui_text(&inputs_line, left, screen_h - 76.0, 18, DARKGRAY, font);
    draw_ui_text(&state.status_line, left, screen_h - 14.0, 20, BLUE, font);
}

/// Modal input-error box. Returns true when its OK button is clicked.
pub(crate) fn draw_error_notice(
    notice: &ErrorNotice,
    screen_w: f32,
    screen_h: f32,
    font: Option<&Font>,
) -> bool {
    draw_notice_shade(screen_w, screen_h);

    let box_w = 520.0;
    let box_h = 220.0;
    let box_rect = Rect::new(
        (screen_w - box_w) * 0.5,
        (screen_h - box_h) * 0.5,
        box_w,
        box_h,
    );
    draw_rectangle(box_rect.x, box_rect.y, box_rect.w, box_rect.h, NOTICE_FILL);
    draw_rectangle_lines(box_rect.x, box_rect.y, box_rect.w, box_rect.h, 2.5, MAROON);

    let (text_x, text_y) = (box_rect.x + 24.0, box_rect.y);
    draw_ui_text(notice.title, text_x, text_y + 42.0, 30, MAROON, font);
    draw_ui_text(&notice.message, text_x, text_y + 82.0, 22, BLACK, font);
    draw_ui_text(&notice.detail, text_x, text_y + 110.0, 16, DARKGRAY, font);

    let button_rect = Rect::new(
        box_rect.x + box_rect.w - 140.0,
        box_rect.y + box_rect.h - 66.0,
        116.0,
        44.0,
    );
    let mouse = mouse_position();
    let hovered = button_rect.contains(vec2(mouse.0, mouse.1));
    let clicked = hovered && is_mouse_button_pressed(MouseButton::Left);

    let fill = if hovered {
        Color::from_rgba(37, 99, 235, 255)
    } else {
        NOTICE_BUTTON_COLOR
    };
    draw_rectangle(
        button_rect.x,
        button_rect.y,
        button_rect.w,
        button_rect.h,
        fill,
    );
    let size = measure_text("OK", font, 26, 1.0);
    draw_ui_text(
        "OK",
        button_rect.x + (button_rect.w - size.width) * 0.5,
        button_rect.y + (button_rect.h + size.height) * 0.5 - 4.0,
        26,
        WHITE,
        font,
    );

    clicked
}
