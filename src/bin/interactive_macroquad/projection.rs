use glide_approach::core::approach::{ApproachMeasurement, approach_path, approach_path_3d};
use glide_approach::core::window::padded_axis_window_f32;
use macroquad::prelude::*;

use crate::constants::{ORBIT_DISTANCE_SCALE, ORBIT_PITCH_RAD, SCENE_LENGTH};

/// Screen rectangle of the plot area.
#[derive(Clone, Copy)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

/// Maps (distance, altitude) to screen. Altitude grows downward from the top
/// edge, so the approach starts low-left and ends at the top-right threshold.
pub(crate) fn world_to_screen(
    world: Vec2,
    world_max_x: f32,
    world_max_y: f32,
    area: PlotArea,
) -> Vec2 {
    let plot_w = (area.right - area.left).max(1.0);
    let plot_h = (area.bottom - area.top).max(1.0);
    let x = area.left + (world.x / world_max_x.max(1.0)) * plot_w;
    let y = area.top + (world.y / world_max_y.max(1.0)) * plot_h;
    vec2(x, y)
}

pub(crate) fn compute_world_window(measurement: Option<ApproachMeasurement>) -> (f32, f32) {
    match measurement {
        Some(m) => padded_axis_window_f32(m.horizontal_distance_ft as f32, m.altitude_ft as f32),
        None => padded_axis_window_f32(15000.0, 2000.0),
    }
}

pub(crate) fn path_points(measurement: ApproachMeasurement) -> [Vec2; 2] {
    approach_path(measurement).map(|(x, y)| vec2(x as f32, y as f32))
}

/// Scene coordinates for the 3D view: distance along x, altitude up along y
/// (exaggerated to stay visible), lateral offset along z.
pub(crate) fn scene_points(measurement: ApproachMeasurement) -> [Vec3; 2] {
    let (x_span, y_span) = compute_world_window(Some(measurement));
    let x_scale = SCENE_LENGTH / x_span;
    let y_scale = (SCENE_LENGTH * 0.35) / y_span;
    approach_path_3d(measurement).map(|(distance, lateral, altitude)| {
        vec3(
            distance as f32 * x_scale - SCENE_LENGTH * 0.5,
            altitude as f32 * y_scale,
            lateral as f32 * x_scale,
        )
    })
}

pub(crate) fn orbit_camera_position(yaw: f32) -> Vec3 {
    let radius = SCENE_LENGTH * ORBIT_DISTANCE_SCALE;
    vec3(
        yaw.cos() * ORBIT_PITCH_RAD.cos() * radius,
        ORBIT_PITCH_RAD.sin() * radius,
        yaw.sin() * ORBIT_PITCH_RAD.cos() * radius,
    )
}
