use macroquad::prelude::Color;

pub const WINDOW_TITLE: &str = "Aircraft Approach Angle & Speed Analyzer";
pub const INITIAL_WINDOW_WIDTH: i32 = 1440;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";
pub const CONFIG_PATH: &str = "approach.toml";

pub const FORM_PANEL_X: f32 = 18.0;
pub const FORM_PANEL_Y: f32 = 120.0;
pub const FORM_PANEL_W: f32 = 380.0;
pub const FORM_PANEL_H: f32 = 300.0;

pub const LEFT_MARGIN: f32 = 500.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 140.0;
pub const BOTTOM_MARGIN: f32 = 130.0;

pub const TITLE_Y: f32 = 46.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;
pub const POINT_RADIUS: f32 = 7.0;

pub const ORBIT_RATE_RAD_S: f32 = 0.35;
pub const ORBIT_PITCH_RAD: f32 = 0.45;
pub const ORBIT_DISTANCE_SCALE: f32 = 1.6;
/// 3D scene is normalised so the horizontal distance spans this many units.
pub const SCENE_LENGTH: f32 = 10.0;

pub const BACKGROUND: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.91, 0.93, 1.0);
pub const PATH_2D_COLOR: Color = Color::new(0.21, 0.48, 0.96, 1.0);
pub const PATH_3D_COLOR: Color = Color::new(0.90, 0.20, 0.20, 1.0);
pub const NOTICE_SHADE: Color = Color::new(0.0, 0.0, 0.0, 0.45);
pub const NOTICE_FILL: Color = Color::new(0.99, 0.95, 0.95, 1.0);
pub const NOTICE_BUTTON_COLOR: Color = Color::new(0.14, 0.45, 0.95, 1.0);

pub const ALTITUDE_LABEL: &str = "Altitude Loss (ft)";
pub const DISTANCE_LABEL: &str = "Horizontal Distance (ft)";
pub const TIME_LABEL: &str = "Time Taken (min)";
pub const INPUT_ERROR_TITLE: &str = "Input Error";
pub const INPUT_ERROR_TEXT: &str = "Please enter valid numeric values.";
