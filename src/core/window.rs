pub const X_PADDING_RATIO: f64 = 0.06;
pub const Y_PADDING_RATIO: f64 = 0.10;

/// Lateral half-span of 3D views, as a fraction of the altitude span.
pub const LATERAL_SPAN_RATIO: f64 = 0.5;

/// Axis spans for an approach path: both axes start at zero and end past the
/// largest coordinate by a padding fraction. Spans never drop below 1.
pub fn padded_axis_window_f64(raw_max_x: f64, raw_max_y: f64) -> (f64, f64) {
    let raw_x_span = raw_max_x.max(1.0);
    let raw_y_span = raw_max_y.max(1.0);
    let x_span = raw_x_span + raw_x_span * X_PADDING_RATIO;
    let y_span = raw_y_span + raw_y_span * Y_PADDING_RATIO;
    (x_span, y_span)
}

pub fn padded_axis_window_f32(raw_max_x: f32, raw_max_y: f32) -> (f32, f32) {
    let raw_x_span = raw_max_x.max(1.0);
    let raw_y_span = raw_max_y.max(1.0);
    let x_span = raw_x_span + raw_x_span * X_PADDING_RATIO as f32;
    let y_span = raw_y_span + raw_y_span * Y_PADDING_RATIO as f32;
    (x_span, y_span)
}

pub fn lateral_half_span(y_span: f64) -> f64 {
    (y_span * LATERAL_SPAN_RATIO).max(1.0)
}

/// Tick label precision scaled to the axis span.
pub fn format_axis_value(value: f64, axis_max: f64) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}
