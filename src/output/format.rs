use crate::core::approach::{ApproachMeasurement, ApproachResult};

pub const ANGLE_PLACEHOLDER: &str = "Approach Angle: --";
pub const SPEED_PLACEHOLDER: &str = "Speed: --";

/// Input values as the log and report print them. Integral values keep one
/// decimal place, so `1000` reads back as `1000.0`.
pub fn float_text(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

pub fn format_angle(result: &ApproachResult) -> String {
    format!("Approach Angle: {:.2}°", result.angle_deg)
}

pub fn format_speed(result: &ApproachResult) -> String {
    format!("Speed: {:.2} knots", result.speed_knots)
}

pub fn format_summary_lines(
    measurement: &ApproachMeasurement,
    result: &ApproachResult,
) -> Vec<String> {
    vec![
        format!("Altitude: {} ft", float_text(measurement.altitude_ft)),
        format!("Distance: {} ft", float_text(measurement.horizontal_distance_ft)),
        format!("Time: {} min", float_text(measurement.time_min)),
        format!("Angle: {:.2}°", result.angle_deg),
        format!("Speed: {:.2} knots", result.speed_knots),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (ApproachMeasurement, ApproachResult) {
        (
            ApproachMeasurement {
                altitude_ft: 1000.0,
                horizontal_distance_ft: 10000.0,
                time_min: 3.0,
            },
            ApproachResult {
                angle_deg: 5.710593,
                speed_knots: 32.915742,
            },
        )
    }

    #[test]
    fn result_lines_use_two_decimals() {
        let (_, result) = sample();

        assert_eq!(format_angle(&result), "Approach Angle: 5.71°");
        assert_eq!(format_speed(&result), "Speed: 32.92 knots");
    }

    #[test]
    fn integral_inputs_keep_one_decimal() {
        assert_eq!(float_text(1000.0), "1000.0");
        assert_eq!(float_text(3.0), "3.0");
        assert_eq!(float_text(2.75), "2.75");
        assert_eq!(float_text(1234.56), "1234.56");
    }

    #[test]
    fn summary_lists_inputs_then_results() {
        let (measurement, result) = sample();
        let lines = format_summary_lines(&measurement, &result);

        assert_eq!(
            lines,
            vec![
                "Altitude: 1000.0 ft",
                "Distance: 10000.0 ft",
                "Time: 3.0 min",
                "Angle: 5.71°",
                "Speed: 32.92 knots",
            ]
        );
    }
}
