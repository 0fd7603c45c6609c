use crate::error::ApproachError;

pub const FEET_PER_NAUTICAL_MILE: f64 = 6076.12;
pub const MINUTES_PER_HOUR: f64 = 60.0;

pub const ALTITUDE_FIELD: &str = "altitude";
pub const DISTANCE_FIELD: &str = "horizontal distance";
pub const TIME_FIELD: &str = "time";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproachMeasurement {
    pub altitude_ft: f64,
    pub horizontal_distance_ft: f64,
    pub time_min: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproachResult {
    pub angle_deg: f64,
    pub speed_knots: f64,
}

fn check_positive(value: f64, field: &'static str) -> Result<(), ApproachError> {
    if !value.is_finite() {
        return Err(ApproachError::invalid(field, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(ApproachError::invalid(
            field,
            format!("must be greater than zero (got {value})"),
        ));
    }
    Ok(())
}

fn parse_f64(value: &str, field: &'static str) -> Result<f64, ApproachError> {
    let trimmed = value.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| ApproachError::invalid(field, format!("'{trimmed}' is not a number")))
}

impl ApproachMeasurement {
    pub fn new(
        altitude_ft: f64,
        horizontal_distance_ft: f64,
        time_min: f64,
    ) -> Result<Self, ApproachError> {
        let measurement = Self {
            altitude_ft,
            horizontal_distance_ft,
            time_min,
        };
        measurement.validate()?;
        Ok(measurement)
    }

    /// Parses the three text fields of a form or command line.
    pub fn parse(altitude: &str, distance: &str, time: &str) -> Result<Self, ApproachError> {
        Self::new(
            parse_f64(altitude, ALTITUDE_FIELD)?,
            parse_f64(distance, DISTANCE_FIELD)?,
            parse_f64(time, TIME_FIELD)?,
        )
    }

    pub fn validate(&self) -> Result<(), ApproachError> {
        check_positive(self.altitude_ft, ALTITUDE_FIELD)?;
        check_positive(self.horizontal_distance_ft, DISTANCE_FIELD)?;
        check_positive(self.time_min, TIME_FIELD)?;
        Ok(())
    }
}

pub fn calculate_approach(
    measurement: ApproachMeasurement,
) -> Result<ApproachResult, ApproachError> {
    measurement.validate()?;

    let angle_deg = glide_slope_ratio(measurement).atan().to_degrees();
    let distance_nm = measurement.horizontal_distance_ft / FEET_PER_NAUTICAL_MILE;
    let speed_knots = distance_nm / (measurement.time_min / MINUTES_PER_HOUR);

    Ok(ApproachResult {
        angle_deg,
        speed_knots,
    })
}

/// Feet of altitude lost per foot of horizontal distance.
pub fn glide_slope_ratio(measurement: ApproachMeasurement) -> f64 {
    measurement.altitude_ft / measurement.horizontal_distance_ft
}

/// Start and threshold points as (horizontal distance, altitude).
pub fn approach_path(measurement: ApproachMeasurement) -> [(f64, f64); 2] {
    [
        (0.0, measurement.altitude_ft),
        (measurement.horizontal_distance_ft, 0.0),
    ]
}

/// Same path as (horizontal distance, lateral offset, altitude). The lateral
/// offset is always zero.
pub fn approach_path_3d(measurement: ApproachMeasurement) -> [(f64, f64, f64); 2] {
    [
        (0.0, 0.0, measurement.altitude_ft),
        (measurement.horizontal_distance_ft, 0.0, 0.0),
    ]
}
