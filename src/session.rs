use std::path::PathBuf;

use crate::config::OutputConfig;
use crate::core::approach::{ApproachMeasurement, ApproachResult, calculate_approach};
use crate::error::{OutputError, SessionError};
use crate::output::{chart, csv_log, report};

/// A finished calculation and the files its sinks wrote.
#[derive(Debug, Clone)]
pub struct CalculationRecord {
    pub measurement: ApproachMeasurement,
    pub result: ApproachResult,
    pub artifacts: Vec<PathBuf>,
}

fn chart_error(path: &std::path::Path, err: Box<dyn std::error::Error>) -> OutputError {
    OutputError::Chart {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

/// Computes the result and runs every enabled sink in order:
/// log, report, 2D chart, 3D chart.
pub fn run_calculation(
    measurement: ApproachMeasurement,
    output: &OutputConfig,
) -> Result<CalculationRecord, SessionError> {
    let result = calculate_approach(measurement)?;
    log::info!(
        "Approach angle {:.2} deg, groundspeed {:.2} kt (altitude {} ft, distance {} ft, time {} min)",
        result.angle_deg,
        result.speed_knots,
        measurement.altitude_ft,
        measurement.horizontal_distance_ft,
        measurement.time_min
    );

    let mut artifacts = Vec::new();

    if output.write_log {
        csv_log::append_record(&output.log_path, &measurement, &result)?;
        artifacts.push(output.log_path.clone());
    }

    if output.write_report {
        report::write_report(&output.report_path, &measurement, &result)?;
        artifacts.push(output.report_path.clone());
    }

    if output.write_charts {
        chart::render_path_chart(&output.chart_path, &measurement)
            .map_err(|e| chart_error(&output.chart_path, e))?;
        artifacts.push(output.chart_path.clone());

        chart::render_path_chart_3d(&output.chart_3d_path, &measurement)
            .map_err(|e| chart_error(&output.chart_3d_path, e))?;
        artifacts.push(output.chart_3d_path.clone());
    }

    log::info!("Calculation wrote {} artifact(s)", artifacts.len());
    Ok(CalculationRecord {
        measurement,
        result,
        artifacts,
    })
}

/// Parses raw form text first; rejected input never reaches a sink.
pub fn run_from_text(
    altitude: &str,
    distance: &str,
    time: &str,
    output: &OutputConfig,
) -> Result<CalculationRecord, SessionError> {
    let measurement = ApproachMeasurement::parse(altitude, distance, time).inspect_err(|e| {
        log::warn!("Rejected approach input: {e}");
    })?;
    run_calculation(measurement, output)
}
