use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::path::Path;

use crate::core::approach::{ApproachMeasurement, ApproachResult};
use crate::error::OutputError;
use crate::output::format::float_text;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// One row of the approach log, as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: String,
    pub altitude_ft: String,
    pub horizontal_distance_ft: String,
    pub time_min: String,
    pub angle_deg: String,
    pub speed_knots: String,
}

impl LogRecord {
    pub fn new(measurement: &ApproachMeasurement, result: &ApproachResult) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            altitude_ft: float_text(measurement.altitude_ft),
            horizontal_distance_ft: float_text(measurement.horizontal_distance_ft),
            time_min: float_text(measurement.time_min),
            angle_deg: format!("{:.2}", result.angle_deg),
            speed_knots: format!("{:.2}", result.speed_knots),
        }
    }

    fn fields(&self) -> [&str; 6] {
        [
            self.timestamp.as_str(),
            self.altitude_ft.as_str(),
            self.horizontal_distance_ft.as_str(),
            self.time_min.as_str(),
            self.angle_deg.as_str(),
            self.speed_knots.as_str(),
        ]
    }
}

/// Appends one record and closes the file before returning.
pub fn append_record(
    path: &Path,
    measurement: &ApproachMeasurement,
    result: &ApproachResult,
) -> Result<LogRecord, OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    let record = LogRecord::new(measurement, result);
    writer.write_record(record.fields())?;
    writer.flush()?;

    log::debug!("Appended approach record to {}", path.display());
    Ok(record)
}

/// Reads every record back; a missing log reads as empty.
pub fn read_records(path: &Path) -> Result<Vec<LogRecord>, OutputError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        if row.len() < 6 {
            log::warn!(
                "Skipping short log row ({} fields) in {}",
                row.len(),
                path.display()
            );
            continue;
        }
        records.push(LogRecord {
            timestamp: row[0].to_string(),
            altitude_ft: row[1].to_string(),
            horizontal_distance_ft: row[2].to_string(),
            time_min: row[3].to_string(),
            angle_deg: row[4].to_string(),
            speed_knots: row[5].to_string(),
        });
    }
    Ok(records)
}
