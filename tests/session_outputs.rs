use std::fs;
use std::path::{Path, PathBuf};

use glide_approach::config::OutputConfig;
use glide_approach::core::sampler::Sampler;
use glide_approach::output::csv_log::read_records;
use glide_approach::session::{run_calculation, run_from_text};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "glide_approach_session_{name}_{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    dir
}

/// Log and report only; the chart sinks are covered by `every_sink_runs_in_order`.
fn file_sinks(dir: &Path) -> OutputConfig {
    OutputConfig {
        write_charts: false,
        ..OutputConfig::in_dir(dir)
    }
}

#[test]
fn valid_text_input_writes_log_and_report() {
    let dir = scratch_dir("valid");
    let output = file_sinks(&dir);

    let record =
        run_from_text("1500", "12000", "3.5", &output).expect("calculation should succeed");

    assert!((record.result.angle_deg - 7.125).abs() < 0.001);
    assert!((record.result.speed_knots - 33.856).abs() < 0.001);
    assert_eq!(
        record.artifacts,
        vec![output.log_path.clone(), output.report_path.clone()]
    );

    let rows = read_records(&output.log_path).expect("log readable");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].angle_deg, "7.13");
    assert_eq!(rows[0].speed_knots, "33.86");
    assert!(fs::metadata(&output.report_path).expect("report exists").len() > 0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn non_numeric_input_has_no_side_effects() {
    let dir = scratch_dir("non_numeric");
    let output = OutputConfig::in_dir(&dir);

    let err = run_from_text("abc", "12000", "3.5", &output).expect_err("should be rejected");

    assert!(err.is_invalid_input());
    assert!(!output.log_path.exists());
    assert!(!output.report_path.exists());
    assert!(!output.chart_path.exists());
    assert!(!output.chart_3d_path.exists());
}

#[test]
fn zero_distance_has_no_side_effects() {
    let dir = scratch_dir("zero_distance");
    let output = OutputConfig::in_dir(&dir);

    let err = run_from_text("1000", "0", "3", &output).expect_err("should be rejected");

    assert!(err.is_invalid_input());
    assert!(!dir.exists());
}

#[test]
fn repeated_runs_append_log_rows() {
    let dir = scratch_dir("repeated");
    let output = OutputConfig {
        write_report: false,
        ..file_sinks(&dir)
    };
    let sampler = Sampler::seeded(2024);

    for _ in 0..3 {
        run_calculation(sampler.sample(), &output).expect("sampled input is valid");
    }

    let rows = read_records(&output.log_path).expect("log readable");
    assert_eq!(rows.len(), 3);
    assert!(!output.report_path.exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn disabled_sinks_write_nothing() {
    let dir = scratch_dir("disabled");
    let output = OutputConfig {
        write_log: false,
        write_report: false,
        write_charts: false,
        ..OutputConfig::in_dir(&dir)
    };

    let record = run_from_text("1000", "10000", "3", &output).expect("valid input");

    assert!(record.artifacts.is_empty());
    assert!(!dir.exists());
}

#[test]
fn every_sink_runs_in_order() {
    let dir = scratch_dir("all_sinks");
    let output = OutputConfig::in_dir(&dir);

    let record = run_from_text("1000.0", "10000", "3", &output).expect("valid input");

    assert_eq!(
        record.artifacts,
        vec![
            output.log_path.clone(),
            output.report_path.clone(),
            output.chart_path.clone(),
            output.chart_3d_path.clone(),
        ]
    );
    for path in &record.artifacts {
        assert!(fs::metadata(path).expect("artifact exists").len() > 0);
    }
    for chart in [&output.chart_path, &output.chart_3d_path] {
        let bytes = fs::read(chart).expect("chart readable");
        assert!(bytes.starts_with(b"\x89PNG"), "{}", chart.display());
    }

    let rows = read_records(&output.log_path).expect("log readable");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].altitude_ft, "1000.0");
    assert_eq!(rows[0].horizontal_distance_ft, "10000.0");
    assert_eq!(rows[0].time_min, "3.0");

    let _ = fs::remove_dir_all(&dir);
}
