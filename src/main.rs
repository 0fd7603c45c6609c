use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use glide_approach::config::Config;
use glide_approach::core::sampler::Sampler;
use glide_approach::error::SessionError;
use glide_approach::output::csv_log::read_records;
use glide_approach::output::format::{float_text, format_angle, format_speed};
use glide_approach::session::{CalculationRecord, run_calculation, run_from_text};

#[derive(Parser, Debug)]
#[command(name = "glide-approach")]
#[command(version, about = "Aircraft approach angle & speed analyzer")]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Altitude loss in feet
    altitude_ft: Option<String>,

    /// Horizontal distance to the threshold in feet
    distance_ft: Option<String>,

    /// Time taken in minutes
    time_min: Option<String>,

    /// Use sampled sensor data instead of typed values
    #[arg(long, conflicts_with_all = ["altitude_ft", "distance_ft", "time_min"])]
    sample: bool,

    /// Seed for --sample
    #[arg(long, requires = "sample")]
    seed: Option<u64>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip the CSV log
    #[arg(long)]
    no_log: bool,

    /// Skip the PDF report
    #[arg(long)]
    no_report: bool,

    /// Skip the PNG charts
    #[arg(long)]
    no_charts: bool,

    /// Print the approach log and exit
    #[arg(long)]
    history: bool,
}

fn read_field(prompt: &str) -> Result<String, String> {
    print!("{prompt}");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .map_err(|e| format!("Could not read input: {e}"))?;

    if bytes == 0 {
        return Err("Input ended unexpectedly (EOF).".to_string());
    }
    Ok(line)
}

fn load_config(cli: &Cli) -> Result<Config, String> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .map_err(|e| format!("Could not load config '{}': {e}", path.display()))?,
        None => Config::default(),
    };

    if cli.no_log {
        config.output.write_log = false;
    }
    if cli.no_report {
        config.output.write_report = false;
    }
    if cli.no_charts {
        config.output.write_charts = false;
    }
    Ok(config)
}

fn print_history(config: &Config) -> Result<(), String> {
    let records = read_records(&config.output.log_path).map_err(|e| e.to_string())?;
    if records.is_empty() {
        println!("No calculations logged in {}", config.output.log_path.display());
        return Ok(());
    }

    for record in records {
        println!(
            "{} | altitude {} ft | distance {} ft | time {} min | angle {}° | speed {} kt",
            record.timestamp,
            record.altitude_ft,
            record.horizontal_distance_ft,
            record.time_min,
            record.angle_deg,
            record.speed_knots
        );
    }
    Ok(())
}

fn print_record(record: &CalculationRecord) {
    println!("\n{}", format_angle(&record.result));
    println!("{}", format_speed(&record.result));
    for artifact in &record.artifacts {
        println!("  wrote {}", artifact.display());
    }
}

fn describe(err: SessionError) -> String {
    match err {
        SessionError::Input(e) => format!("Input Error: Please enter valid numeric values. ({e})"),
        SessionError::Output(e) => format!("Output Error: {e}"),
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = load_config(&cli)?;

    if cli.history {
        return print_history(&config);
    }

    let record = if cli.sample {
        let sampler = match cli.seed.or(config.sampler.seed) {
            Some(seed) => Sampler::seeded(seed),
            None => Sampler::from_clock(),
        };
        let measurement = sampler.sample();
        println!(
            "Sampled: altitude {} ft, distance {} ft, time {} min",
            float_text(measurement.altitude_ft),
            float_text(measurement.horizontal_distance_ft),
            float_text(measurement.time_min)
        );
        run_calculation(measurement, &config.output).map_err(describe)?
    } else {
        let (altitude, distance, time) = match (cli.altitude_ft, cli.distance_ft, cli.time_min) {
            (Some(a), Some(d), Some(t)) => (a, d, t),
            (None, None, None) => (
                read_field("Altitude Loss (ft): ")?,
                read_field("Horizontal Distance (ft): ")?,
                read_field("Time Taken (min): ")?,
            ),
            _ => {
                return Err(
                    "Expected exactly 3 values: <altitude_ft> <distance_ft> <time_min>."
                        .to_string(),
                );
            }
        };
        run_from_text(&altitude, &distance, &time, &config.output).map_err(describe)?
    };

    print_record(&record);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_approach::core::approach::ApproachMeasurement;

    #[test]
    fn parses_three_positional_values() {
        let cli = Cli::try_parse_from(["glide-approach", "1000", "10000", "3"])
            .expect("arguments should parse");

        assert_eq!(cli.altitude_ft.as_deref(), Some("1000"));
        assert_eq!(cli.distance_ft.as_deref(), Some("10000"));
        assert_eq!(cli.time_min.as_deref(), Some("3"));
        assert!(!cli.sample);
    }

    #[test]
    fn negative_values_reach_validation() {
        let cli = Cli::try_parse_from(["glide-approach", "-1000", "10000", "3"])
            .expect("negative numbers should parse as values");

        assert_eq!(cli.altitude_ft.as_deref(), Some("-1000"));
    }

    #[test]
    fn sample_conflicts_with_values() {
        assert!(Cli::try_parse_from(["glide-approach", "--sample", "1000"]).is_err());
        assert!(Cli::try_parse_from(["glide-approach", "--seed", "3"]).is_err());
        assert!(Cli::try_parse_from(["glide-approach", "--sample", "--seed", "3"]).is_ok());
    }

    #[test]
    fn flags_disable_sinks() {
        let cli = Cli::try_parse_from(["glide-approach", "--no-log", "--no-charts"])
            .expect("flags should parse");
        let config = load_config(&cli).expect("default config");

        assert!(!config.output.write_log);
        assert!(config.output.write_report);
        assert!(!config.output.write_charts);
    }

    #[test]
    fn input_errors_read_like_the_form_notice() {
        let err = ApproachMeasurement::parse("x", "1", "1").expect_err("should fail");
        let message = describe(SessionError::Input(err));

        assert!(message.starts_with("Input Error: Please enter valid numeric values."));
    }
}
