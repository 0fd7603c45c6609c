use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const DEFAULT_LOG_PATH: &str = "approach_log.csv";
pub const DEFAULT_REPORT_PATH: &str = "approach_report.pdf";
pub const DEFAULT_CHART_PATH: &str = "approach_path.png";
pub const DEFAULT_CHART_3D_PATH: &str = "approach_path_3d.png";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub sampler: SamplerConfig,
}

/// Where each sink writes, and which sinks run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub log_path: PathBuf,
    pub report_path: PathBuf,
    pub chart_path: PathBuf,
    pub chart_3d_path: PathBuf,
    pub write_log: bool,
    pub write_report: bool,
    pub write_charts: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            chart_path: PathBuf::from(DEFAULT_CHART_PATH),
            chart_3d_path: PathBuf::from(DEFAULT_CHART_3D_PATH),
            write_log: true,
            write_report: true,
            write_charts: true,
        }
    }
}

impl OutputConfig {
    /// Every artifact placed under `dir` with its default file name.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            log_path: dir.join(DEFAULT_LOG_PATH),
            report_path: dir.join(DEFAULT_REPORT_PATH),
            chart_path: dir.join(DEFAULT_CHART_PATH),
            chart_3d_path: dir.join(DEFAULT_CHART_3D_PATH),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SamplerConfig {
    pub seed: Option<u64>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").expect("empty config should parse");

        assert_eq!(config.output.log_path, PathBuf::from(DEFAULT_LOG_PATH));
        assert_eq!(config.output.report_path, PathBuf::from(DEFAULT_REPORT_PATH));
        assert!(config.output.write_log);
        assert!(config.output.write_report);
        assert!(config.output.write_charts);
        assert_eq!(config.sampler.seed, None);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [output]
            log_path = "logs/runs.csv"
            write_charts = false

            [sampler]
            seed = 42
            "#,
        )
        .expect("config should parse");

        assert_eq!(config.output.log_path, PathBuf::from("logs/runs.csv"));
        assert_eq!(config.output.chart_path, PathBuf::from(DEFAULT_CHART_PATH));
        assert!(!config.output.write_charts);
        assert!(config.output.write_report);
        assert_eq!(config.sampler.seed, Some(42));
    }

    #[test]
    fn rejects_wrong_types() {
        let err = Config::from_toml("[output]\nwrite_log = \"yes\"\n").expect_err("should fail");

        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn in_dir_moves_every_artifact() {
        let dir = Path::new("/tmp/approach-run");
        let output = OutputConfig::in_dir(dir);

        for path in [
            &output.log_path,
            &output.report_path,
            &output.chart_path,
            &output.chart_3d_path,
        ] {
            assert!(path.starts_with(dir), "{}", path.display());
        }
    }
}
