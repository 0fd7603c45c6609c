use thiserror::Error;

/// Raised for any measurement that cannot feed the approach formulas.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApproachError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl ApproachError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV log error: {0}")]
    Csv(#[from] csv::Error),
    #[error("chart rendering failed for {path}: {message}")]
    Chart { path: String, message: String },
    #[error("report generation failed: {0}")]
    Report(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] ApproachError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

impl SessionError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}
