use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for bcsd-fcst operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Forecast configuration file missing at the given path.
    #[error("Forecast config not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// Forecast configuration file could not be parsed.
    #[error("Failed to parse forecast config: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Model token is not one of the recognized NMME ensemble models.
    #[error("Unrecognized NMME model '{0}'")]
    UnknownModel(String),

    /// Initialization month outside the 1-12 range.
    #[error("Invalid initialization month {month}: must be within 1-12")]
    InvalidCalendarInput { month: u32 },

    /// Batch scheduler rejected a job submission.
    #[error("Failed to submit job '{job}': {details}")]
    JobSubmission { job: String, details: String },

    /// Synchronous member-file copy failed.
    #[error("Failed to copy {src} to {dst}: {details}")]
    CopyFailure { src: String, dst: String, details: String },
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
