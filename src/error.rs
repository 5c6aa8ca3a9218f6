//! Custom error types and handling
//!
//! `AppError` covers everything that can abort a driver. `MeasureError`
//! names the ways a single measurement can fail; those never abort a sweep
//! and are folded into the no-measurement sentinel by the process runner.

use std::path::PathBuf;
use std::process::ExitStatus;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    // Output errors
    #[error("Plot error: {0}")]
    Plot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Plot(_) => "PLOT_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Why a single benchmark invocation produced no timing
#[derive(Debug, thiserror::Error)]
pub enum MeasureError {
    #[error("benchmark executable not found: {}", .0.display())]
    MissingExecutable(PathBuf),

    #[error("failed to spawn {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} exited with {status}", .path.display())]
    NonZeroExit { path: PathBuf, status: ExitStatus },

    #[error("no time line in output")]
    ParseMiss,

    #[error("unparseable time value: {0:?}")]
    MalformedTime(String),
}
