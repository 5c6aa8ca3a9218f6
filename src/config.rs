//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! Configuration is loaded once by each driver at startup.

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_BIN_DIR, DEFAULT_LOG_FILTER, DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_WIDTH,
    DEFAULT_PLOTS_DIR,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub plot: PlotConfig,
    pub rust_log: String,
}

/// Where benchmark executables live and where artifacts go
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Fixed directory the benchmark executables are resolved against
    pub bin_dir: PathBuf,
    /// Output directory for rendered plots
    pub plots_dir: PathBuf,
}

/// Rendered image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_PLOT_WIDTH,
            height: DEFAULT_PLOT_HEIGHT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            storage: StorageConfig::from_env(),
            plot: PlotConfig::from_env()?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

impl StorageConfig {
    fn from_env() -> Self {
        Self {
            bin_dir: PathBuf::from(
                env::var("PERF_BIN_DIR").unwrap_or_else(|_| DEFAULT_BIN_DIR.to_string()),
            ),
            plots_dir: PathBuf::from(
                env::var("PERF_PLOTS_DIR").unwrap_or_else(|_| DEFAULT_PLOTS_DIR.to_string()),
            ),
        }
    }
}

impl PlotConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            width: parse_var(
                "PERF_PLOT_WIDTH",
                env::var("PERF_PLOT_WIDTH").ok(),
                DEFAULT_PLOT_WIDTH,
            )?,
            height: parse_var(
                "PERF_PLOT_HEIGHT",
                env::var("PERF_PLOT_HEIGHT").ok(),
                DEFAULT_PLOT_HEIGHT,
            )?,
        })
    }
}

fn parse_var(name: &str, raw: Option<String>, default: u32) -> Result<u32, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => match value.trim().parse::<u32>() {
            Ok(parsed) if parsed > 0 => Ok(parsed),
            _ => Err(ConfigError::InvalidValue(name.to_string())),
        },
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let plot = PlotConfig::default();
        assert_eq!(plot.width, 1000);
        assert_eq!(plot.height, 600);
    }

    #[test]
    fn test_parse_var() {
        assert_eq!(parse_var("W", None, 7).unwrap(), 7);
        assert_eq!(parse_var("W", Some("1200".to_string()), 7).unwrap(), 1200);
        assert!(matches!(
            parse_var("W", Some("wide".to_string()), 7),
            Err(ConfigError::InvalidValue(name)) if name == "W"
        ));
        assert!(parse_var("W", Some("0".to_string()), 7).is_err());
    }
}
