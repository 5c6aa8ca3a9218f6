//! Benchmark process runner
//!
//! Launches one benchmark executable with one size argument and reads the
//! elapsed time it reports on stdout.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::fs;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::constants::{EXECUTABLE_PREFIX, NO_MEASUREMENT, TIME_LINE_PREFIX};
use crate::error::MeasureError;

/// Anything that can time one algorithm at one size for one backend.
///
/// `backend` is `None` for the primary implementation. Implementations never
/// fail: a missing or broken measurement is reported as [`NO_MEASUREMENT`].
#[async_trait]
pub trait TimingSource: Send + Sync {
    async fn measure(&self, algorithm: &str, size: u64, backend: Option<&str>) -> f64;
}

/// Runs benchmark executables found in a fixed directory
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    bin_dir: PathBuf,
}

impl ProcessRunner {
    /// Create a runner resolving executables against `bin_dir`
    pub fn new(bin_dir: impl Into<PathBuf>) -> Self {
        Self {
            bin_dir: bin_dir.into(),
        }
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// `perf_<algorithm>` for the primary implementation,
    /// `perf_<backend>_<algorithm>` for a competitor
    pub fn executable_name(algorithm: &str, backend: Option<&str>) -> String {
        match backend {
            Some(backend) => format!("{}_{}_{}", EXECUTABLE_PREFIX, backend, algorithm),
            None => format!("{}_{}", EXECUTABLE_PREFIX, algorithm),
        }
    }

    /// Full path of the executable for an algorithm/backend pair
    pub fn executable_path(&self, algorithm: &str, backend: Option<&str>) -> PathBuf {
        self.bin_dir.join(Self::executable_name(algorithm, backend))
    }

    /// Run one benchmark and return its reported time, keeping the failure reason.
    pub async fn try_measure(
        &self,
        algorithm: &str,
        size: u64,
        backend: Option<&str>,
    ) -> Result<f64, MeasureError> {
        let path = self.executable_path(algorithm, backend);

        let is_file = fs::metadata(&path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if !is_file {
            return Err(MeasureError::MissingExecutable(path));
        }

        // No timeout: a hung benchmark blocks the sweep until it exits.
        let output = Command::new(&path)
            .arg(size.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| MeasureError::Spawn {
                path: path.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(MeasureError::NonZeroExit {
                path,
                status: output.status,
            });
        }

        parse_time_output(&String::from_utf8_lossy(&output.stdout))
    }
}

#[async_trait]
impl TimingSource for ProcessRunner {
    async fn measure(&self, algorithm: &str, size: u64, backend: Option<&str>) -> f64 {
        match self.try_measure(algorithm, size, backend).await {
            Ok(elapsed_ms) => elapsed_ms,
            Err(err @ (MeasureError::ParseMiss | MeasureError::MalformedTime(_))) => {
                debug!(algorithm, size, backend, "No timing recorded: {}", err);
                NO_MEASUREMENT
            }
            Err(err) => {
                warn!(algorithm, size, backend, "Benchmark failed: {}", err);
                NO_MEASUREMENT
            }
        }
    }
}

/// Extract the elapsed time from benchmark stdout.
///
/// Every line starting with `time:` is a candidate and the last one wins.
/// Its first whitespace-delimited token must be a non-negative number of
/// milliseconds.
pub fn parse_time_output(stdout: &str) -> Result<f64, MeasureError> {
    let last = stdout
        .lines()
        .filter_map(|line| line.strip_prefix(TIME_LINE_PREFIX))
        .last()
        .ok_or(MeasureError::ParseMiss)?;

    let token = last.split_whitespace().next().unwrap_or_default();
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(MeasureError::MalformedTime(last.trim().to_string())),
    }
}
