//! perfsweep - Benchmark Sweep Harness
//!
//! Runs prebuilt per-algorithm benchmark executables over a range of input
//! sizes, for a primary implementation and a set of competing backends, and
//! presents the collected timings as text, JSON or log-log charts.
//!
//! # Architecture
//!
//! - **Benchmark**: process runner, competitor registry and sweep orchestrator
//! - **Models**: requests, reports and chart data
//! - **Presenter**: output modes and chart rendering
//! - **Config / CLI**: environment and command-line inputs for the binaries

pub mod benchmark;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod presenter;
pub mod utils;

// Re-export commonly used types
pub use benchmark::{BenchmarkOrchestrator, CompetitorRegistry, ProcessRunner, TimingSource};
pub use config::Config;
pub use error::{AppError, AppResult, MeasureError};
pub use models::{BenchmarkRequest, PlotMode, Report, Sample};
pub use presenter::{OutputMode, Presenter};
