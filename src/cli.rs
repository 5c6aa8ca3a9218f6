//! Command-line arguments for `perfsweep`

use std::path::PathBuf;

use clap::Parser;

use crate::constants::{
    DEFAULT_ALGORITHM, DEFAULT_COMPETITORS, DEFAULT_MAX_SIZE_EXPONENT, DEFAULT_MIN_SIZE_EXPONENT,
    power_of_two_sizes,
};
use crate::models::PlotMode;
use crate::presenter::OutputMode;

#[derive(Debug, Parser)]
#[command(name = "perfsweep")]
#[command(about = "Time one algorithm across input sizes against competing backends")]
#[command(version)]
pub struct Args {
    /// Algorithm to benchmark
    #[arg(default_value = DEFAULT_ALGORITHM)]
    pub algorithm: String,

    /// Plot elapsed time per size
    #[arg(long, conflicts_with_all = ["plot_rate", "json"])]
    pub plot_time: bool,

    /// Plot processing rate per size
    #[arg(long, conflicts_with = "json")]
    pub plot_rate: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Competing backends to try (comma-separated)
    #[arg(long, value_delimiter = ',', default_values = DEFAULT_COMPETITORS.iter().copied())]
    pub competitors: Vec<String>,

    /// Input sizes (comma-separated); defaults to every power of two from 2 to 2^25
    #[arg(long, value_delimiter = ',')]
    pub sizes: Vec<u64>,

    /// Directory holding the benchmark executables [default: PERF_BIN_DIR]
    #[arg(long)]
    pub bin_dir: Option<PathBuf>,

    /// Directory receiving plots [default: PERF_PLOTS_DIR]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

impl Args {
    pub fn output_mode(&self) -> OutputMode {
        if self.plot_time {
            OutputMode::Plot(PlotMode::Time)
        } else if self.plot_rate {
            OutputMode::Plot(PlotMode::Rate)
        } else if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }

    /// Requested sizes, ascending and without repeats
    pub fn sizes(&self) -> Vec<u64> {
        if self.sizes.is_empty() {
            return power_of_two_sizes(DEFAULT_MIN_SIZE_EXPONENT, DEFAULT_MAX_SIZE_EXPONENT);
        }

        let mut sizes = self.sizes.clone();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}
