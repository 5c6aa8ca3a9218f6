//! Benchmark execution engine
//!
//! A sweep runs one algorithm across a list of input sizes:
//!
//! 1. **Process runner** (`process.rs`): launches `perf_<algorithm>` or
//!    `perf_<backend>_<algorithm>` with the size as its only argument and
//!    reads the `time:` line from its stdout.
//! 2. **Competitor registry** (`competitors.rs`): decides which competing
//!    backends have an executable for the algorithm.
//! 3. **Orchestrator** (`orchestrator.rs`): runs the primary implementation,
//!    then each eligible competitor, and collects the samples into a report.

pub mod competitors;
pub mod orchestrator;
pub mod process;

pub use competitors::CompetitorRegistry;
pub use orchestrator::BenchmarkOrchestrator;
pub use process::{parse_time_output, ProcessRunner, TimingSource};
