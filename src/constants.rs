//! Application-wide constants
//!
//! Fixed defaults for the sweep drivers. Constants are grouped by their
//! purpose for better organization.

// =============================================================================
// MEASUREMENT
// =============================================================================

/// Elapsed time recorded when no valid measurement was obtained
pub const NO_MEASUREMENT: f64 = 0.0;

/// Prefix of the stdout line carrying the elapsed time in milliseconds
pub const TIME_LINE_PREFIX: &str = "time:";

/// Prefix shared by every benchmark executable name
pub const EXECUTABLE_PREFIX: &str = "perf";

/// Backend label under which the primary implementation is recorded
pub const PRIMARY_BACKEND: &str = backends::COMPUTE;

// =============================================================================
// SWEEP DEFAULTS
// =============================================================================

/// Algorithm swept by `perfsweep` when none is given
pub const DEFAULT_ALGORITHM: &str = "sort";

/// Smallest power of two in the default size sweep
pub const DEFAULT_MIN_SIZE_EXPONENT: u32 = 1;

/// Largest power of two in the default size sweep
pub const DEFAULT_MAX_SIZE_EXPONENT: u32 = 25;

/// Competitors attempted by `perfsweep` when none are given
pub const DEFAULT_COMPETITORS: &[&str] = &[backends::TBB, backends::THRUST, backends::STL];

// =============================================================================
// CONFIGURATION DEFAULTS
// =============================================================================

/// Directory holding the benchmark executables
pub const DEFAULT_BIN_DIR: &str = "./perf";

/// Directory receiving rendered plots
pub const DEFAULT_PLOTS_DIR: &str = "perf_plots";

/// Default plot width in pixels
pub const DEFAULT_PLOT_WIDTH: u32 = 1000;

/// Default plot height in pixels
pub const DEFAULT_PLOT_HEIGHT: u32 = 600;

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "perfsweep=info";

/// Extension of rendered plot files
pub const PLOT_EXTENSION: &str = "svg";

// =============================================================================
// BACKENDS
// =============================================================================

/// Backend identifiers
pub mod backends {
    pub const COMPUTE: &str = "compute";
    pub const STL: &str = "stl";
    pub const TBB: &str = "tbb";
    pub const THRUST: &str = "thrust";
}

/// Human-readable legend labels for the batch report
pub fn display_label(backend: &str) -> &str {
    match backend {
        backends::COMPUTE => "Boost.Compute",
        backends::STL => "C++ STL",
        backends::TBB => "Intel TBB",
        backends::THRUST => "Thrust",
        other => other,
    }
}

// =============================================================================
// BATCH REPORT
// =============================================================================

/// Batch report settings used by `perfdoc`
pub mod doc {
    use super::backends;

    /// Smallest power of two swept by the batch report
    pub const MIN_SIZE_EXPONENT: u32 = 10;

    /// Largest power of two swept by the batch report
    pub const MAX_SIZE_EXPONENT: u32 = 25;

    /// The single competitor compared in the batch report
    pub const COMPETITOR: &str = backends::STL;

    /// Algorithms swept by the batch report
    pub const ALGORITHMS: &[&str] = &[
        "accumulate",
        "count",
        "inner_product",
        "merge",
        "partial_sum",
        "partition",
        "reverse",
        "rotate",
        "saxpy",
        "set_difference",
        "sort",
        "unique",
    ];
}

/// Powers of two `2^min ..= 2^max`, ascending
pub fn power_of_two_sizes(min_exponent: u32, max_exponent: u32) -> Vec<u64> {
    (min_exponent..=max_exponent).map(|e| 1u64 << e).collect()
}
