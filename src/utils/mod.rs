//! Utility functions

pub mod logging;
pub mod time;
pub mod validation;

pub use logging::init_tracing;
pub use time::{format_elapsed, format_milliseconds};
pub use validation::{validate_algorithm_name, validate_backend_label, validate_sizes};
