//! Domain models
//!
//! This module contains the data the sweep produces and consumes.

pub mod chart;
pub mod report;
pub mod request;

pub use chart::*;
pub use report::*;
pub use request::*;
