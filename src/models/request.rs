//! Benchmark request model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::utils::validation::{validate_algorithm_name, validate_backend_label, validate_sizes};

/// One sweep to run: an algorithm, its input sizes and the competitors to try
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BenchmarkRequest {
    #[validate(length(min = 1))]
    pub algorithm: String,

    /// Input sizes in invocation order
    pub sizes: Vec<u64>,

    /// Competitor backend labels, attempted in this order
    pub competitors: Vec<String>,
}

impl BenchmarkRequest {
    pub fn new<S>(
        algorithm: impl Into<String>,
        sizes: Vec<u64>,
        competitors: impl IntoIterator<Item = S>,
    ) -> Self
    where
        S: Into<String>,
    {
        Self {
            algorithm: algorithm.into(),
            sizes,
            competitors: competitors.into_iter().map(Into::into).collect(),
        }
    }

    /// Run the derived and hand-written checks
    pub fn ensure_valid(&self) -> AppResult<()> {
        self.validate()?;

        validate_algorithm_name(&self.algorithm)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validate_sizes(&self.sizes).map_err(|e| AppError::Validation(e.to_string()))?;

        for competitor in &self.competitors {
            validate_backend_label(competitor).map_err(|e| AppError::Validation(e.to_string()))?;
        }

        Ok(())
    }

    /// Number of processes a sweep will launch given how many competitors are eligible
    pub fn invocation_count(&self, eligible_competitors: usize) -> usize {
        self.sizes.len() * (1 + eligible_competitors)
    }
}
