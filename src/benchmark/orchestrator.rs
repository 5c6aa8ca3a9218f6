//! Benchmark orchestrator - drives one algorithm's sweep across backends

use std::time::Instant;

use tracing::{debug, info};

use super::competitors::CompetitorRegistry;
use super::process::TimingSource;
use crate::constants::PRIMARY_BACKEND;
use crate::error::AppResult;
use crate::models::{BenchmarkRequest, Report};
use crate::utils::time::format_elapsed;

/// Runs the primary implementation and every eligible competitor over a
/// list of sizes, one process at a time.
pub struct BenchmarkOrchestrator<'r, S> {
    source: S,
    registry: &'r CompetitorRegistry,
}

impl<S: TimingSource> BenchmarkOrchestrator<'static, S> {
    /// Create an orchestrator filtering competitors with the built-in registry
    pub fn new(source: S) -> Self {
        Self {
            source,
            registry: CompetitorRegistry::global(),
        }
    }
}

impl<'r, S: TimingSource> BenchmarkOrchestrator<'r, S> {
    /// Create an orchestrator with a custom registry
    pub fn with_registry(source: S, registry: &'r CompetitorRegistry) -> Self {
        Self { source, registry }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Competitors from the request that have an executable for its algorithm
    pub fn eligible_competitors<'a>(&self, request: &'a BenchmarkRequest) -> Vec<&'a str> {
        request
            .competitors
            .iter()
            .map(String::as_str)
            .filter(|competitor| self.registry.supports(competitor, &request.algorithm))
            .collect()
    }

    /// Run the sweep and collect every sample into a fresh report.
    ///
    /// Sizes are used in the order given. Per-sample failures are already
    /// folded into the sentinel by the timing source, so only an invalid
    /// request makes this fail.
    pub async fn run(&self, request: &BenchmarkRequest) -> AppResult<Report> {
        request.ensure_valid()?;

        let competitors = self.eligible_competitors(request);
        info!(
            algorithm = %request.algorithm,
            sizes = request.sizes.len(),
            competitors = ?competitors,
            invocations = request.invocation_count(competitors.len()),
            "Starting benchmark sweep"
        );

        let mut report = Report::new(request.algorithm.as_str());

        self.sweep(&mut report, &request.algorithm, &request.sizes, None)
            .await;

        for competitor in &request.competitors {
            if !self.registry.supports(competitor, &request.algorithm) {
                debug!(
                    algorithm = %request.algorithm,
                    backend = %competitor,
                    "No comparison available, skipping backend"
                );
                continue;
            }

            self.sweep(
                &mut report,
                &request.algorithm,
                &request.sizes,
                Some(competitor.as_str()),
            )
            .await;
        }

        Ok(report)
    }

    async fn sweep(
        &self,
        report: &mut Report,
        algorithm: &str,
        sizes: &[u64],
        backend: Option<&str>,
    ) {
        let label = backend.unwrap_or(PRIMARY_BACKEND);
        let start = Instant::now();

        for &size in sizes {
            let elapsed_ms = self.source.measure(algorithm, size, backend).await;
            debug!(algorithm, backend = label, size, elapsed_ms, "Sample recorded");
            report.add_sample(label, size, elapsed_ms);
        }

        info!(
            algorithm,
            backend = label,
            elapsed = %format_elapsed(start.elapsed()),
            "Sweep finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::AppError;

    type Call = (String, u64, Option<String>);

    /// Records every call and answers with a fixed function of the inputs
    struct FakeSource {
        calls: Mutex<Vec<Call>>,
        timing: fn(&str, u64, Option<&str>) -> f64,
    }

    impl FakeSource {
        fn new(timing: fn(&str, u64, Option<&str>) -> f64) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                timing,
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TimingSource for FakeSource {
        async fn measure(&self, algorithm: &str, size: u64, backend: Option<&str>) -> f64 {
            self.calls.lock().unwrap().push((
                algorithm.to_string(),
                size,
                backend.map(str::to_string),
            ));
            (self.timing)(algorithm, size, backend)
        }
    }

    fn size_as_time(_: &str, size: u64, _: Option<&str>) -> f64 {
        size as f64
    }

    fn sizes_of(report: &Report, backend: &str) -> Vec<u64> {
        report.samples_for(backend).iter().map(|s| s.size).collect()
    }

    #[tokio::test]
    async fn test_supported_competitor_gets_a_series() {
        let orchestrator = BenchmarkOrchestrator::new(FakeSource::new(size_as_time));
        let request = BenchmarkRequest::new("sort", vec![2, 4, 8], ["tbb"]);

        let report = orchestrator.run(&request).await.unwrap();

        let backends: Vec<&str> = report.backends().collect();
        assert_eq!(backends, vec!["compute", "tbb"]);
        assert_eq!(sizes_of(&report, "compute"), vec![2, 4, 8]);
        assert_eq!(sizes_of(&report, "tbb"), vec![2, 4, 8]);
        assert_eq!(orchestrator.source().calls().len(), 6);
    }

    #[tokio::test]
    async fn test_unsupported_competitor_is_skipped() {
        let orchestrator = BenchmarkOrchestrator::new(FakeSource::new(size_as_time));
        let request = BenchmarkRequest::new("count", vec![2, 4], ["tbb"]);

        let report = orchestrator.run(&request).await.unwrap();

        assert_eq!(report.backends().collect::<Vec<_>>(), vec!["compute"]);
        assert_eq!(report.samples_for("compute").len(), 2);
        assert!(!report.contains_backend("tbb"));
        assert!(orchestrator
            .source()
            .calls()
            .iter()
            .all(|(_, _, backend)| backend.is_none()));
    }

    #[tokio::test]
    async fn test_invocation_order_is_primary_then_competitors() {
        let orchestrator = BenchmarkOrchestrator::new(FakeSource::new(size_as_time));
        let request = BenchmarkRequest::new("accumulate", vec![2, 4], ["stl", "opencl", "tbb"]);

        orchestrator.run(&request).await.unwrap();

        let calls = orchestrator.source().calls();
        let expected: Vec<Call> = vec![
            ("accumulate".to_string(), 2, None),
            ("accumulate".to_string(), 4, None),
            ("accumulate".to_string(), 2, Some("stl".to_string())),
            ("accumulate".to_string(), 4, Some("stl".to_string())),
            ("accumulate".to_string(), 2, Some("tbb".to_string())),
            ("accumulate".to_string(), 4, Some("tbb".to_string())),
        ];
        assert_eq!(calls, expected);
        assert_eq!(calls.len(), request.invocation_count(2));
    }

    #[tokio::test]
    async fn test_sizes_are_not_reordered() {
        let orchestrator = BenchmarkOrchestrator::new(FakeSource::new(size_as_time));
        let request = BenchmarkRequest::new("sort", vec![8, 2, 4], Vec::<String>::new());

        let report = orchestrator.run(&request).await.unwrap();
        assert_eq!(sizes_of(&report, "compute"), vec![8, 2, 4]);
    }

    #[tokio::test]
    async fn test_failed_measurements_are_recorded_as_sentinel() {
        fn competitor_fails(_: &str, _: u64, backend: Option<&str>) -> f64 {
            if backend.is_some() { 0.0 } else { 1.0 }
        }
        let orchestrator = BenchmarkOrchestrator::new(FakeSource::new(competitor_fails));
        let request = BenchmarkRequest::new("sort", vec![2, 4], ["thrust"]);

        let report = orchestrator.run(&request).await.unwrap();

        assert!(report.samples_for("thrust").iter().all(|s| s.elapsed_ms == 0.0));
        assert!(report.samples_for("compute").iter().all(|s| s.elapsed_ms == 1.0));
    }

    #[tokio::test]
    async fn test_invalid_request_launches_nothing() {
        let orchestrator = BenchmarkOrchestrator::new(FakeSource::new(size_as_time));
        let request = BenchmarkRequest::new("sort", vec![0, 2], ["tbb"]);

        let result = orchestrator.run(&request).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(orchestrator.source().calls().is_empty());
    }

    #[tokio::test]
    async fn test_custom_registry() {
        let registry = CompetitorRegistry::from_table(&[("omp", &["scan"])]);
        let orchestrator =
            BenchmarkOrchestrator::with_registry(FakeSource::new(size_as_time), &registry);
        let request = BenchmarkRequest::new("scan", vec![16], ["omp", "tbb"]);

        let report = orchestrator.run(&request).await.unwrap();

        assert_eq!(report.backends().collect::<Vec<_>>(), vec!["compute", "omp"]);
        assert_eq!(orchestrator.eligible_competitors(&request), vec!["omp"]);
    }
}
