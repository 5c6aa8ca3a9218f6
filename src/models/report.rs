//! Benchmark report model
//!
//! A [`Report`] collects, per backend, the (size, elapsed time) samples of one
//! algorithm's sweep. Backends keep the order they were first seen in and
//! samples keep the order they were added in; nothing is sorted or
//! deduplicated.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use super::chart::{Chart, ChartRenderer, PlotMode, Series};
use crate::constants::NO_MEASUREMENT;
use crate::error::AppResult;

/// One measurement of one backend at one input size
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Input size passed to the benchmark
    pub size: u64,
    /// Elapsed time in milliseconds; `0` means no valid measurement
    pub elapsed_ms: f64,
}

impl Sample {
    pub fn new(size: u64, elapsed_ms: f64) -> Self {
        Self { size, elapsed_ms }
    }

    /// Whether this sample carries a real timing rather than the sentinel
    pub fn is_valid(&self) -> bool {
        self.elapsed_ms.is_finite() && self.elapsed_ms > NO_MEASUREMENT
    }
}

/// Aggregated samples for one algorithm, keyed by backend label
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    algorithm: String,
    generated_at: DateTime<Utc>,
    series: IndexMap<String, Vec<Sample>>,
}

impl Report {
    /// Create an empty report for an algorithm
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            generated_at: Utc::now(),
            series: IndexMap::new(),
        }
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Append a sample to a backend's series, creating the series if needed
    pub fn add_sample(&mut self, backend: &str, size: u64, elapsed_ms: f64) {
        self.series
            .entry(backend.to_string())
            .or_default()
            .push(Sample::new(size, elapsed_ms));
    }

    /// Samples of a backend in the order they were added; empty if unknown
    pub fn samples_for(&self, backend: &str) -> &[Sample] {
        self.series.get(backend).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Backend labels in first-seen order
    pub fn backends(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn contains_backend(&self, backend: &str) -> bool {
        self.series.contains_key(backend)
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Total number of samples across all backends
    pub fn sample_count(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }

    /// Render the CSV-like text report
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for (backend, samples) in &self.series {
            let _ = writeln!(out, "=== {} with {} ===", self.algorithm, backend);
            let _ = writeln!(out, "size,time (ms)");

            for sample in samples {
                let _ = writeln!(out, "{},{:.6}", sample.size, sample.elapsed_ms);
            }
        }

        out
    }

    /// Write the text report to a sink
    pub fn present_text<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.render_text().as_bytes())?;
        writer.flush()
    }

    /// Plottable series for one backend.
    ///
    /// Sentinel samples are dropped before the Y value is derived, so rate
    /// mode never divides by zero. Returns `None` when the backend is absent
    /// or has no valid samples at all.
    pub fn series(&self, mode: PlotMode, backend: &str) -> Option<Series> {
        let samples = self.series.get(backend)?;

        let points: Vec<(f64, f64)> = samples
            .iter()
            .filter(|s| s.is_valid())
            .map(|s| (s.size as f64, mode.value(s)))
            .collect();

        if points.is_empty() {
            return None;
        }

        Some(Series {
            label: backend.to_string(),
            points,
        })
    }

    /// Build the chart for the given backends, in the given order
    pub fn chart(&self, mode: PlotMode, backends: &[&str]) -> Chart {
        let mut chart = Chart::new(self.algorithm.clone(), mode);
        chart.series = backends
            .iter()
            .filter_map(|backend| self.series(mode, backend))
            .collect();
        chart
    }

    /// Build the chart and hand it to a renderer
    pub fn present_plot(
        &self,
        mode: PlotMode,
        backends: &[&str],
        renderer: &dyn ChartRenderer,
        path: &Path,
    ) -> AppResult<()> {
        renderer.render(&self.chart(mode, backends), path)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn sample_report() -> Report {
        let mut report = Report::new("sort");
        report.add_sample("compute", 2, 1.5);
        report.add_sample("compute", 4, 0.0);
        report.add_sample("compute", 8, 4.0);
        report.add_sample("stl", 2, 0.0);
        report.add_sample("stl", 4, 0.0);
        report
    }

    #[test]
    fn test_add_sample_preserves_call_order() {
        let mut report = Report::new("sort");
        report.add_sample("tbb", 8, 3.0);
        report.add_sample("compute", 2, 1.0);
        report.add_sample("tbb", 2, 1.0);
        report.add_sample("tbb", 4, 2.0);

        let sizes: Vec<u64> = report.samples_for("tbb").iter().map(|s| s.size).collect();
        assert_eq!(sizes, vec![8, 2, 4]);

        let backends: Vec<&str> = report.backends().collect();
        assert_eq!(backends, vec!["tbb", "compute"]);
        assert_eq!(report.sample_count(), 4);
    }

    #[test]
    fn test_duplicate_sizes_are_kept() {
        let mut report = Report::new("sort");
        report.add_sample("compute", 4, 1.0);
        report.add_sample("compute", 4, 2.0);
        assert_eq!(report.samples_for("compute").len(), 2);
    }

    #[test]
    fn test_samples_for_unknown_backend_is_empty() {
        let report = Report::new("sort");
        assert!(report.samples_for("thrust").is_empty());
        assert!(!report.contains_backend("thrust"));
        assert!(report.is_empty());
    }

    #[test]
    fn test_render_text() {
        let text = sample_report().render_text();
        let expected = "\
=== sort with compute ===
size,time (ms)
2,1.500000
4,0.000000
8,4.000000
=== sort with stl ===
size,time (ms)
2,0.000000
4,0.000000
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_present_text_writes_rendered_report() {
        let report = sample_report();
        let mut out = Vec::new();
        report.present_text(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), report.render_text());
    }

    #[test]
    fn test_time_series_drops_sentinel_samples() {
        let series = sample_report().series(PlotMode::Time, "compute").unwrap();
        assert_eq!(series.points, vec![(2.0, 1.5), (8.0, 4.0)]);
    }

    #[test]
    fn test_rate_series_derives_throughput() {
        let series = sample_report().series(PlotMode::Rate, "compute").unwrap();
        assert_eq!(series.points.len(), 2);
        assert!((series.points[0].1 - 2.0 / 1.5e-3).abs() < 1e-6);
        assert!((series.points[1].1 - 2000.0).abs() < 1e-6);
        assert!(series.points.iter().all(|(_, y)| y.is_finite()));
    }

    #[test]
    fn test_all_sentinel_backend_is_omitted() {
        let report = sample_report();
        for mode in [PlotMode::Time, PlotMode::Rate] {
            assert!(report.series(mode, "stl").is_none());
            let chart = report.chart(mode, &["compute", "stl"]);
            let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
            assert_eq!(labels, vec!["compute"]);
        }
    }

    #[test]
    fn test_chart_skips_unknown_backends_and_keeps_order() {
        let mut report = sample_report();
        report.add_sample("tbb", 2, 0.5);

        let chart = report.chart(PlotMode::Time, &["tbb", "thrust", "compute"]);
        assert_eq!(chart.title, "sort");
        assert_eq!(chart.y_label, "Time (ms)");
        let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["tbb", "compute"]);
    }

    struct CapturingRenderer {
        charts: RefCell<Vec<Chart>>,
    }

    impl ChartRenderer for CapturingRenderer {
        fn render(&self, chart: &Chart, _path: &Path) -> AppResult<()> {
            self.charts.borrow_mut().push(chart.clone());
            Ok(())
        }
    }

    #[test]
    fn test_present_plot_hands_chart_to_renderer() {
        let renderer = CapturingRenderer {
            charts: RefCell::new(Vec::new()),
        };
        sample_report()
            .present_plot(PlotMode::Rate, &["compute", "stl"], &renderer, Path::new("x.svg"))
            .unwrap();

        let charts = renderer.charts.borrow();
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].y_label, "Rate (values/s)");
        assert_eq!(charts[0].series.len(), 1);
    }

    #[test]
    fn test_serializes_series_in_order() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(json["algorithm"], "sort");
        let keys: Vec<&String> = json["series"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["compute", "stl"]);
        assert_eq!(json["series"]["compute"][0]["size"], 2);
    }
}
