//! Report presentation
//!
//! Turns a finished [`Report`] into a text report, JSON, or a chart file.
//! Drawing goes through the [`ChartRenderer`] capability, which may be absent;
//! plot requests then fall back to the text report.

#[cfg(feature = "plot")]
pub mod svg;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::PlotConfig;
use crate::constants::{display_label, PLOT_EXTENSION, PRIMARY_BACKEND};
use crate::error::AppResult;
use crate::models::{Chart, PlotMode, Report};

pub use crate::models::ChartRenderer;
#[cfg(feature = "plot")]
pub use svg::SvgChartRenderer;

/// The renderer compiled into this build, if any
pub fn default_renderer(plot: PlotConfig) -> Option<Box<dyn ChartRenderer>> {
    #[cfg(feature = "plot")]
    {
        Some(Box::new(SvgChartRenderer::new(plot.width, plot.height)))
    }

    #[cfg(not(feature = "plot"))]
    {
        let _ = plot;
        None
    }
}

/// How a report is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// CSV-like blocks per backend
    #[default]
    Text,
    /// The whole report as JSON
    Json,
    /// A log-log chart written to the output directory
    Plot(PlotMode),
}

/// Renames series to their display labels before delegating
struct DisplayLabels<'a> {
    inner: &'a dyn ChartRenderer,
}

impl ChartRenderer for DisplayLabels<'_> {
    fn render(&self, chart: &Chart, path: &Path) -> AppResult<()> {
        let chart = chart.clone().relabel(|label| display_label(label).to_string());
        self.inner.render(&chart, path)
    }
}

/// Presents reports in the requested mode
pub struct Presenter {
    renderer: Option<Box<dyn ChartRenderer>>,
    output_dir: PathBuf,
    display_labels: bool,
}

impl Presenter {
    pub fn new(renderer: Option<Box<dyn ChartRenderer>>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            output_dir: output_dir.into(),
            display_labels: false,
        }
    }

    /// Use human-readable legend labels ("C++ STL") instead of backend ids
    pub fn with_display_labels(mut self) -> Self {
        self.display_labels = true;
        self
    }

    pub fn can_plot(&self) -> bool {
        self.renderer.is_some()
    }

    /// `<output_dir>/<algorithm>_<mode>_plot.svg`
    pub fn plot_path(&self, algorithm: &str, mode: PlotMode) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}_plot.{}", algorithm, mode.as_str(), PLOT_EXTENSION))
    }

    /// Present a report.
    ///
    /// Text and JSON go to `out`. Plots draw the primary series followed by
    /// each competitor on one chart and return the written file's path.
    pub fn present<W: Write>(
        &self,
        report: &Report,
        mode: OutputMode,
        competitors: &[&str],
        out: &mut W,
    ) -> AppResult<Option<PathBuf>> {
        match mode {
            OutputMode::Text => {
                report.present_text(out)?;
                Ok(None)
            }
            OutputMode::Json => {
                serde_json::to_writer_pretty(&mut *out, report)?;
                writeln!(out)?;
                Ok(None)
            }
            OutputMode::Plot(plot_mode) => match &self.renderer {
                Some(renderer) => self
                    .plot(report, plot_mode, competitors, renderer.as_ref())
                    .map(Some),
                None => {
                    warn!("Plotting not available in this build, printing text report");
                    report.present_text(out)?;
                    Ok(None)
                }
            },
        }
    }

    fn plot(
        &self,
        report: &Report,
        mode: PlotMode,
        competitors: &[&str],
        renderer: &dyn ChartRenderer,
    ) -> AppResult<PathBuf> {
        let backends: Vec<&str> = std::iter::once(PRIMARY_BACKEND)
            .chain(competitors.iter().copied())
            .collect();

        fs::create_dir_all(&self.output_dir)?;
        let path = self.plot_path(report.algorithm(), mode);

        if self.display_labels {
            let labeled = DisplayLabels { inner: renderer };
            report.present_plot(mode, &backends, &labeled, &path)?;
        } else {
            report.present_plot(mode, &backends, renderer, &path)?;
        }

        info!(algorithm = report.algorithm(), path = %path.display(), "Plot written");
        Ok(path)
    }
}
