//! Chart data derived from a report
//!
//! Pure data handed to a [`ChartRenderer`]; nothing here knows how to draw.

use std::path::Path;

use serde::Serialize;

use super::report::Sample;
use crate::error::AppResult;

/// Something that can draw a chart to a file
pub trait ChartRenderer {
    fn render(&self, chart: &Chart, path: &Path) -> AppResult<()>;
}

/// X axis title shared by both plot modes
pub const SIZE_AXIS_LABEL: &str = "Size";

/// Which quantity goes on the Y axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotMode {
    /// Elapsed milliseconds
    Time,
    /// Values processed per second
    Rate,
}

impl PlotMode {
    /// Y axis title
    pub fn axis_label(&self) -> &'static str {
        match self {
            Self::Time => "Time (ms)",
            Self::Rate => "Rate (values/s)",
        }
    }

    /// Short name used in output file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Rate => "rate",
        }
    }

    /// Y value plotted for a sample. Only called on valid samples.
    pub fn value(&self, sample: &Sample) -> f64 {
        match self {
            Self::Time => sample.elapsed_ms,
            Self::Rate => sample.size as f64 / (sample.elapsed_ms * 1e-3),
        }
    }
}

/// One labeled line on the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// A log-log chart with a shared set of axes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl Chart {
    /// Create an empty chart for the given algorithm and mode
    pub fn new(title: impl Into<String>, mode: PlotMode) -> Self {
        Self {
            title: title.into(),
            x_label: SIZE_AXIS_LABEL.to_string(),
            y_label: mode.axis_label().to_string(),
            series: Vec::new(),
        }
    }

    /// Rename every series' legend label
    pub fn relabel<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        for series in &mut self.series {
            series.label = f(&series.label);
        }
        self
    }

    /// Smallest and largest x and y over all series, if any points exist
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut points = self.series.iter().flat_map(|s| s.points.iter().copied());
        let (x0, y0) = points.next()?;

        Some(points.fold(((x0, x0), (y0, y0)), |((xmin, xmax), (ymin, ymax)), (x, y)| {
            ((xmin.min(x), xmax.max(x)), (ymin.min(y), ymax.max(y)))
        }))
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
