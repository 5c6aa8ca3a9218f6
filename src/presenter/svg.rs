//! SVG chart rendering with plotters

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use super::ChartRenderer;
use crate::error::{AppError, AppResult};
use crate::models::Chart;

const FONT: &str = "sans-serif";
const CAPTION_FONT_SIZE: u32 = 28;
const LABEL_FONT_SIZE: u32 = 16;
const MARKER_SIZE: u32 = 4;
const LINE_WIDTH: u32 = 2;

/// Multiplicative headroom around the data on each log axis
const AXIS_PADDING: f64 = 1.5;

/// Draws log-log line charts into SVG files
#[derive(Debug, Clone, Copy)]
pub struct SvgChartRenderer {
    width: u32,
    height: u32,
}

impl SvgChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn draw(&self, chart: &Chart, path: &Path) -> Result<()> {
        let root = SVGBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let ((x_min, x_max), (y_min, y_max)) = chart
            .bounds()
            .map(|(x, y)| (padded(x), padded(y)))
            .unwrap_or(((1.0, 10.0), (1.0, 10.0)));

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, (FONT, CAPTION_FONT_SIZE))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d((x_min..x_max).log_scale(), (y_min..y_max).log_scale())?;

        ctx.configure_mesh()
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .label_style((FONT, LABEL_FONT_SIZE))
            .axis_desc_style((FONT, LABEL_FONT_SIZE))
            .draw()?;

        for (idx, series) in chart.series.iter().enumerate() {
            let color = Palette99::pick(idx).to_rgba();

            ctx.draw_series(LineSeries::new(
                series.points.iter().copied(),
                color.stroke_width(LINE_WIDTH),
            ))?
            .label(series.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
            });

            ctx.draw_series(
                series
                    .points
                    .iter()
                    .map(|&point| Circle::new(point, MARKER_SIZE, color.filled())),
            )?;
        }

        if !chart.is_empty() {
            ctx.configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .label_font((FONT, LABEL_FONT_SIZE))
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }

        root.present()?;
        Ok(())
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn render(&self, chart: &Chart, path: &Path) -> AppResult<()> {
        self.draw(chart, path)
            .map_err(|e| AppError::Plot(format!("{}: {:#}", path.display(), e)))
    }
}

/// Widen a strictly positive range so points do not sit on the frame
fn padded((min, max): (f64, f64)) -> (f64, f64) {
    (min / AXIS_PADDING, max * AXIS_PADDING)
}
