//! Indicator bar chart.
//!
//! The chart is drawn with plotters into a temporary PNG inside the scratch
//! directory, handed to the caller for embedding, and removed before
//! [`with_chart`] returns, whether or not embedding succeeded. The image
//! carries no text; titles and axis labels are set by the PDF layout using
//! the geometry constants below.

use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use mindcare_core::models::scores::{SubscaleScores, SUBSCALE_MAX};

use crate::error::ExportError;

pub const CHART_WIDTH_PX: u32 = 800;
pub const CHART_HEIGHT_PX: u32 = 600;
/// Blank border around the plot area, in pixels, on every side.
pub const CHART_MARGIN_PX: u32 = 40;

/// Y-axis values that get a grid line and a tick label.
pub const Y_TICKS: [u8; 4] = [0, 5, 10, 15];

const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);
const GRID_COLOR: RGBColor = RGBColor(220, 220, 220);
const BAR_WIDTH: f64 = 0.6;

/// Horizontal centre of bar `index` as a fraction of the image width.
pub fn bar_center_fraction(index: usize) -> f32 {
    let plot = (CHART_WIDTH_PX - 2 * CHART_MARGIN_PX) as f32;
    let slot = plot / 3.0;
    (CHART_MARGIN_PX as f32 + slot * (index as f32 + 0.5)) / CHART_WIDTH_PX as f32
}

/// Vertical position of `value` measured from the image top, as a fraction
/// of the image height.
pub fn value_fraction_from_top(value: u8) -> f32 {
    let plot = (CHART_HEIGHT_PX - 2 * CHART_MARGIN_PX) as f32;
    let from_bottom = plot * f32::from(value) / f32::from(SUBSCALE_MAX);
    (CHART_HEIGHT_PX as f32 - CHART_MARGIN_PX as f32 - from_bottom) / CHART_HEIGHT_PX as f32
}

/// Render the chart to a scoped temporary file and pass its PNG bytes to
/// `embed`. The file is gone by the time this returns.
pub fn with_chart<T>(
    scores: &SubscaleScores,
    scratch_dir: &Path,
    embed: impl FnOnce(&[u8]) -> Result<T, ExportError>,
) -> Result<T, ExportError> {
    let artifact = tempfile::Builder::new()
        .prefix("mindcare-chart-")
        .suffix(".png")
        .tempfile_in(scratch_dir)?;
    debug!(path = %artifact.path().display(), "chart artifact created");

    draw_chart(artifact.path(), scores)?;
    let png = std::fs::read(artifact.path())?;

    let embedded = embed(&png);
    artifact.close()?;
    debug!("chart artifact removed");
    embedded
}

fn draw_chart(path: &Path, scores: &SubscaleScores) -> Result<(), ExportError> {
    let root = BitMapBackend::new(path, (CHART_WIDTH_PX, CHART_HEIGHT_PX)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let y_max = f64::from(SUBSCALE_MAX);
    let mut chart = ChartBuilder::on(&root)
        .margin(CHART_MARGIN_PX)
        .build_cartesian_2d(0f64..3f64, 0f64..y_max)
        .map_err(chart_error)?;

    chart
        .draw_series(Y_TICKS.iter().skip(1).map(|tick| {
            let y = f64::from(*tick);
            PathElement::new(vec![(0.0, y), (3.0, y)], GRID_COLOR.stroke_width(1))
        }))
        .map_err(chart_error)?;

    chart
        .draw_series(scores.iter().enumerate().map(|(index, (_, value))| {
            let left = index as f64 + (1.0 - BAR_WIDTH) / 2.0;
            Rectangle::new(
                [(left, 0.0), (left + BAR_WIDTH, f64::from(value))],
                BAR_COLOR.filled(),
            )
        }))
        .map_err(chart_error)?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(0.0, y_max), (0.0, 0.0), (3.0, 0.0)],
            BLACK.stroke_width(2),
        )))
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    Ok(())
}

fn chart_error(e: impl std::fmt::Display) -> ExportError {
    ExportError::Chart(e.to_string())
}
