// src/render/chart.rs
use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use super::{Axes, Frame, RenderError, draw_frame, group_series, palette};
use crate::config::options::ChartOptions;
use crate::pipeline::CumulativeEntry;

/// Draw the full static chart.
///
/// With `output` the chart is written as PNG and its path returned. Without it the
/// interactive viewer is opened. Empty input draws nothing and returns `Ok(None)`.
pub fn plot_cumulative(
    entries: &[CumulativeEntry],
    output: Option<&Path>,
    chart: &ChartOptions,
) -> Result<Option<PathBuf>, RenderError> {
    if entries.is_empty() {
        logf!("No data to visualize.");
        return Ok(None);
    }
    check_size(chart)?;

    let Some(path) = output else {
        show(entries, chart)?;
        return Ok(None);
    };

    create_parent(path)?;
    {
        let root = BitMapBackend::new(path, (chart.width, chart.height)).into_drawing_area();
        draw_static(&root, entries, chart)?;
    }
    logf!("Chart saved to {}", path.display());
    Ok(Some(path.to_path_buf()))
}

/// Rasterize the chart into a packed RGB buffer of `width * height * 3` bytes.
pub fn render_rgb(entries: &[CumulativeEntry], chart: &ChartOptions) -> Result<Vec<u8>, RenderError> {
    check_size(chart)?;
    let mut buf = vec![0u8; chart.width as usize * chart.height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (chart.width, chart.height))
            .into_drawing_area();
        draw_static(&root, entries, chart)?;
    }
    Ok(buf)
}

fn draw_static<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    entries: &[CumulativeEntry],
    chart: &ChartOptions,
) -> Result<(), RenderError> {
    let series = group_series(entries);
    let colors = palette(series.len());
    draw_frame(
        root,
        &Frame {
            series: &series,
            colors: &colors,
            axes: Axes::fit(entries),
            chart,
            subtitle_suffix: None,
        },
    )
}

pub(crate) fn check_size(chart: &ChartOptions) -> Result<(), RenderError> {
    if chart.width == 0 || chart.height == 0 {
        return Err(RenderError::InvalidOption(format!(
            "chart size must be positive, got {}x{}",
            chart.width, chart.height
        )));
    }
    Ok(())
}

pub(crate) fn create_parent(path: &Path) -> Result<(), RenderError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(feature = "gui")]
fn show(entries: &[CumulativeEntry], chart: &ChartOptions) -> Result<(), RenderError> {
    crate::gui::show(entries, chart)
}

#[cfg(not(feature = "gui"))]
fn show(_entries: &[CumulativeEntry], _chart: &ChartOptions) -> Result<(), RenderError> {
    Err(RenderError::DisplayUnavailable)
}
