// src/render/animate.rs
//
// Growing-lines animation. One frame per distinct years_active value, every
// series cut at that value, the last frame repeated `fps * hold_secs` times.
// The y axis is fixed across frames so lines grow into a stable chart.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame as GifFrame};
use plotters::prelude::*;

use super::chart::{check_size, create_parent};
use super::{Axes, Frame, RenderError, Series, draw_frame, group_series, palette};
use crate::config::consts::GIF_SPEED;
use crate::config::options::ChartOptions;
use crate::pipeline::CumulativeEntry;

const FRAME_DIR_PREFIX: &str = "goal500-frames";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FramePlan {
    /// Ascending distinct years_active values, one drawn frame each.
    pub steps: Vec<u32>,
    /// Extra copies of the last frame.
    pub hold: usize,
}

impl FramePlan {
    pub fn total_frames(&self) -> usize {
        if self.steps.is_empty() { 0 } else { self.steps.len() + self.hold }
    }
}

pub fn plan_frames(entries: &[CumulativeEntry], fps: u32, hold_secs: u32) -> FramePlan {
    let mut steps: Vec<u32> = entries.iter().map(|e| e.years_active).collect();
    steps.sort_unstable();
    steps.dedup();
    FramePlan { steps, hold: fps as usize * hold_secs as usize }
}

/// Every series cut to points with years_active <= `step`. Series with nothing left stay
/// in place (empty) so colours do not shift between frames.
pub fn truncate(series: &[Series], step: u32) -> Vec<Series> {
    series
        .iter()
        .map(|s| Series {
            label: s.label.clone(),
            points: s.points.iter().copied().filter(|&(x, _)| x <= step).collect(),
        })
        .collect()
}

/// Render the animation to `output` as a looping GIF.
///
/// Frames are written as PNGs into a temporary directory that is removed when this
/// returns, whether or not encoding succeeded. Empty input returns `Ok(None)`.
pub fn create_animation(
    entries: &[CumulativeEntry],
    output: &Path,
    fps: u32,
    hold_secs: u32,
    chart: &ChartOptions,
) -> Result<Option<PathBuf>, RenderError> {
    create_animation_in(&std::env::temp_dir(), entries, output, fps, hold_secs, chart)
}

/// [`create_animation`] with the frame directory created under `scratch`.
pub fn create_animation_in(
    scratch: &Path,
    entries: &[CumulativeEntry],
    output: &Path,
    fps: u32,
    hold_secs: u32,
    chart: &ChartOptions,
) -> Result<Option<PathBuf>, RenderError> {
    if fps == 0 {
        return Err(RenderError::InvalidOption(s!("fps must be at least 1")));
    }
    if entries.is_empty() {
        logf!("No data to visualize.");
        return Ok(None);
    }
    check_size(chart)?;

    let plan = plan_frames(entries, fps, hold_secs);
    let series = group_series(entries);
    let colors = palette(series.len());
    let axes = Axes::fit(entries);

    let workdir = tempfile::Builder::new().prefix(FRAME_DIR_PREFIX).tempdir_in(scratch)?;
    let mut frames = Vec::with_capacity(plan.steps.len());

    for (i, &step) in plan.steps.iter().enumerate() {
        let path = workdir.path().join(format!("frame_{i:03}.png"));
        let visible = truncate(&series, step);
        {
            let root = BitMapBackend::new(&path, (chart.width, chart.height)).into_drawing_area();
            draw_frame(
                &root,
                &Frame {
                    series: &visible,
                    colors: &colors,
                    axes,
                    chart,
                    subtitle_suffix: Some(format!("(Years active: {step})")),
                },
            )?;
        }
        frames.push(path);
    }
    logd!("rendered {} frames in {}", frames.len(), workdir.path().display());

    create_parent(output)?;
    encode_gif(&frames, plan.hold, fps, output)?;

    workdir.close()?;
    logf!("Animation saved to {}", output.display());
    Ok(Some(output.to_path_buf()))
}

fn encode_gif(frames: &[PathBuf], hold: usize, fps: u32, output: &Path) -> Result<(), RenderError> {
    let delay = Delay::from_numer_denom_ms(1000, fps);
    let mut encoder = GifEncoder::new_with_speed(BufWriter::new(File::create(output)?), GIF_SPEED);
    encoder.set_repeat(Repeat::Infinite)?;

    let mut last = None;
    for path in frames {
        let frame = GifFrame::from_parts(image::open(path)?.into_rgba8(), 0, 0, delay);
        encoder.encode_frame(frame.clone())?;
        last = Some(frame);
    }
    if let Some(frame) = last {
        for _ in 0..hold {
            encoder.encode_frame(frame.clone())?;
        }
    }
    Ok(())
}
