// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub out_path: PathBuf,
    pub workers: usize,
    pub request_pause: Duration,
    pub timeout: Duration,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_STATS_FILE),
            workers: WORKERS,
            request_pause: Duration::from_millis(REQUEST_PAUSE_MS),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Look of a chart; shared by the static chart, animation frames and the viewer.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub title: String,
    pub subtitle: String,
    pub source_note: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: s!(DEFAULT_TITLE),
            subtitle: s!(DEFAULT_SUBTITLE),
            source_note: s!(SOURCE_NOTE),
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotOptions {
    pub input: PathBuf,
    /// `None` opens the interactive viewer instead of writing a file.
    pub output: Option<PathBuf>,
    pub chart: ChartOptions,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_STATS_FILE),
            output: Some(PathBuf::from(DEFAULT_CHART_FILE)),
            chart: ChartOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimateOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub fps: u32,
    /// Seconds the final frame is held before the loop restarts.
    pub hold_secs: u32,
    pub chart: ChartOptions,
}

impl Default for AnimateOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_STATS_FILE),
            output: PathBuf::from(DEFAULT_ANIMATION_FILE),
            fps: DEFAULT_FPS,
            hold_secs: DEFAULT_HOLD_SECS,
            chart: ChartOptions::default(),
        }
    }
}
