// src/render/mod.rs
//! Plotting infrastructure for cumulative-goals charts.
//!
//! Static charts and animation frames share one drawing routine, [`draw_frame`],
//! so both follow the same conventions: x = years active with integer ticks,
//! y = cumulative goals, grid on, one viridis-coloured line per player with its
//! label at the last point.

use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

use crate::config::consts::Y_HEADROOM;
use crate::config::options::ChartOptions;
use crate::pipeline::CumulativeEntry;

pub mod animate;
pub mod chart;

pub use animate::{FramePlan, create_animation, create_animation_in, plan_frames};
pub use chart::{plot_cumulative, render_rgb};

/// Errors that can occur while producing a chart or animation
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw chart: {0}")]
    Drawing(String),

    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Interactive display failed: {0}")]
    Display(String),

    #[error("Interactive display unavailable (built without the `gui` feature)")]
    DisplayUnavailable,

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

type Result<T> = core::result::Result<T, RenderError>;

fn drawing<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Drawing(e.to_string())
}

/// One player's line.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(u32, f64)>,
}

/// Split prepared entries into per-player series, keeping their order.
pub fn group_series(entries: &[CumulativeEntry]) -> Vec<Series> {
    entries
        .chunk_by(|a, b| a.entity_name == b.entity_name)
        .map(|run| Series {
            label: run[0].label.clone(),
            points: run.iter().map(|e| (e.years_active, e.cumulative_total)).collect(),
        })
        .collect()
}

/// Axis bounds for a dataset: x up to the longest career + 1, y with 10% headroom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axes {
    pub x_max: u32,
    pub y_max: f64,
}

impl Axes {
    pub fn fit(entries: &[CumulativeEntry]) -> Self {
        let x_max = entries.iter().map(|e| e.years_active).max().unwrap_or(0).saturating_add(1);
        let peak = entries.iter().map(|e| e.cumulative_total).fold(0.0_f64, f64::max);
        let y_max = if peak > 0.0 { peak * Y_HEADROOM } else { 1.0 };
        Self { x_max, y_max }
    }
}

const MAX_X_LABELS: usize = 30;
const MAX_Y_LABELS: usize = 12;

/// Tick count for the x axis. Integer ranges only ever get whole-number ticks.
pub fn x_label_count(x_max: i32) -> usize {
    (x_max.max(0) as usize + 1).min(MAX_X_LABELS)
}

/// Tick count for the y axis. Never more than `floor(y_max) + 1`, so the f64 axis
/// cannot pick a step below 1 and every tick lands on a whole number.
pub fn y_label_count(y_max: f64) -> usize {
    (y_max.floor().max(0.0) as usize + 1).min(MAX_Y_LABELS)
}

fn to_axis(x: u32) -> i32 {
    i32::try_from(x).unwrap_or(i32::MAX)
}

// Viridis anchor colours at 0, 1/8, ..., 1.
const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 44, 122),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];

/// Viridis at `t` in [0, 1], linearly interpolated between anchors.
pub fn viridis(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0) * (VIRIDIS.len() - 1) as f64;
    let i = (t.floor() as usize).min(VIRIDIS.len() - 2);
    let f = t - i as f64;
    let (a, b) = (VIRIDIS[i], VIRIDIS[i + 1]);
    let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * f).round() as u8;
    RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// `n` colours sampled evenly on [0, 0.9] (the top of viridis is too pale on white).
pub fn palette(n: usize) -> Vec<RGBColor> {
    match n {
        0 => Vec::new(),
        1 => vec![viridis(0.0)],
        _ => (0..n).map(|i| viridis(0.9 * i as f64 / (n - 1) as f64)).collect(),
    }
}

/// Everything needed to draw one image.
pub struct Frame<'a> {
    pub series: &'a [Series],
    pub colors: &'a [RGBColor],
    pub axes: Axes,
    pub chart: &'a ChartOptions,
    /// Appended to the subtitle, e.g. `(Years active: 3)` on animation frames.
    pub subtitle_suffix: Option<String>,
}

/// Draw a full chart onto `root`. Series points beyond the axes are not clipped here;
/// callers truncate for animation.
pub fn draw_frame<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, frame: &Frame<'_>) -> Result<()> {
    root.fill(&WHITE).map_err(drawing)?;

    let (w, h) = root.dim_in_pixel();
    let note_color = BLACK.mix(0.7);
    let note_style = TextStyle::from(("sans-serif", 16).into_font()).color(&note_color);
    root.draw_text(
        &frame.chart.source_note,
        &note_style,
        ((w as i32) / 2 - 60, h as i32 - 24),
    )
    .map_err(drawing)?;

    let body = root.titled(&frame.chart.title, ("sans-serif", 36)).map_err(drawing)?;
    let subtitle = match &frame.subtitle_suffix {
        Some(suffix) => format!("{} {}", frame.chart.subtitle, suffix),
        None => frame.chart.subtitle.clone(),
    };

    let x_max = to_axis(frame.axes.x_max);
    let mut chart = ChartBuilder::on(&body)
        .caption(subtitle, ("sans-serif", 24))
        .margin(20)
        .margin_bottom(40)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0..x_max, 0.0..frame.axes.y_max)
        .map_err(drawing)?;

    chart
        .configure_mesh()
        .x_desc("Years active")
        .y_desc("Goals")
        .x_labels(x_label_count(x_max))
        .y_labels(y_label_count(frame.axes.y_max))
        .x_label_formatter(&|x| format!("{x}"))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.15))
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(drawing)?;

    for (series, color) in frame.series.iter().zip(frame.colors.iter().cycle()) {
        if series.points.is_empty() {
            continue;
        }
        let pts: Vec<(i32, f64)> = series.points.iter().map(|&(x, y)| (to_axis(x), y)).collect();

        chart
            .draw_series(LineSeries::new(pts.iter().copied(), color.stroke_width(2)))
            .map_err(drawing)?;
        chart
            .draw_series(pts.iter().map(|&p| Circle::new(p, 4, color.filled())))
            .map_err(drawing)?;

        if let Some(&last) = pts.last() {
            chart
                .draw_series(std::iter::once(Text::new(
                    series.label.clone(),
                    last,
                    ("sans-serif", 15).into_font(),
                )))
                .map_err(drawing)?;
        }
    }

    root.present().map_err(drawing)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{Category, RawRecord, prepare};

    fn entries() -> Vec<CumulativeEntry> {
        prepare(&[
            RawRecord::new("A", "2018", "3", Category::Club),
            RawRecord::new("A", "2019", "4", Category::Club),
            RawRecord::new("B", "2021", "10", Category::Club),
        ])
    }

    #[test]
    fn groups_by_player() {
        let s = group_series(&entries());
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].label, "A (7)");
        assert_eq!(s[0].points, vec![(0, 3.0), (1, 7.0)]);
        assert_eq!(s[1].points, vec![(0, 10.0)]);
    }

    #[test]
    fn axes_have_headroom() {
        let a = Axes::fit(&entries());
        assert_eq!(a.x_max, 2);
        assert!((a.y_max - 11.0).abs() < 1e-9);
        assert_eq!(Axes::fit(&[]).y_max, 1.0);
    }

    #[test]
    fn y_ticks_are_whole_numbers() {
        use plotters::coord::ranged1d::Ranged;
        use plotters::coord::types::RangedCoordf64;

        for y_max in [0.55, 1.0, 1.1, 2.2, 3.3, 9.9, 11.0, 27.5, 550.0, 1234.5, 98765.4] {
            let ticks = RangedCoordf64::from(0.0..y_max).key_points(y_label_count(y_max));
            assert!(!ticks.is_empty(), "{y_max}");
            assert!(ticks.iter().all(|t| t.fract() == 0.0), "{y_max}: {ticks:?}");
            let labels: Vec<String> = ticks.iter().map(|t| format!("{t:.0}")).collect();
            let mut unique = labels.clone();
            unique.dedup();
            assert_eq!(labels, unique, "{y_max}");
        }
    }

    #[test]
    fn x_ticks_are_bounded() {
        use plotters::coord::ranged1d::Ranged;
        use plotters::coord::types::RangedCoordi32;

        assert_eq!(x_label_count(3), 4);
        assert_eq!(x_label_count(20_000_001), 30);
        assert_eq!(x_label_count(i32::MAX), 30);
        let ticks = RangedCoordi32::from(0..20_000_001).key_points(x_label_count(20_000_001));
        assert!(ticks.len() <= 30);
    }

    #[test]
    fn wide_careers_stay_on_axis() {
        let wide = prepare(&[
            RawRecord::new("A", "-2000000000", "1", Category::Club),
            RawRecord::new("A", "2000000000", "2", Category::Club),
        ]);
        let axes = Axes::fit(&wide);
        assert_eq!(axes.x_max, 4_000_000_001);
        assert_eq!(to_axis(axes.x_max), i32::MAX);
    }

    #[test]
    fn palette_spans_viridis() {
        let p = palette(3);
        assert_eq!(p.len(), 3);
        assert_eq!(p[0], RGBColor(68, 1, 84));
        assert_ne!(p[1], p[2]);
        assert!(palette(0).is_empty());
        assert_eq!(viridis(1.0), RGBColor(253, 231, 37));
    }
}
