// src/gui/viewer.rs
//
// Interactive display for `plot` without an output file: the chart is rasterized
// once through the same drawing code as the PNG path, then shown as a texture
// next to a legend table.

use eframe::egui::{self, Color32, ColorImage, RichText, TextureHandle, TextureOptions};
use eframe::egui::load::SizedTexture;
use egui_extras::{Column, TableBuilder};

use crate::config::options::ChartOptions;
use crate::pipeline::{CumulativeEntry, format_total};
use crate::render::{RenderError, group_series, palette, render_rgb};

/// One legend line per player.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    pub name: String,
    pub seasons: usize,
    pub total: String,
    pub color: [u8; 3],
}

pub fn legend(entries: &[CumulativeEntry]) -> Vec<LegendRow> {
    let series = group_series(entries);
    let colors = palette(series.len());
    entries
        .chunk_by(|a, b| a.entity_name == b.entity_name)
        .zip(colors)
        .map(|(run, c)| LegendRow {
            name: run[0].entity_name.clone(),
            seasons: run.len(),
            total: run.last().map(|e| format_total(e.cumulative_total)).unwrap_or_default(),
            color: [c.0, c.1, c.2],
        })
        .collect()
}

/// Open a window with the chart and block until it is closed.
pub fn show(entries: &[CumulativeEntry], chart: &ChartOptions) -> Result<(), RenderError> {
    let rgb = render_rgb(entries, chart)?;
    let image = ColorImage::from_rgb([chart.width as usize, chart.height as usize], &rgb);
    let rows = legend(entries);
    let title = chart.title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([chart.width as f32 + 280.0, chart.height as f32 + 40.0]),
        ..Default::default()
    };

    logd!("opening viewer ({} players)", rows.len());
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(Viewer { image: Some(image), texture: None, rows }))),
    )
    .map_err(|e| RenderError::Display(e.to_string()))
}

struct Viewer {
    // moved into `texture` on the first frame
    image: Option<ColorImage>,
    texture: Option<TextureHandle>,
    rows: Vec<LegendRow>,
}

impl eframe::App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(image) = self.image.take() {
            self.texture = Some(ctx.load_texture("chart", image, TextureOptions::LINEAR));
        }

        egui::SidePanel::right("legend").resizable(true).show(ctx, |ui| {
            ui.heading("Players");
            ui.separator();
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::exact(18.0))
                .column(Column::auto().at_least(120.0))
                .column(Column::auto())
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    header.col(|_| {});
                    header.col(|ui| { ui.strong("Player"); });
                    header.col(|ui| { ui.strong("Seasons"); });
                    header.col(|ui| { ui.strong("Goals"); });
                })
                .body(|mut body| {
                    for r in &self.rows {
                        body.row(18.0, |mut row| {
                            let [red, green, blue] = r.color;
                            row.col(|ui| {
                                ui.label(RichText::new("■").color(Color32::from_rgb(red, green, blue)));
                            });
                            row.col(|ui| { ui.label(&r.name); });
                            row.col(|ui| { ui.label(r.seasons.to_string()); });
                            row.col(|ui| { ui.label(&r.total); });
                        });
                    }
                });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(tex) = &self.texture {
                ui.centered_and_justified(|ui| {
                    ui.add(egui::Image::from_texture(SizedTexture::from_handle(tex)).shrink_to_fit());
                });
            }
        });
    }
}
