// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use goal500::{config::{consts::DEFAULT_STATS_FILE, options::ChartOptions}, gui, log, pipeline, store};

fn main() {
    let _ = log::init(0, None);

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATS_FILE));

    let rows = match store::read_table(&path) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let entries = pipeline::prepare(&rows);
    if entries.is_empty() {
        eprintln!("No data to visualize.");
        return;
    }

    if let Err(e) = gui::show(&entries, &ChartOptions::default()) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(2);
    }
}
