// src/gui/mod.rs
pub mod viewer;

pub use viewer::{LegendRow, legend, show};
