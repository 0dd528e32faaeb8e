// src/lib.rs

#[macro_use]
pub mod macros;
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod pipeline;
pub mod progress;
pub mod render;
pub mod scrape;
pub mod specs;
pub mod store;

#[cfg(feature = "gui")]
pub mod gui;
