// src/specs/mod.rs
//! # Page “specs”
//!
//! Knowledge of *which* pages to read and *where* the goal totals live in them.
//!
//! ## What lives here
//! - **The roster** (`roster`): the fixed list of players and their Wikipedia pages.
//! - **Table heuristics** (`career`): header-label matching that picks the club
//!   statistics table ("Season" + "Total Goals") and the international table
//!   ("Year" + "Goals") out of every table on a page.
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net`) and generic table reading (`core::html`).
//! - **Number parsing**: extracted cells stay text; `pipeline::clean` decides what parses.
//! - **Batching / failure isolation** across players (`scrape`).
//!
//! ## Typical call chain
//! ```text
//! cli extract → scrape::collect_roster → PageSource::fetch(url)
//!                                      → specs::career::extract_records(html, name)
//!             → store::write_table
//! ```
//!
//! ## Conventions
//! - Header matching is substring-based on flattened labels.
//! - A page with no recognisable table yields zero records, never an error.
//!
//! ## Testing notes
//! - Heuristics are tested offline against small hand-written table fixtures.
pub mod career;
pub mod roster;
