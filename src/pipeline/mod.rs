// src/pipeline/mod.rs
//! # Normalization pipeline
//!
//! Scraped goal tables arrive as loosely typed text. This module owns the
//! tidy-table contract the rest of the crate relies on:
//!
//! ```text
//! RawRecord / TableRow ──clean──▶ CleanRecord ──aggregate──▶ CumulativeEntry
//!                       └─────────────── prepare ───────────────┘
//! ```
//!
//! - `clean` coerces year/total to numbers and drops anything that does not parse.
//! - `aggregate` folds categories into one total per (entity, year), then scans each
//!   entity chronologically for `years_active` and the running sum.
//! - `prepare` is the single entry point renderers call.
//!
//! Every stage is pure. Empty in, empty out.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod clean;
pub mod cumulative;
pub mod prepare;

pub use clean::clean;
pub use cumulative::{aggregate, format_total, yearly_totals};
pub use prepare::prepare;

/// Competition a goal total was scored in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Club,
    International,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Club => "club",
            Category::International => "international",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "club" => Ok(Category::Club),
            "international" => Ok(Category::International),
            other => Err(format!("Unknown category: {other}")),
        }
    }
}

/// One scraped observation, straight from the extractor. Nothing is validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRecord {
    pub entity_name: String,
    pub year_text: String,
    pub total_text: String,
    pub category: Category,
}

impl RawRecord {
    pub fn new(
        entity_name: impl Into<String>,
        year_text: impl Into<String>,
        total_text: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            entity_name: entity_name.into(),
            year_text: year_text.into(),
            total_text: total_text.into(),
            category,
        }
    }
}

/// A row whose year and total both parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct CleanRecord {
    pub entity_name: String,
    pub year: i32,
    pub total: f64,
    /// `None` for a blank or unrecognised `type` cell; the goals still count.
    pub category: Option<Category>,
}

/// Sum of all categories for one (entity, year).
#[derive(Clone, Debug, PartialEq)]
pub struct YearlyTotal {
    pub entity_name: String,
    pub year: i32,
    pub total: f64,
}

/// One point of an entity's cumulative series.
#[derive(Clone, Debug, PartialEq)]
pub struct CumulativeEntry {
    pub entity_name: String,
    pub year: i32,
    pub total: f64,
    /// `year - first year` for this entity; every series starts at 0.
    pub years_active: u32,
    pub cumulative_total: f64,
    /// `"{entity_name} ({career_total})"`, same on every row of the entity.
    pub label: String,
}

/// A single cell as the cleaner sees it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Field<'a> {
    Text(&'a str),
    Int(i64),
    Float(f64),
    Missing,
}

/// Anything shaped like a `name, year, total, type` row.
///
/// Lets the cleaner (and `prepare`) take raw scraped records, rows read back
/// from the flat table, or records that are already clean.
pub trait StatRow {
    fn entity(&self) -> &str;
    fn year(&self) -> Field<'_>;
    fn total(&self) -> Field<'_>;
    /// `None` when the row's category is unrecognised.
    fn category(&self) -> Option<Category>;
}

impl StatRow for RawRecord {
    fn entity(&self) -> &str { &self.entity_name }
    fn year(&self) -> Field<'_> { Field::Text(&self.year_text) }
    fn total(&self) -> Field<'_> { Field::Text(&self.total_text) }
    fn category(&self) -> Option<Category> { Some(self.category) }
}

impl StatRow for CleanRecord {
    fn entity(&self) -> &str { &self.entity_name }
    fn year(&self) -> Field<'_> { Field::Int(i64::from(self.year)) }
    fn total(&self) -> Field<'_> { Field::Float(self.total) }
    fn category(&self) -> Option<Category> { self.category }
}

impl<T: StatRow + ?Sized> StatRow for &T {
    fn entity(&self) -> &str { (**self).entity() }
    fn year(&self) -> Field<'_> { (**self).year() }
    fn total(&self) -> Field<'_> { (**self).total() }
    fn category(&self) -> Option<Category> { (**self).category() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Club".parse::<Category>(), Ok(Category::Club));
        assert_eq!(" international ".parse::<Category>(), Ok(Category::International));
        assert!("league".parse::<Category>().is_err());
    }

    #[test]
    fn category_round_trips_through_display() {
        for c in [Category::Club, Category::International] {
            assert_eq!(c.to_string().parse::<Category>(), Ok(c));
        }
    }
}
