// src/pipeline/prepare.rs
use super::{CumulativeEntry, StatRow, aggregate, clean};

/// Cleaner then aggregator: the one call renderers make.
/// Accepts raw scraped records, rows read from the flat table, or clean records.
pub fn prepare<R: StatRow>(rows: &[R]) -> Vec<CumulativeEntry> {
    if rows.is_empty() {
        return Vec::new();
    }
    aggregate(&clean(rows))
}
