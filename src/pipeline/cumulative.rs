// src/pipeline/cumulative.rs
use std::collections::BTreeMap;

use super::{CleanRecord, CumulativeEntry, YearlyTotal};

/// One row per (entity, year), totals summed across categories.
/// Ordered by entity name, then year ascending.
pub fn yearly_totals(records: &[CleanRecord]) -> Vec<YearlyTotal> {
    let mut by_key: BTreeMap<(&str, i32), f64> = BTreeMap::new();
    for r in records {
        *by_key.entry((r.entity_name.as_str(), r.year)).or_insert(0.0) += r.total;
    }
    by_key
        .into_iter()
        .map(|((name, year), total)| YearlyTotal { entity_name: s!(name), year, total })
        .collect()
}

/// Cumulative series for every entity.
///
/// Entities come out in name order; rows within an entity are chronological,
/// anchored at `years_active == 0`.
pub fn aggregate(records: &[CleanRecord]) -> Vec<CumulativeEntry> {
    let yearly = yearly_totals(records);
    let mut out = Vec::with_capacity(yearly.len());

    // `yearly` is sorted by (entity, year), so each entity is one contiguous run.
    for run in yearly.chunk_by(|a, b| a.entity_name == b.entity_name) {
        let first_year = run[0].year;
        let career: f64 = run.iter().map(|y| y.total).sum();
        let label = format!("{} ({})", run[0].entity_name, format_total(career));

        let mut running = 0.0;
        for y in run {
            running += y.total;
            out.push(CumulativeEntry {
                entity_name: y.entity_name.clone(),
                year: y.year,
                total: y.total,
                years_active: years_between(first_year, y.year),
                cumulative_total: running,
                label: label.clone(),
            });
        }
    }
    out
}

// Any two i32 years are at most u32::MAX apart.
fn years_between(first: i32, year: i32) -> u32 {
    u32::try_from(i64::from(year) - i64::from(first)).unwrap_or(u32::MAX)
}

/// `30.0` → `"30"`, `12.5` → `"12.5"`.
pub fn format_total(total: f64) -> String {
    if total.fract() == 0.0 && total.abs() < 1e15 {
        format!("{}", total as i64)
    } else {
        format!("{total}")
    }
}
