// src/pipeline/clean.rs
use super::{CleanRecord, Field, StatRow};

/// Coerce year/total of every row to numbers, dropping rows where either fails.
///
/// The category is carried along as-is; an unknown one does not drop the row.
/// Duplicate (entity, year, category) rows are kept; summing them is the
/// aggregator's job.
pub fn clean<R: StatRow>(rows: &[R]) -> Vec<CleanRecord> {
    let mut out = Vec::with_capacity(rows.len());
    let mut dropped = 0usize;

    for row in rows {
        let year = coerce_year(row.year());
        let total = coerce_number(row.total());
        match (year, total) {
            (Some(year), Some(total)) => out.push(CleanRecord {
                entity_name: row.entity().to_string(),
                year,
                total,
                category: row.category(),
            }),
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        logd!("clean: dropped {dropped} of {} rows", rows.len());
    }
    out
}

/// Numeric value of a cell, or `None` for empty, non-numeric, NaN or infinite.
pub fn coerce_number(field: Field<'_>) -> Option<f64> {
    let v = match field {
        Field::Text(s) => s.trim().parse::<f64>().ok()?,
        Field::Int(i) => i as f64,
        Field::Float(f) => f,
        Field::Missing => return None,
    };
    v.is_finite().then_some(v)
}

/// Years must be integral (`2020` or `2020.0`) and fit in `i32`.
pub fn coerce_year(field: Field<'_>) -> Option<i32> {
    if let Field::Int(i) = field {
        return i32::try_from(i).ok();
    }
    let v = coerce_number(field)?;
    if v.fract() != 0.0 || v < i32::MIN as f64 || v > i32::MAX as f64 {
        return None;
    }
    Some(v as i32)
}
