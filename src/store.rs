// src/store.rs
//
// The flat `name,year,total,type` table: the only thing written between
// `extract` and `plot`/`animate`. One row per scraped observation, pre-aggregation.

use std::{fs, io, path::{Path, PathBuf}};

use serde::Serialize;
use thiserror::Error;

use crate::pipeline::{Category, Field, RawRecord, StatRow};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("File {} not found.", .0.display())]
    NotFound(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, #[source] source: io::Error },

    #[error("{}: {source}", .path.display())]
    Csv { path: PathBuf, #[source] source: csv::Error },
}

/// One line of the table, untyped. Cells that are absent read as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub name: String,
    pub year: String,
    pub total: String,
    #[serde(rename = "type")]
    pub kind: String,
}

const COLUMNS: [&str; 4] = ["name", "year", "total", "type"];

impl From<&RawRecord> for TableRow {
    fn from(r: &RawRecord) -> Self {
        Self {
            name: r.entity_name.clone(),
            year: r.year_text.clone(),
            total: r.total_text.clone(),
            kind: s!(r.category.as_str()),
        }
    }
}

impl StatRow for TableRow {
    fn entity(&self) -> &str { &self.name }
    fn year(&self) -> Field<'_> { text_field(&self.year) }
    fn total(&self) -> Field<'_> { text_field(&self.total) }
    fn category(&self) -> Option<Category> { self.kind.parse().ok() }
}

fn text_field(s: &str) -> Field<'_> {
    if s.trim().is_empty() { Field::Missing } else { Field::Text(s) }
}

/// Write the table with its header, creating parent directories as needed.
pub fn write_table(path: &Path, rows: &[RawRecord]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let csv_err = |source| StoreError::Csv { path: path.to_path_buf(), source };
    let mut w = csv::Writer::from_path(path).map_err(csv_err)?;
    if rows.is_empty() {
        // serde only emits the header alongside the first record
        w.write_record(COLUMNS).map_err(csv_err)?;
    }
    for r in rows {
        w.serialize(TableRow::from(r)).map_err(csv_err)?;
    }
    w.flush().map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
    Ok(())
}

/// Read the table back. Columns are found by header name in any order; unknown
/// columns are ignored. Short rows and missing columns read as empty cells.
pub fn read_table(path: &Path) -> Result<Vec<TableRow>, StoreError> {
    if !path.is_file() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }
    let csv_err = |source| StoreError::Csv { path: path.to_path_buf(), source };

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_err)?;

    let headers = rdr.headers().map_err(csv_err)?.clone();
    let [name, year, total, kind] =
        COLUMNS.map(|col| headers.iter().position(|h| h.eq_ignore_ascii_case(col)));

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(csv_err)?;
        let cell = |idx: Option<usize>| s!(idx.and_then(|i| record.get(i)).unwrap_or(""));
        rows.push(TableRow {
            name: cell(name),
            year: cell(year),
            total: cell(total),
            kind: cell(kind),
        });
    }
    logd!("read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

pub fn ensure_directory(dir: &Path) -> Result<(), StoreError> {
    if dir.exists() && !dir.is_dir() {
        return Err(StoreError::Io {
            path: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        });
    }
    fs::create_dir_all(dir).map_err(|source| StoreError::Io { path: dir.to_path_buf(), source })
}
