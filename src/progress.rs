// src/progress.rs
/// Lightweight progress reporting for the roster batch.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of players to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One player fetched and extracted.
    fn item_done(&mut self, _name: &str, _records: usize) {}

    /// One player skipped after a fetch failure.
    fn item_failed(&mut self, _name: &str, _error: &str) {}

    /// Called at the end, whatever happened.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
