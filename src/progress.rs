// src/progress.rs
/// Lightweight progress reporting used by long-running harvests.
/// The CLI implements this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one entity completes.
    fn item_done(&mut self, _id: &str) {}

    /// Called when one entity could not be harvested.
    fn item_failed(&mut self, _id: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
