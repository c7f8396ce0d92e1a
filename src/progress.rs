// src/progress.rs
use crate::model::SourceId;

/// Per-source tally, reported once the source is resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SourceSummary {
    pub extracted: usize,
    /// Of `extracted`, the curated substitutions that never touched the site.
    pub fixed: usize,
    pub fallback: usize,
    pub unavailable: usize,
}

impl SourceSummary {
    pub fn total(&self) -> usize {
        self.extracted + self.fallback + self.unavailable
    }

    pub fn live(&self) -> usize {
        self.extracted - self.fixed
    }
}

/// Lightweight progress reporting for a run.
/// Frontends implement this to surface status to users; every method is optional.
pub trait Progress {
    /// Called at the start with the number of sources.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one source has been resolved, however it went.
    fn source_done(&mut self, _source: SourceId, _summary: &SourceSummary) {}

    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
