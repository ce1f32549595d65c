//! Result types returned by the batch driver.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything a completed batch produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutput {
    /// Paths of the PDFs written, in conversion order.
    pub written: Vec<PathBuf>,
    /// Counters and timings for the run.
    pub stats: BatchStats,
}

/// Counters and timings for a batch run.
///
/// `converted_files` always equals `total_files` on a returned value —
/// any failure aborts the batch with an error instead — but both fields
/// are kept so `--json` consumers don't have to special-case the success
/// shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchStats {
    /// Number of `.html` files the enumerator matched.
    pub total_files: usize,
    /// Number of PDFs written.
    pub converted_files: usize,
    /// Total bytes of PDF output.
    pub pdf_bytes: u64,
    /// Wall-clock duration of the whole run, browser launch included.
    pub total_duration_ms: u64,
    /// Time spent navigating and printing, across all files.
    pub render_duration_ms: u64,
}
