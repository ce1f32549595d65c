//! Progress-callback trait for per-file conversion events.
//!
//! Inject an [`Arc<dyn BatchProgressCallback>`] via
//! [`crate::config::ConversionConfigBuilder::progress_callback`] to receive
//! events as the driver works through the batch.
//!
//! # Why callbacks instead of channels?
//!
//! The callback approach is the least-invasive integration point: callers
//! can forward events to a terminal progress bar, a build-system log, or a
//! notification channel without the library knowing anything about how the
//! host application communicates. The trait is `Send + Sync` because the
//! driver fires events from a blocking worker thread.
//!
//! There is no `on_file_error` hook: a failing file aborts the whole batch
//! and surfaces as the returned [`crate::error::ConvertError`], so the
//! per-file event stream only ever reports successes.

use std::sync::Arc;

/// Called by the batch driver as it processes each file.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Events arrive strictly in batch order: one
/// `on_file_start`/`on_file_complete` pair per file, never interleaved,
/// because conversion is sequential through a single browser tab.
pub trait BatchProgressCallback: Send + Sync {
    /// Called once after enumeration, before the browser launches.
    ///
    /// # Arguments
    /// * `total_files` — number of `.html` files that will be converted
    fn on_batch_start(&self, total_files: usize) {
        let _ = total_files;
    }

    /// Called immediately before a file's tab navigation begins.
    ///
    /// # Arguments
    /// * `index`       — 0-based position in the sorted batch
    /// * `total_files` — batch size
    /// * `file_name`   — bare input file name
    fn on_file_start(&self, index: usize, total_files: usize, file_name: &str) {
        let _ = (index, total_files, file_name);
    }

    /// Called when a file's PDF has been fully written to disk.
    ///
    /// # Arguments
    /// * `pdf_bytes` — size of the written PDF
    fn on_file_complete(&self, index: usize, total_files: usize, file_name: &str, pdf_bytes: u64) {
        let _ = (index, total_files, file_name, pdf_bytes);
    }

    /// Called once after the last file, before the browser is released.
    fn on_batch_complete(&self, total_files: usize, converted: usize) {
        let _ = (total_files, converted);
    }
}

/// A no-op implementation for callers that don't need progress events.
///
/// This is the default when no callback is configured.
pub struct NoopProgressCallback;

impl BatchProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConversionConfig`].
pub type ProgressCallback = Arc<dyn BatchProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

    struct TrackingCallback {
        starts: AtomicUsize,
        completes: AtomicUsize,
        batch_total: AtomicUsize,
        bytes: AtomicU64,
    }

    impl BatchProgressCallback for TrackingCallback {
        fn on_batch_start(&self, total_files: usize) {
            self.batch_total.store(total_files, Ordering::SeqCst);
        }

        fn on_file_start(&self, _index: usize, _total: usize, _name: &str) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }

        fn on_file_complete(&self, _index: usize, _total: usize, _name: &str, pdf_bytes: u64) {
            self.completes.fetch_add(1, Ordering::SeqCst);
            self.bytes.fetch_add(pdf_bytes, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_batch_start(2);
        cb.on_file_start(0, 2, "a.html");
        cb.on_file_complete(0, 2, "a.html", 1024);
        cb.on_batch_complete(2, 2);
    }

    #[test]
    fn tracking_callback_receives_events() {
        let t = TrackingCallback {
            starts: AtomicUsize::new(0),
            completes: AtomicUsize::new(0),
            batch_total: AtomicUsize::new(0),
            bytes: AtomicU64::new(0),
        };

        t.on_batch_start(3);
        t.on_file_start(0, 3, "a.html");
        t.on_file_complete(0, 3, "a.html", 100);
        t.on_file_start(1, 3, "b.html");
        t.on_file_complete(1, 3, "b.html", 250);

        assert_eq!(t.batch_total.load(Ordering::SeqCst), 3);
        assert_eq!(t.starts.load(Ordering::SeqCst), 2);
        assert_eq!(t.completes.load(Ordering::SeqCst), 2);
        assert_eq!(t.bytes.load(Ordering::SeqCst), 350);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: Arc<dyn BatchProgressCallback> = Arc::new(NoopProgressCallback);
        cb.on_batch_start(10);
        cb.on_file_start(0, 10, "index.html");
        cb.on_file_complete(0, 10, "index.html", 512);
    }
}
