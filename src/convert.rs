//! Batch conversion entry points.
//!
//! ## Why strictly sequential?
//!
//! Every job renders through the same browser tab, one after another, in
//! the enumerator's sorted order. That serialisation bounds resource usage
//! — one Chrome process, one page context, regardless of batch size — and
//! it is a scope decision, not an ordering requirement. If parallel
//! rendering is ever wanted, the seam is here: the scan stage already
//! produces the whole job list up front; the loop is the only consumer.

use crate::config::ConversionConfig;
use crate::error::ConvertError;
use crate::job::ConversionJob;
use crate::output::{BatchOutput, BatchStats};
use crate::pipeline::{browser::BrowserSession, scan};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Convert every `.html` file in `dir` to a sibling `.pdf`.
///
/// This is the primary entry point for the library.
///
/// Files are processed in ascending lexicographic order. The browser is
/// launched once — even when the directory holds no HTML files — and is
/// shut down when the session value drops, on success and failure alike.
///
/// # Errors
/// The first failure aborts the batch: an unreadable directory, a failed
/// launch, a navigation or print failure for any file, or a failed PDF
/// write. PDFs written before the failure remain on disk.
pub async fn convert_dir(
    dir: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<BatchOutput, ConvertError> {
    let dir = dir.as_ref();
    let total_start = Instant::now();
    info!("Starting batch conversion in {}", dir.display());

    // ── Step 1: Enumerate ────────────────────────────────────────────────
    // Fatal before anything else happens; the browser is not launched for
    // a directory we cannot read.
    let names = scan::scan_html_files(dir)?;
    let total_files = names.len();

    if let Some(ref cb) = config.progress_callback {
        cb.on_batch_start(total_files);
    }

    // ── Step 2: Acquire the session ──────────────────────────────────────
    // Unconditionally, even for an empty batch — the session lifecycle is
    // independent of how many jobs run.
    let session = BrowserSession::launch(config).await?;

    // ── Step 3: Drive the jobs, strictly in order ────────────────────────
    let render_start = Instant::now();
    let mut written = Vec::with_capacity(total_files);
    let mut pdf_bytes: u64 = 0;

    for (index, name) in names.iter().enumerate() {
        let job = ConversionJob::new(dir, name)?;

        // The progress notice precedes navigation, so on failure the last
        // line printed names the culprit.
        info!("Converting: {}", job.file_name());
        if let Some(ref cb) = config.progress_callback {
            cb.on_file_start(index, total_files, job.file_name());
        }

        let bytes = session.print_job(&job, config).await?;
        pdf_bytes += bytes;

        if let Some(ref cb) = config.progress_callback {
            cb.on_file_complete(index, total_files, job.file_name(), bytes);
        }
        written.push(job.output().to_path_buf());
    }
    let render_duration_ms = render_start.elapsed().as_millis() as u64;

    // ── Step 4: Release and report ───────────────────────────────────────
    if let Some(ref cb) = config.progress_callback {
        cb.on_batch_complete(total_files, written.len());
    }
    drop(session);
    debug!("Browser session released");

    let stats = BatchStats {
        total_files,
        converted_files: written.len(),
        pdf_bytes,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
        render_duration_ms,
    };

    info!(
        "Batch complete: {}/{} files, {}ms total",
        stats.converted_files, stats.total_files, stats.total_duration_ms
    );

    Ok(BatchOutput { written, stats })
}

/// Convert the current working directory — the classic invocation.
pub async fn convert_cwd(config: &ConversionConfig) -> Result<BatchOutput, ConvertError> {
    let cwd = std::env::current_dir().map_err(|e| {
        ConvertError::Internal(format!("Cannot determine current directory: {e}"))
    })?;
    convert_dir(cwd, config).await
}

/// Synchronous wrapper around [`convert_dir`].
///
/// Creates a temporary tokio runtime internally.
pub fn convert_dir_sync(
    dir: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<BatchOutput, ConvertError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| ConvertError::Internal(format!("Failed to create tokio runtime: {e}")))?
        .block_on(convert_dir(dir, config))
}

/// Render a single in-memory HTML string to a PDF file.
///
/// Avoids the need for the caller to place a file in a directory first:
/// the HTML is persisted to a managed temp file with an `.html` suffix
/// (the engine needs a navigable path), rendered through a fresh
/// single-job session, and the temp file is cleaned up on return.
///
/// # Example
/// ```rust,no_run
/// use pressroom_html2pdf::{print_html, ConversionConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ConversionConfig::default();
/// print_html("<h1>Release notes</h1>", "notes.pdf", &config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn print_html(
    html: &str,
    output: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<u64, ConvertError> {
    use std::io::Write;

    let mut tmp = tempfile::Builder::new()
        .suffix(".html")
        .tempfile()
        .map_err(|e| ConvertError::Internal(format!("tempfile: {e}")))?;
    tmp.write_all(html.as_bytes())
        .map_err(|e| ConvertError::Internal(format!("tempfile write: {e}")))?;

    let dir = tmp
        .path()
        .parent()
        .ok_or_else(|| ConvertError::Internal("tempfile has no parent directory".into()))?
        .to_path_buf();
    let name = tmp
        .path()
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ConvertError::Internal("tempfile has a non-UTF-8 name".into()))?
        .to_string();

    let mut job = ConversionJob::new(&dir, &name)?;
    job.redirect_output(output.as_ref());

    let session = BrowserSession::launch(config).await?;
    let bytes = session.print_job(&job, config).await?;
    // `tmp` is dropped (and the scratch file deleted) on return.
    Ok(bytes)
}
