//! # pressroom-html2pdf
//!
//! Batch-convert a directory of HTML documentation pages to A4 PDFs using
//! headless Chrome.
//!
//! ## Why this crate?
//!
//! Documentation generators (javadoc, rustdoc, mkdocs exports) leave you
//! with a directory full of HTML pages that print badly from a regular
//! browser session — backgrounds stripped, pagination wrong, one manual
//! print dialog per file. This crate drives a single headless Chrome tab
//! over the whole directory: each page is rendered exactly as the browser
//! sees it (CSS, backgrounds, web fonts) and printed to a PDF next to its
//! source file.
//!
//! ## Pipeline Overview
//!
//! ```text
//! directory
//!  │
//!  ├─ 1. Scan     list *.html, sort lexicographically
//!  ├─ 2. Launch   one Chrome process, one tab (blocking engine, spawn_blocking)
//!  ├─ 3. Convert  per file, strictly in order:
//!  │               navigate → wait for load to settle → print A4 → write .pdf
//!  └─ 4. Release  the session drops, Chrome shuts down — also on failure
//! ```
//!
//! There is deliberately no concurrency: one tab bounds resource usage,
//! and a documentation batch is small enough that wall-clock time does not
//! matter. The first failing file aborts the batch.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pressroom_html2pdf::{convert_dir, ConversionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::default();
//!     let output = convert_dir("./docs", &config).await?;
//!     eprintln!(
//!         "{} PDFs written ({} bytes) in {}ms",
//!         output.stats.converted_files,
//!         output.stats.pdf_bytes,
//!         output.stats.total_duration_ms,
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `html2pdf` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only
//! deps:
//! ```toml
//! pressroom-html2pdf = { version = "0.3", default-features = false }
//! ```
//!
//! ## Requirements
//!
//! A Chrome or Chromium installation. The crate never downloads or manages
//! a browser; point [`ConversionConfig`] at a specific binary when the
//! default discovery doesn't find yours.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod job;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use convert::{convert_cwd, convert_dir, convert_dir_sync, print_html};
pub use error::ConvertError;
pub use job::ConversionJob;
pub use output::{BatchOutput, BatchStats};
pub use progress::{BatchProgressCallback, NoopProgressCallback, ProgressCallback};
