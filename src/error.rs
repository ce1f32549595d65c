//! Error types for the pressroom-html2pdf library.
//!
//! Every error here is **fatal to the batch**: there is no per-file
//! isolation, no retry, and no skip-and-continue. The first failing file
//! aborts the remaining queue and the error surfaces from the top-level
//! `convert*` functions unchanged. This is a deliberate property of a
//! human-supervised documentation build step — a broken page should stop
//! the build, not silently produce a partial PDF set.
//!
//! The browser session itself is owned by a scope-bound value
//! ([`crate::pipeline::browser::BrowserSession`]), so even on the error
//! path the Chrome process is shut down before the error reaches the
//! caller.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pressroom-html2pdf library.
#[derive(Debug, Error)]
pub enum ConvertError {
    // ── Enumeration errors ────────────────────────────────────────────────
    /// The input directory's entry list could not be read.
    #[error("Cannot read directory '{path}': {source}\nCheck the path exists and is readable.")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Job derivation errors ─────────────────────────────────────────────
    /// A conversion job was requested for a name without the `.html` suffix.
    ///
    /// The output-name derivation (trailing `.html` → `.pdf`) is only
    /// defined for that exact, case-sensitive suffix.
    #[error("'{name}' does not end in '.html' (the suffix check is case-sensitive)")]
    NotAnHtmlFile { name: String },

    /// The input path could not be turned into an absolute `file://` URL.
    #[error("Cannot build a file:// URL for '{path}': {detail}")]
    FileUrl { path: PathBuf, detail: String },

    // ── Engine errors ─────────────────────────────────────────────────────
    /// Chrome/Chromium could not be launched.
    #[error(
        "Failed to launch headless Chrome: {detail}\n\n\
A Chrome or Chromium installation is required but is never installed by\n\
this tool. If the browser is in a non-standard location, point at it\n\
with --browser /path/to/chrome (or ConversionConfig::builder().browser_path(…))."
    )]
    BrowserLaunch { detail: String },

    /// Navigation to the input file failed or the page never settled.
    #[error("Navigation failed for '{file}': {detail}")]
    NavigationFailed { file: String, detail: String },

    /// The engine failed to produce PDF bytes for the current page.
    #[error("PDF rendering failed for '{file}': {detail}")]
    PrintFailed { file: String, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not write the rendered PDF to the output path.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error (e.g. a panicked blocking task).
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_an_html_file_display() {
        let e = ConvertError::NotAnHtmlFile {
            name: "INDEX.HTML".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("INDEX.HTML"), "got: {msg}");
        assert!(msg.contains("case-sensitive"), "got: {msg}");
    }

    #[test]
    fn directory_unreadable_carries_source() {
        use std::error::Error as _;
        let e = ConvertError::DirectoryUnreadable {
            path: PathBuf::from("/no/such/dir"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(e.to_string().contains("/no/such/dir"));
        assert!(e.source().is_some(), "io::Error must be chained as source");
    }

    #[test]
    fn browser_launch_mentions_browser_flag() {
        let e = ConvertError::BrowserLaunch {
            detail: "no chrome executable found".into(),
        };
        assert!(e.to_string().contains("--browser"));
    }

    #[test]
    fn navigation_failed_names_the_file() {
        let e = ConvertError::NavigationFailed {
            file: "broken.html".into(),
            detail: "timed out".into(),
        };
        assert!(e.to_string().contains("broken.html"));
        assert!(e.to_string().contains("timed out"));
    }
}
