//! The conversion job: one (input, output) path pair.
//!
//! ## Why a value type?
//!
//! The output name is derived from the input name by a single string rule —
//! replace the trailing `.html` with `.pdf`. Materialising that rule in a
//! small constructor (instead of recomputing it inline at the render call)
//! lets the derivation be tested in isolation and makes the rule's domain
//! explicit: construction fails for any name that does not carry the exact,
//! case-sensitive `.html` suffix.
//!
//! Only the *trailing* suffix participates. `a.html.html` derives
//! `a.html.pdf`; `report.html.bak` is rejected outright. A first-occurrence
//! substitution would have produced `a.pdf.html` — not what "replace the
//! suffix" means.

use crate::error::ConvertError;
use std::path::{Path, PathBuf};
use url::Url;

/// The exact, case-sensitive suffix a convertible file must carry.
pub const HTML_SUFFIX: &str = ".html";

/// A single conversion: which file to render and where the PDF goes.
///
/// Constructed immediately before rendering, consumed immediately after,
/// never stored. The output is always a sibling of the input (same
/// directory, same base name, `.pdf` suffix).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    input: PathBuf,
    output: PathBuf,
    file_name: String,
}

impl ConversionJob {
    /// Build a job for `file_name` inside `dir`.
    ///
    /// # Errors
    /// [`ConvertError::NotAnHtmlFile`] when `file_name` does not end in
    /// exactly `.html`.
    pub fn new(dir: impl AsRef<Path>, file_name: &str) -> Result<Self, ConvertError> {
        let stem = file_name
            .strip_suffix(HTML_SUFFIX)
            .ok_or_else(|| ConvertError::NotAnHtmlFile {
                name: file_name.to_string(),
            })?;

        let dir = dir.as_ref();
        Ok(Self {
            input: dir.join(file_name),
            output: dir.join(format!("{stem}.pdf")),
            file_name: file_name.to_string(),
        })
    }

    /// Path of the HTML file to render.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Path the rendered PDF is written to.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// The input's bare file name, as used in progress notices.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Point the job's output somewhere other than the derived sibling.
    ///
    /// Only [`crate::convert::print_html`] uses this: its input is a
    /// scratch file, and the derived sibling would land in the temp
    /// directory instead of where the caller asked.
    pub(crate) fn redirect_output(&mut self, path: &Path) {
        self.output = path.to_path_buf();
    }

    /// Absolute `file://` URL for the input, suitable for tab navigation.
    ///
    /// The path is canonicalised first, so the job may be constructed from
    /// a relative directory (`.`) and still navigate correctly.
    pub fn file_url(&self) -> Result<Url, ConvertError> {
        let absolute = std::fs::canonicalize(&self.input).map_err(|e| ConvertError::FileUrl {
            path: self.input.clone(),
            detail: e.to_string(),
        })?;
        Url::from_file_path(&absolute).map_err(|_| ConvertError::FileUrl {
            path: absolute,
            detail: "path is not absolute".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_pdf_sibling() {
        let job = ConversionJob::new("/docs", "index.html").unwrap();
        assert_eq!(job.input(), Path::new("/docs/index.html"));
        assert_eq!(job.output(), Path::new("/docs/index.pdf"));
        assert_eq!(job.file_name(), "index.html");
    }

    #[test]
    fn only_trailing_suffix_is_substituted() {
        let job = ConversionJob::new("/docs", "a.html.html").unwrap();
        assert_eq!(job.output(), Path::new("/docs/a.html.pdf"));
    }

    #[test]
    fn mid_string_html_is_rejected() {
        let err = ConversionJob::new("/docs", "report.html.bak").unwrap_err();
        assert!(matches!(err, ConvertError::NotAnHtmlFile { .. }));
    }

    #[test]
    fn suffix_check_is_case_sensitive() {
        assert!(ConversionJob::new("/docs", "INDEX.HTML").is_err());
        assert!(ConversionJob::new("/docs", "page.Html").is_err());
    }

    #[test]
    fn non_html_name_is_rejected() {
        let err = ConversionJob::new("/docs", "readme.txt").unwrap_err();
        assert!(matches!(err, ConvertError::NotAnHtmlFile { .. }));
    }

    #[test]
    fn output_stays_in_the_input_directory() {
        let job = ConversionJob::new("/var/www/docs", "api.html").unwrap();
        assert_eq!(job.output().parent(), job.input().parent());
    }

    #[test]
    fn redirect_output_overrides_the_sibling_rule() {
        let mut job = ConversionJob::new("/tmp/scratch", "x.html").unwrap();
        job.redirect_output(Path::new("/home/me/notes.pdf"));
        assert_eq!(job.output(), Path::new("/home/me/notes.pdf"));
        // Input is untouched.
        assert_eq!(job.input(), Path::new("/tmp/scratch/x.html"));
    }

    #[test]
    fn file_url_is_absolute_and_file_scheme() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("page.html"), "<html></html>").unwrap();

        let job = ConversionJob::new(dir.path(), "page.html").unwrap();
        let url = job.file_url().unwrap();

        assert_eq!(url.scheme(), "file");
        assert!(url.path().ends_with("page.html"), "got: {url}");
    }

    #[test]
    fn file_url_fails_for_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let job = ConversionJob::new(dir.path(), "ghost.html").unwrap();
        assert!(matches!(
            job.file_url().unwrap_err(),
            ConvertError::FileUrl { .. }
        ));
    }
}
