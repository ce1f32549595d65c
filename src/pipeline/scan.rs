//! File enumeration: produce the sorted list of convertible files.
//!
//! ## Why sort?
//!
//! `read_dir` yields entries in whatever order the filesystem feels like —
//! inode order on ext4, insertion order on some network mounts. Sorting
//! makes the batch deterministic: the same directory always converts in
//! the same order, progress output is reproducible, and "it failed at
//! `m-worker.html`" means the same thing on every machine.

use crate::error::ConvertError;
use crate::job::HTML_SUFFIX;
use std::path::Path;
use tracing::{debug, warn};

/// Enumerate the direct children of `dir` that end in `.html`.
///
/// Returns bare file names, sorted ascending (byte order). Directories are
/// excluded even when their name carries the suffix; symlinks count as
/// whatever they resolve to. The suffix comparison is case-sensitive, so
/// `INDEX.HTML` is not matched. Names that are not valid UTF-8 cannot
/// carry the suffix as a Rust string and are skipped with a warning.
///
/// # Errors
/// [`ConvertError::DirectoryUnreadable`] when the directory itself (or an
/// entry during iteration) cannot be read. Fatal — there is no partial
/// enumeration.
pub fn scan_html_files(dir: &Path) -> Result<Vec<String>, ConvertError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ConvertError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConvertError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source: e,
        })?;

        // is_file() follows symlinks and is false for directories, so a
        // directory named `guide.html` never becomes a job.
        if !entry.path().is_file() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) if name.ends_with(HTML_SUFFIX) => names.push(name),
            Ok(_) => {}
            Err(raw) => {
                warn!("Skipping non-UTF-8 file name: {:?}", raw);
            }
        }
    }

    names.sort_unstable();
    debug!("Enumerated {} HTML file(s) in {}", names.len(), dir.display());
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"<html></html>").unwrap();
    }

    #[test]
    fn matches_only_the_html_suffix() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.html");
        touch(dir.path(), "readme.txt");
        touch(dir.path(), "report.html.bak");
        touch(dir.path(), "b.html");

        let names = scan_html_files(dir.path()).unwrap();
        assert_eq!(names, vec!["a.html", "b.html"]);
    }

    #[test]
    fn sorts_lexicographically_not_in_listing_order() {
        let dir = tempfile::tempdir().unwrap();
        // Created in reverse order on purpose.
        touch(dir.path(), "z.html");
        touch(dir.path(), "m.html");
        touch(dir.path(), "a.html");

        let names = scan_html_files(dir.path()).unwrap();
        assert_eq!(names, vec!["a.html", "m.html", "z.html"]);
    }

    #[test]
    fn excludes_directories_even_with_html_names() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("guide.html")).unwrap();
        touch(dir.path(), "real.html");

        let names = scan_html_files(dir.path()).unwrap();
        assert_eq!(names, vec!["real.html"]);
    }

    #[test]
    fn suffix_comparison_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "INDEX.HTML");
        touch(dir.path(), "page.Html");
        touch(dir.path(), "lower.html");

        let names = scan_html_files(dir.path()).unwrap();
        assert_eq!(names, vec!["lower.html"]);
    }

    #[test]
    fn does_not_recurse_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("nested");
        std::fs::create_dir(&sub).unwrap();
        touch(&sub, "hidden.html");
        touch(dir.path(), "top.html");

        let names = scan_html_files(dir.path()).unwrap();
        assert_eq!(names, vec!["top.html"]);
    }

    #[test]
    fn empty_directory_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_html_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_a_fatal_error() {
        let err = scan_html_files(Path::new("/definitely/not/a/real/dir")).unwrap_err();
        assert!(matches!(err, ConvertError::DirectoryUnreadable { .. }));
    }
}
