//! Configuration for a batch conversion run.
//!
//! All behaviour is controlled through [`ConversionConfig`], built via its
//! [`ConversionConfigBuilder`]. Keeping the knobs in one struct makes it
//! trivial to share a config across entry points and to diff two runs to
//! understand why their outputs differ.
//!
//! Deliberately absent: paper size. Output is always ISO A4 — producing
//! any other page geometry is out of scope for this tool, so the constants
//! live in [`crate::pipeline::browser`] rather than here.

use crate::progress::BatchProgressCallback;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration for an HTML-to-PDF batch run.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use pressroom_html2pdf::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .print_background(true)
///     .build();
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Include background graphics and colours in the PDF. Default: true.
    ///
    /// Documentation themes routinely rely on CSS backgrounds for code
    /// blocks and admonitions; suppressing them (the browser's own print
    /// default) produces washed-out pages.
    pub print_background: bool,

    /// Explicit Chrome/Chromium executable. Default: None.
    ///
    /// When unset, the engine probes the usual installation locations.
    /// Set this for containers and CI images where the browser lives in a
    /// non-standard path.
    pub browser_path: Option<PathBuf>,

    /// Per-file progress events. Default: None (no events).
    pub progress_callback: Option<Arc<dyn BatchProgressCallback>>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            print_background: true,
            browser_path: None,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("print_background", &self.print_background)
            .field("browser_path", &self.browser_path)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn callback>"),
            )
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn print_background(mut self, v: bool) -> Self {
        self.config.print_background = v;
        self
    }

    pub fn browser_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.browser_path = Some(path.into());
        self
    }

    pub fn progress_callback(mut self, cb: Arc<dyn BatchProgressCallback>) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    pub fn build(self) -> ConversionConfig {
        self.config
    }
}
