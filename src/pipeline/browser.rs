//! The browser session: one Chrome process, one tab, reused for the batch.
//!
//! ## Why spawn_blocking?
//!
//! `headless_chrome` drives the browser over a synchronous DevTools
//! connection; navigation and PDF printing block the calling thread until
//! the engine is done. `tokio::task::spawn_blocking` moves each of those
//! waits onto the blocking thread pool so the async driver never stalls a
//! runtime worker, while the driver still awaits every job to completion
//! before touching the next file.
//!
//! ## Session lifetime
//!
//! The `Browser` value owns the Chrome process: dropping `BrowserSession`
//! — on normal return or while unwinding an error out of the batch — shuts
//! the process down. There is deliberately no explicit `close()` to forget.

use crate::config::ConversionConfig;
use crate::error::ConvertError;
use crate::job::ConversionJob;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// ISO A4 paper width in inches, as the DevTools print endpoint expects.
pub const A4_WIDTH_INCHES: f64 = 8.27;
/// ISO A4 paper height in inches.
pub const A4_HEIGHT_INCHES: f64 = 11.69;

/// A launched headless browser plus the single tab all jobs render in.
///
/// Acquired once before the first job, released exactly once when dropped,
/// regardless of how many jobs ran or whether one of them failed.
pub struct BrowserSession {
    // Never read, only owned: dropping it is what closes Chrome.
    _browser: Browser,
    tab: Arc<Tab>,
}

impl BrowserSession {
    /// Launch Chrome and open the tab the batch will reuse.
    pub async fn launch(config: &ConversionConfig) -> Result<Self, ConvertError> {
        let browser_path = config.browser_path.clone();

        tokio::task::spawn_blocking(move || Self::launch_blocking(browser_path))
            .await
            .map_err(|e| ConvertError::Internal(format!("Launch task panicked: {e}")))?
    }

    fn launch_blocking(browser_path: Option<PathBuf>) -> Result<Self, ConvertError> {
        let options = LaunchOptions::default_builder()
            .path(browser_path)
            .build()
            .map_err(|e| ConvertError::BrowserLaunch {
                detail: e.to_string(),
            })?;

        let browser = Browser::new(options).map_err(|e| ConvertError::BrowserLaunch {
            detail: e.to_string(),
        })?;
        let tab = browser.new_tab().map_err(|e| ConvertError::BrowserLaunch {
            detail: e.to_string(),
        })?;

        info!("Headless browser launched");
        Ok(Self {
            _browser: browser,
            tab,
        })
    }

    /// Render one job: navigate, wait for the load to settle, print, write.
    ///
    /// Returns the size of the written PDF in bytes. The call does not
    /// return until the PDF write has completed, which is what guarantees
    /// job N+1 never starts before job N's output exists.
    pub async fn print_job(
        &self,
        job: &ConversionJob,
        config: &ConversionConfig,
    ) -> Result<u64, ConvertError> {
        let tab = Arc::clone(&self.tab);
        let job = job.clone();
        let print_background = config.print_background;

        tokio::task::spawn_blocking(move || print_job_blocking(&tab, &job, print_background))
            .await
            .map_err(|e| ConvertError::Internal(format!("Render task panicked: {e}")))?
    }
}

/// Blocking implementation of a single conversion job.
fn print_job_blocking(
    tab: &Tab,
    job: &ConversionJob,
    print_background: bool,
) -> Result<u64, ConvertError> {
    let url = job.file_url()?;

    tab.navigate_to(url.as_str())
        .map_err(|e| ConvertError::NavigationFailed {
            file: job.file_name().to_string(),
            detail: e.to_string(),
        })?;
    // Suspends until the page reports its load settled — the engine's
    // analogue of waiting for network-idle. A page that never settles
    // (persistent polling) stalls the batch here; that is the documented
    // behaviour, not a bug to defend against.
    tab.wait_until_navigated()
        .map_err(|e| ConvertError::NavigationFailed {
            file: job.file_name().to_string(),
            detail: e.to_string(),
        })?;

    let pdf = tab
        .print_to_pdf(Some(pdf_options(print_background)))
        .map_err(|e| ConvertError::PrintFailed {
            file: job.file_name().to_string(),
            detail: e.to_string(),
        })?;

    std::fs::write(job.output(), &pdf).map_err(|e| ConvertError::OutputWriteFailed {
        path: job.output().to_path_buf(),
        source: e,
    })?;

    debug!(
        "Rendered {} → {} ({} bytes)",
        job.file_name(),
        job.output().display(),
        pdf.len()
    );
    Ok(pdf.len() as u64)
}

/// Print options for every job: fixed A4 geometry, backgrounds as configured.
fn pdf_options(print_background: bool) -> PrintToPdfOptions {
    PrintToPdfOptions {
        print_background: Some(print_background),
        paper_width: Some(A4_WIDTH_INCHES),
        paper_height: Some(A4_HEIGHT_INCHES),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_options_fix_a4_and_forward_background() {
        let opts = pdf_options(true);
        assert_eq!(opts.paper_width, Some(A4_WIDTH_INCHES));
        assert_eq!(opts.paper_height, Some(A4_HEIGHT_INCHES));
        assert_eq!(opts.print_background, Some(true));

        let opts = pdf_options(false);
        assert_eq!(opts.print_background, Some(false));
        // Geometry never varies with the background flag.
        assert_eq!(opts.paper_width, Some(A4_WIDTH_INCHES));
    }

    #[test]
    fn pdf_options_leave_margins_to_the_engine() {
        let opts = pdf_options(true);
        assert!(opts.margin_top.is_none());
        assert!(opts.landscape.is_none());
        assert!(opts.page_ranges.is_none());
    }
}
