//! CLI binary for pressroom-html2pdf.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pressroom_html2pdf::{
    convert_dir, BatchProgressCallback, ConversionConfig, ProgressCallback,
};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: a live bar plus one log line per file.
/// Conversion is strictly sequential, so at most one file is in flight;
/// the Mutex exists only because the trait is `Send + Sync`.
struct CliProgressCallback {
    bar: ProgressBar,
    current_start: Mutex<Option<Instant>>,
}

impl CliProgressCallback {
    /// Create a callback whose bar length is set by `on_batch_start`
    /// (called after enumeration, before the browser launches).
    fn new_dynamic() -> Arc<Self> {
        let bar = ProgressBar::new(0); // length set in on_batch_start

        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        bar.set_style(spinner_style);
        bar.set_prefix("Preparing");
        bar.set_message("Scanning directory…");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self {
            bar,
            current_start: Mutex::new(None),
        })
    }

    /// Switch to the full progress-bar style once we know `total`.
    fn activate_bar(&self, total: usize) {
        let progress_style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} files  \
             ⏱ {elapsed_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        self.bar.set_length(total as u64);
        self.bar.set_style(progress_style);
        self.bar.set_prefix("Converting");
    }
}

impl BatchProgressCallback for CliProgressCallback {
    fn on_batch_start(&self, total_files: usize) {
        self.activate_bar(total_files);
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!("Converting {total_files} HTML file(s) to PDF…"))
        ));
    }

    fn on_file_start(&self, _index: usize, _total: usize, file_name: &str) {
        *self.current_start.lock().unwrap() = Some(Instant::now());
        self.bar.set_message(file_name.to_string());
    }

    fn on_file_complete(&self, index: usize, total: usize, file_name: &str, pdf_bytes: u64) {
        let elapsed_ms = self
            .current_start
            .lock()
            .unwrap()
            .take()
            .map(|t| t.elapsed().as_millis())
            .unwrap_or(0);

        self.bar.println(format!(
            "  {} {:>3}/{:<3}  {:<40}  {}  {}",
            green("✓"),
            index + 1,
            total,
            file_name,
            dim(&format!("{:>7} B", pdf_bytes)),
            dim(&format!("{:.1}s", elapsed_ms as f64 / 1000.0)),
        ));
        self.bar.inc(1);
    }

    fn on_batch_complete(&self, total_files: usize, converted: usize) {
        self.bar.finish_and_clear();
        eprintln!(
            "{} {} of {} file(s) converted",
            green("✔"),
            bold(&converted.to_string()),
            total_files,
        );
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert every .html file in the current directory
  html2pdf

  # Convert a documentation build directory
  html2pdf target/doc

  # Point at a non-standard Chrome install
  html2pdf --browser /opt/chromium/chrome ./site

  # Machine-readable run summary
  html2pdf --json ./docs > report.json

BEHAVIOUR:
  Files are converted in ascending lexicographic order through a single
  reused browser tab. Each output PDF lands next to its input with the
  same base name (index.html → index.pdf), ISO A4 pages, backgrounds
  included. The first failing file aborts the run; PDFs already written
  stay on disk.

REQUIREMENTS:
  A Chrome or Chromium installation. html2pdf never downloads a browser.

ENVIRONMENT VARIABLES:
  HTML2PDF_BROWSER        Path to the Chrome/Chromium executable
  HTML2PDF_NO_BACKGROUND  Disable background graphics in the output
  RUST_LOG                Standard tracing filter (overrides -v/-q)
"#;

/// Batch-convert HTML files to A4 PDFs using headless Chrome.
#[derive(Parser, Debug)]
#[command(
    name = "html2pdf",
    version,
    about = "Batch-convert HTML files to A4 PDFs using headless Chrome",
    long_about = "Convert every .html file in a directory to a paginated A4 PDF, rendered by \
headless Chrome exactly as a browser displays it (CSS, backgrounds, web fonts). Outputs are \
written next to their inputs.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Directory to convert (non-recursive).
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Path to the Chrome/Chromium executable.
    #[arg(long, env = "HTML2PDF_BROWSER")]
    browser: Option<PathBuf>,

    /// Do not include background graphics/colours in the PDFs.
    #[arg(long, env = "HTML2PDF_NO_BACKGROUND")]
    no_background: bool,

    /// Output a structured JSON run summary instead of human text.
    #[arg(long, env = "HTML2PDF_JSON")]
    json: bool,

    /// Disable the progress bar.
    #[arg(long, env = "HTML2PDF_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "HTML2PDF_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "HTML2PDF_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs when the progress bar is active;
    // the bar already shows which file is being converted.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let progress_cb: Option<ProgressCallback> = if show_progress {
        Some(CliProgressCallback::new_dynamic() as ProgressCallback)
    } else {
        None
    };

    let mut builder = ConversionConfig::builder().print_background(!cli.no_background);
    if let Some(ref path) = cli.browser {
        builder = builder.browser_path(path);
    }
    if let Some(cb) = progress_cb {
        builder = builder.progress_callback(cb);
    }
    let config = builder.build();

    // ── Run conversion ───────────────────────────────────────────────────
    let output = convert_dir(&cli.dir, &config)
        .await
        .context("Conversion failed")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
        println!("{json}");
    } else if !cli.quiet && !show_progress {
        // Only print the inline summary when the progress callback didn't.
        eprintln!(
            "Converted {}/{} file(s) in {}ms",
            output.stats.converted_files, output.stats.total_files, output.stats.total_duration_ms
        );
    } else if !cli.quiet {
        eprintln!(
            "   {} of PDF output  —  {}ms total ({}ms rendering)",
            dim(&format!("{} bytes", output.stats.pdf_bytes)),
            output.stats.total_duration_ms,
            output.stats.render_duration_ms,
        );
    }

    Ok(())
}
