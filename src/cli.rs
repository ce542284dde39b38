//! Shared plumbing for the three binaries.
//!
//! Each binary is a thin shim that picks a [`Preset`] and hands its parsed
//! [`CommonArgs`] to [`run`]. Run without arguments, every binary behaves as
//! a fixed script over `resume-images/` in the working directory.

use crate::config::{GeneratorConfig, Preset, DEFAULT_IMAGE_DIR};
use crate::error::VariantError;
use crate::generate::generate;
use crate::output::{RunStats, VariantResult};
use crate::progress::{GenerationProgressCallback, ProgressCallback};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers ──────────────────────────────────────────────────────

fn paint(code: &str, s: &str, enabled: bool) -> String {
    if enabled {
        format!("\x1b[{code}m{s}\x1b[0m")
    } else {
        s.to_string()
    }
}

/// Flags shared by every binary. All are optional.
#[derive(clap::Args, Debug, Clone)]
pub struct CommonArgs {
    /// Directory holding the page images; outputs are written next to them.
    #[arg(long, env = "RESUME_IMAGES_DIR", default_value = DEFAULT_IMAGE_DIR)]
    pub dir: PathBuf,

    /// Print a JSON run report on stdout instead of progress lines.
    #[arg(long, env = "RESUME_IMAGES_JSON")]
    pub json: bool,

    /// Disable the progress bar (progress lines are still printed).
    #[arg(long, env = "RESUME_IMAGES_NO_PROGRESS")]
    pub no_progress: bool,

    /// Enable DEBUG-level tracing logs on stderr.
    #[arg(short, long, env = "RESUME_IMAGES_VERBOSE")]
    pub verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "RESUME_IMAGES_QUIET")]
    pub quiet: bool,
}

// ── CLI progress callback ────────────────────────────────────────────────────

/// Prints one line per written or failed output to stdout, above an
/// optional progress bar when stdout is a terminal.
pub struct CliProgressCallback {
    bar: Option<ProgressBar>,
    color: bool,
}

impl CliProgressCallback {
    pub fn new(with_bar: bool) -> Arc<Self> {
        let color = io::stdout().is_terminal();
        let bar = with_bar
            .then(|| ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout()))
            .filter(|bar| !bar.is_hidden());

        Arc::new(Self { bar, color })
    }

    fn line(&self, msg: String) {
        match &self.bar {
            Some(bar) => bar.println(msg),
            None => println!("{msg}"),
        }
    }
}

impl GenerationProgressCallback for CliProgressCallback {
    fn on_run_start(&self, total_sources: usize) {
        let Some(bar) = &self.bar else { return };
        let style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  [{bar:42.green/238}] {pos:>3}/{len} pages  {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ");

        bar.set_style(style);
        bar.set_length(total_sources as u64);
        bar.set_prefix("Generating");
    }

    fn on_source_start(&self, source: &Path, index: usize, _total_sources: usize) {
        if let Some(bar) = &self.bar {
            bar.set_position(index.saturating_sub(1) as u64);
            bar.set_message(
                source
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            );
        }
    }

    fn on_variant_written(&self, result: &VariantResult) {
        let size = paint(
            "2",
            &format!("{}x{}, {:.1} KB", result.width, result.height, result.bytes as f64 / 1024.0),
            self.color,
        );
        self.line(format!(
            "{} Wrote {} ({})",
            paint("32", "✓", self.color),
            result.output.display(),
            size
        ));
    }

    fn on_variant_error(&self, error: &VariantError) {
        self.line(format!(
            "{} {}",
            paint("31", "✗", self.color),
            paint("31", &error.to_string(), self.color)
        ));
    }

    fn on_run_complete(&self, _stats: &RunStats) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

/// Install the stderr tracing subscriber. `RUST_LOG` overrides the level.
pub fn init_logging(args: &CommonArgs) {
    // Progress lines already report every file; logs stay quiet unless asked.
    let filter = if args.verbose {
        "debug"
    } else if args.json {
        "warn"
    } else {
        "error"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Exit status for a failed parse: 0 for `--help`/`--version`, 1 otherwise.
pub fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

/// Parse the process arguments, exiting with [`parse_exit_code`] on failure.
///
/// `Parser::parse` would exit with clap's usage code 2 for a bad flag.
pub fn parse_args<P: clap::Parser>() -> P {
    match P::try_parse() {
        Ok(parsed) => parsed,
        Err(err) => {
            let _ = err.print();
            std::process::exit(parse_exit_code(&err));
        }
    }
}

/// Run one preset with the given flags.
///
/// Returns `Err` (exit code 1) when the directory is missing or holds no
/// candidates; per-file failures are printed and the run still succeeds.
pub fn run(preset: Preset, args: &CommonArgs) -> Result<()> {
    init_logging(args);

    let mut builder = GeneratorConfig::builder(preset).image_dir(&args.dir);
    if !args.quiet && !args.json {
        let cb = CliProgressCallback::new(!args.no_progress);
        builder = builder.progress_callback(cb as ProgressCallback);
    }
    let config = builder.build().context("Invalid configuration")?;

    let report = generate(&config).context("Nothing was generated")?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialise run report")?;
        println!("{json}");
    } else if !args.quiet {
        let color = io::stderr().is_terminal();
        let stats = &report.stats;
        eprintln!(
            "{}  {} written  {} failed  {} sources  {}ms",
            if stats.failed == 0 {
                paint("32", "✔", color)
            } else {
                paint("36", "⚠", color)
            },
            stats.written,
            stats.failed,
            stats.sources,
            stats.duration_ms,
        );
        if stats.fallback_sources > 0 {
            eprintln!(
                "   {} page(s) had no original and were re-derived from a size variant",
                stats.fallback_sources
            );
        }
    }

    Ok(())
}
