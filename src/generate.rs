//! Run driver: scan, resolve, and produce every variant of every source.
//!
//! Fatal problems (missing directory, nothing to process) are returned as
//! [`ImageGenError`]. Anything that goes wrong with a single file is recorded
//! in its [`VariantResult`], logged, reported to the progress callback, and
//! the batch moves on.

use crate::config::{GeneratorConfig, Sizing};
use crate::error::{ImageGenError, VariantError};
use crate::output::{RunReport, RunStats, VariantResult};
use crate::pipeline::resolve::{self, SourceImage};
use crate::pipeline::{encode, resize, scan, write};
use image::{DynamicImage, ImageReader};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Generate all variants described by `config`.
///
/// Sources are processed one at a time in sorted order. Each source is
/// decoded once and every configured width is derived from that decode.
///
/// # Returns
/// `Ok(RunReport)` once every source has been attempted, even if some
/// outputs failed (check `report.stats.failed`).
///
/// # Errors
/// * [`ImageGenError::DirectoryNotFound`] / [`ImageGenError::DirectoryUnreadable`]
/// * [`ImageGenError::NoCandidates`] when no file matches the patterns
pub fn generate(config: &GeneratorConfig) -> Result<RunReport, ImageGenError> {
    let start = Instant::now();
    let dir = &config.image_dir;
    info!("Scanning {} for {}", dir.display(), config.patterns());

    // ── Step 1: Find candidates ──────────────────────────────────────────
    let candidates = scan::scan_candidates(dir, &config.source_prefix, &config.source_formats)?;
    if candidates.is_empty() {
        return Err(ImageGenError::NoCandidates {
            dir: dir.clone(),
            patterns: config.patterns(),
        });
    }

    // ── Step 2: One primary per page ─────────────────────────────────────
    let sources = if config.resolve_base_names {
        resolve::resolve_primaries(&candidates, &config.size_suffixes)
    } else {
        resolve::each_as_primary(&candidates)
    };
    info!(
        "{} candidates → {} sources",
        candidates.len(),
        sources.len()
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_run_start(sources.len());
    }

    // ── Step 3: Produce variants ─────────────────────────────────────────
    let mut variants = Vec::with_capacity(sources.len() * config.sizing.targets().len());
    for (i, source) in sources.iter().enumerate() {
        if let Some(ref cb) = config.progress_callback {
            cb.on_source_start(&source.path, i + 1, sources.len());
        }
        variants.extend(process_source(source, config));
    }

    // ── Step 4: Stats ────────────────────────────────────────────────────
    let written = variants.iter().filter(|v| v.is_ok()).count();
    let stats = RunStats {
        candidates: candidates.len(),
        sources: sources.len(),
        fallback_sources: sources.iter().filter(|s| s.fallback).count(),
        written,
        failed: variants.len() - written,
        total_bytes: variants.iter().map(|v| v.bytes as u64).sum(),
        duration_ms: start.elapsed().as_millis() as u64,
    };

    info!(
        "Done: {} written, {} failed, {}ms",
        stats.written, stats.failed, stats.duration_ms
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_run_complete(&stats);
    }

    Ok(RunReport {
        image_dir: dir.clone(),
        variants,
        stats,
    })
}

/// Produce every configured output for one source.
///
/// Never fails as a whole: if the source cannot be opened, each planned
/// output gets a failed [`VariantResult`] carrying the open error.
pub fn process_source(source: &SourceImage, config: &GeneratorConfig) -> Vec<VariantResult> {
    let targets = config.sizing.targets();

    let img = match open_image(&source.path) {
        Ok(img) => img,
        Err(e) => {
            warn!("{}", e);
            if let Some(ref cb) = config.progress_callback {
                cb.on_variant_error(&e);
            }
            return targets
                .into_iter()
                .map(|target| {
                    VariantResult::failed(
                        source.path.clone(),
                        output_path(&config.image_dir, &source.base_name, &config.sizing, target),
                        target,
                        e.clone(),
                    )
                })
                .collect();
        }
    };
    debug!(
        "Opened {} ({}x{})",
        source.path.display(),
        img.width(),
        img.height()
    );

    targets
        .into_iter()
        .map(|target| {
            let result = produce_variant(&img, source, target, config);
            if let Some(ref cb) = config.progress_callback {
                match &result.error {
                    None => cb.on_variant_written(&result),
                    Some(e) => cb.on_variant_error(e),
                }
            }
            result
        })
        .collect()
}

/// Resize, blur, encode and write one output.
fn produce_variant(
    img: &DynamicImage,
    source: &SourceImage,
    target: Option<u32>,
    config: &GeneratorConfig,
) -> VariantResult {
    let output = output_path(&config.image_dir, &source.base_name, &config.sizing, target);
    let variant = resize::prepare_variant(img, target, config.blur_sigma);

    let written = encode::encode_webp(&variant, config.quality, config.method, &output)
        .and_then(|bytes| write::write_output(&output, &bytes).map(|()| bytes.len()));

    match written {
        Ok(bytes) => {
            info!(
                "Wrote {} ({}x{}, {} bytes)",
                output.display(),
                variant.width(),
                variant.height(),
                bytes
            );
            VariantResult {
                source: source.path.clone(),
                output,
                target_width: target,
                width: variant.width(),
                height: variant.height(),
                bytes,
                error: None,
            }
        }
        Err(e) => {
            warn!("{}", e);
            VariantResult::failed(source.path.clone(), output, target, e)
        }
    }
}

/// Decode an image, sniffing the format from its content.
pub fn open_image(path: &Path) -> Result<DynamicImage, VariantError> {
    let open_failed = |detail: String| VariantError::OpenFailed {
        path: path.to_path_buf(),
        detail,
    };

    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| open_failed(e.to_string()))?
        .decode()
        .map_err(|e| open_failed(e.to_string()))
}

/// Output path for `base` at `target` width inside `dir`.
///
/// `<base>-<width>.webp` for width-based sizing, `<base>.webp` otherwise.
pub fn output_path(dir: &Path, base: &str, sizing: &Sizing, target: Option<u32>) -> PathBuf {
    match (sizing, target) {
        (Sizing::Widths(_), Some(width)) => dir.join(format!("{base}-{width}.webp")),
        _ => dir.join(format!("{base}.webp")),
    }
}
