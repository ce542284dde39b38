//! Result types returned by a generator run.

use crate::error::VariantError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of producing one output file from one source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantResult {
    /// Primary source the variant was derived from.
    pub source: PathBuf,
    /// Output path (written, or attempted).
    pub output: PathBuf,
    /// Requested width; `None` when the source size is kept.
    pub target_width: Option<u32>,
    /// Actual output width in pixels (0 on failure).
    pub width: u32,
    /// Actual output height in pixels (0 on failure).
    pub height: u32,
    /// Encoded size in bytes (0 on failure).
    pub bytes: usize,
    /// Set when this variant failed.
    pub error: Option<VariantError>,
}

impl VariantResult {
    pub(crate) fn failed(
        source: PathBuf,
        output: PathBuf,
        target_width: Option<u32>,
        error: VariantError,
    ) -> Self {
        Self {
            source,
            output,
            target_width,
            width: 0,
            height: 0,
            bytes: 0,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate counters for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Files matching the source patterns.
    pub candidates: usize,
    /// Distinct primaries after base-name resolution.
    pub sources: usize,
    /// Primaries that were size-suffixed fallbacks.
    pub fallback_sources: usize,
    /// Outputs written.
    pub written: usize,
    /// Outputs that failed (open, encode or write).
    pub failed: usize,
    /// Sum of encoded output sizes.
    pub total_bytes: u64,
    pub duration_ms: u64,
}

/// Everything a run produced, in processing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub image_dir: PathBuf,
    pub variants: Vec<VariantResult>,
    pub stats: RunStats,
}

impl RunReport {
    /// Variants that failed.
    pub fn failures(&self) -> impl Iterator<Item = &VariantResult> {
        self.variants.iter().filter(|v| !v.is_ok())
    }
}
