//! Error types for the resume-imagegen library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`ImageGenError`] — **Fatal**: the run cannot proceed at all (image
//!   directory missing, nothing to process, bad configuration). Returned as
//!   `Err(ImageGenError)` from [`crate::generate::generate`].
//!
//! * [`VariantError`] — **Non-fatal**: a single source or output failed
//!   (corrupt file, disk full) but every other file is still processed.
//!   Stored inside [`crate::output::VariantResult`] so callers can inspect
//!   partial success after the batch completes.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the resume-imagegen library.
///
/// Per-file failures use [`VariantError`] and are stored in
/// [`crate::output::VariantResult`] rather than propagated here.
#[derive(Debug, Error)]
pub enum ImageGenError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The image directory does not exist.
    #[error("No image directory: '{path}'\nRun from the repository root or pass --dir.")]
    DirectoryNotFound { path: PathBuf },

    /// The image directory exists but could not be listed.
    #[error("Failed to read image directory '{path}': {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory contains no file matching the source patterns.
    #[error("No source images found in '{dir}' ({patterns})")]
    NoCandidates { dir: PathBuf, patterns: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A non-fatal error for a single source image or output file.
#[derive(Debug, Clone, PartialEq, Error, serde::Serialize, serde::Deserialize)]
pub enum VariantError {
    /// The source could not be opened or decoded.
    #[error("Unable to open {path:?}: {detail}")]
    OpenFailed { path: PathBuf, detail: String },

    /// The resized image could not be encoded as WebP.
    #[error("Failed to encode {path:?}: {detail}")]
    EncodeFailed { path: PathBuf, detail: String },

    /// The encoded bytes could not be written to disk.
    #[error("Failed to write {path:?}: {detail}")]
    WriteFailed { path: PathBuf, detail: String },
}

impl VariantError {
    /// Path of the file the failure refers to (source for open errors,
    /// output for encode and write errors).
    pub fn path(&self) -> &PathBuf {
        match self {
            VariantError::OpenFailed { path, .. }
            | VariantError::EncodeFailed { path, .. }
            | VariantError::WriteFailed { path, .. } => path,
        }
    }
}
