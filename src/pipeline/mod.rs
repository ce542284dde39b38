//! Pipeline stages for variant generation.
//!
//! Each submodule implements exactly one step, so the pure ones (resolve,
//! resize arithmetic) can be tested without touching the filesystem.
//!
//! ## Data Flow
//!
//! ```text
//! scan ──▶ resolve ──▶ resize ──▶ encode ──▶ write
//! (dir)    (dedupe)    (+blur)    (WebP)     (atomic)
//! ```
//!
//! 1. [`scan`]    — list files in the image directory matching the patterns
//! 2. [`resolve`] — derive base names and pick one primary per base
//! 3. [`resize`]  — scale to a target width without upscaling, optional blur
//! 4. [`encode`]  — lossy WebP with fixed quality and method
//! 5. [`write`]   — temp file + rename next to the sources

pub mod encode;
pub mod resize;
pub mod resolve;
pub mod scan;
pub mod write;
