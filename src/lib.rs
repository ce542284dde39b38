//! # resume-imagegen
//!
//! Generate responsive WebP variants and blurred placeholders for resume page
//! images, for progressive loading on the web.
//!
//! ## Pipeline Overview
//!
//! ```text
//! resume-images/
//!  │
//!  ├─ 1. Scan     page-*.png, page-*.webp
//!  ├─ 2. Resolve  strip -480/-800/-1200/-40, one primary per page (PNG first)
//!  ├─ 3. Resize   Lanczos3 to each target width, never upscale
//!  ├─ 4. Blur     placeholders only (σ = 1)
//!  ├─ 5. Encode   lossy WebP, quality 85 / 50, method 6
//!  └─ 6. Write    <base>-<width>.webp next to the sources
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use resume_imagegen::{generate, GeneratorConfig, Preset};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GeneratorConfig::preset(Preset::Responsive);
//!     let report = generate(&config)?;
//!     eprintln!(
//!         "{} written, {} failed",
//!         report.stats.written, report.stats.failed
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Binaries
//!
//! | Binary                  | Output                       | Quality |
//! |-------------------------|------------------------------|---------|
//! | `generate-responsive`   | `<base>-480/800/1200.webp`   | 85      |
//! | `generate-placeholders` | `<base>-40.webp`, blurred    | 50      |
//! | `png-to-webp`           | `<stem>.webp`, original size | 85      |
//!
//! All three are enabled by the default `cli` feature:
//! ```toml
//! resume-imagegen = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{GeneratorConfig, GeneratorConfigBuilder, Preset, Sizing, SourceFormat};
pub use error::{ImageGenError, VariantError};
pub use generate::{generate, process_source};
pub use output::{RunReport, RunStats, VariantResult};
pub use pipeline::resolve::{resolve_primaries, strip_size_suffix, SourceImage};
pub use progress::{GenerationProgressCallback, NoopProgressCallback, ProgressCallback};
