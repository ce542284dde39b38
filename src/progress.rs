//! Progress-callback trait for per-file generation events.
//!
//! Inject an [`Arc<dyn GenerationProgressCallback>`] via
//! [`crate::config::GeneratorConfigBuilder::progress_callback`] to receive
//! events as the run processes each source image. The binaries use this to
//! print one human-readable line per written or failed output.
//!
//! # Example
//!
//! ```rust
//! use resume_imagegen::{GenerationProgressCallback, GeneratorConfig, Preset, VariantResult};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingCallback {
//!     written: AtomicUsize,
//! }
//!
//! impl GenerationProgressCallback for CountingCallback {
//!     fn on_variant_written(&self, result: &VariantResult) {
//!         self.written.fetch_add(1, Ordering::SeqCst);
//!         eprintln!("wrote {}", result.output.display());
//!     }
//! }
//!
//! let counter = Arc::new(CountingCallback { written: AtomicUsize::new(0) });
//!
//! let config = GeneratorConfig::builder(Preset::Responsive)
//!     .progress_callback(counter as Arc<dyn GenerationProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use crate::error::VariantError;
use crate::output::{RunStats, VariantResult};
use std::path::Path;
use std::sync::Arc;

/// Called by the generator as it processes each source image.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Events arrive in processing order on the calling
/// thread; `Send + Sync` only lets the callback live inside a shared config.
pub trait GenerationProgressCallback: Send + Sync {
    /// Called once after the sources have been resolved.
    fn on_run_start(&self, total_sources: usize) {
        let _ = total_sources;
    }

    /// Called before a source image is opened.
    ///
    /// `index` is 1-based.
    fn on_source_start(&self, source: &Path, index: usize, total_sources: usize) {
        let _ = (source, index, total_sources);
    }

    /// Called after an output file has been written.
    fn on_variant_written(&self, result: &VariantResult) {
        let _ = result;
    }

    /// Called when a source cannot be opened or an output cannot be produced.
    fn on_variant_error(&self, error: &VariantError) {
        let _ = error;
    }

    /// Called once after every source has been attempted.
    fn on_run_complete(&self, stats: &RunStats) {
        let _ = stats;
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl GenerationProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::GeneratorConfig`].
pub type ProgressCallback = Arc<dyn GenerationProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct TrackingCallback {
        sources: AtomicUsize,
        written: AtomicUsize,
        errors: AtomicUsize,
        total: AtomicUsize,
    }

    impl GenerationProgressCallback for TrackingCallback {
        fn on_run_start(&self, total_sources: usize) {
            self.total.store(total_sources, Ordering::SeqCst);
        }

        fn on_source_start(&self, _source: &Path, _index: usize, _total: usize) {
            self.sources.fetch_add(1, Ordering::SeqCst);
        }

        fn on_variant_written(&self, _result: &VariantResult) {
            self.written.fetch_add(1, Ordering::SeqCst);
        }

        fn on_variant_error(&self, _error: &VariantError) {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn written(width: u32) -> VariantResult {
        VariantResult {
            source: PathBuf::from("page-01.png"),
            output: PathBuf::from(format!("page-01-{width}.webp")),
            target_width: Some(width),
            width,
            height: width,
            bytes: 10,
            error: None,
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_run_start(2);
        cb.on_source_start(Path::new("page-01.png"), 1, 2);
        cb.on_variant_written(&written(480));
        cb.on_variant_error(&VariantError::OpenFailed {
            path: PathBuf::from("page-02.png"),
            detail: "truncated".into(),
        });
        cb.on_run_complete(&RunStats::default());
    }

    #[test]
    fn tracking_callback_receives_events() {
        let tracker = TrackingCallback::default();
        tracker.on_run_start(2);
        tracker.on_source_start(Path::new("page-01.png"), 1, 2);
        tracker.on_variant_written(&written(480));
        tracker.on_variant_written(&written(800));
        tracker.on_source_start(Path::new("page-02.png"), 2, 2);
        tracker.on_variant_error(&VariantError::OpenFailed {
            path: PathBuf::from("page-02.png"),
            detail: "truncated".into(),
        });

        assert_eq!(tracker.total.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.sources.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.written.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.errors.load(Ordering::SeqCst), 1);
    }
}
