//! Configuration types for variant generation.
//!
//! All run behaviour is controlled through [`GeneratorConfig`]. The three
//! binaries differ only in the [`Preset`] they start from; everything else
//! (directory, widths, quality, blur) is a field on the same struct, so a
//! library caller can reproduce any binary or mix its own run.
//!
//! # Example
//! ```rust
//! use resume_imagegen::{GeneratorConfig, Preset};
//!
//! let config = GeneratorConfig::builder(Preset::Placeholder)
//!     .image_dir("site/resume-images")
//!     .build()
//!     .unwrap();
//! assert_eq!(config.quality, 50.0);
//! ```

use crate::error::ImageGenError;
use crate::progress::ProgressCallback;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Image directory used when none is given, relative to the repository root.
pub const DEFAULT_IMAGE_DIR: &str = "resume-images";

/// File-name prefix shared by every resume page image.
pub const PAGE_PREFIX: &str = "page-";

/// Widths produced by the responsive preset, in output order.
pub const RESPONSIVE_WIDTHS: [u32; 3] = [480, 800, 1200];

/// Width of the blurred placeholder.
pub const PLACEHOLDER_WIDTH: u32 = 40;

/// Size markers that may trail a file stem (`page-01-480`). Stripping them
/// yields the base name, so earlier outputs never count as new sources.
pub const SIZE_SUFFIXES: [u32; 4] = [480, 800, 1200, 40];

/// libwebp `method` value for the slowest, smallest encode.
pub const MAX_EFFORT_METHOD: u8 = 6;

/// Gaussian blur sigma applied to placeholders.
pub const PLACEHOLDER_BLUR_SIGMA: f32 = 1.0;

/// Named bundles of widths, quality, blur and naming; one per binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    /// `page-*` → `<base>-480/800/1200.webp`, quality 85.
    Responsive,
    /// `page-*` → `<base>-40.webp`, quality 50, blurred.
    Placeholder,
    /// `*.png` → `<stem>.webp` at original size, quality 85.
    FullSize,
}

/// Source codecs accepted by the scanner.
///
/// Variant order is preference order: when both `<base>.png` and
/// `<base>.webp` exist the PNG is the primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SourceFormat {
    Png,
    Webp,
}

impl SourceFormat {
    /// Lower-case file extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            SourceFormat::Png => "png",
            SourceFormat::Webp => "webp",
        }
    }

    /// Detect the format from a path's extension.
    ///
    /// Only the lowercase spellings match, the same as the `page-*.png` and
    /// `page-*.webp` globs on a case-sensitive filesystem.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "png" => Some(SourceFormat::Png),
            "webp" => Some(SourceFormat::Webp),
            _ => None,
        }
    }
}

/// Which outputs a source produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sizing {
    /// One output per width, named `<base>-<width>.webp`. Never upscales.
    Widths(Vec<u32>),
    /// A single output at the source's own size, named `<base>.webp`.
    Original,
}

impl Sizing {
    /// Target widths in output order; `[None]` for [`Sizing::Original`].
    pub fn targets(&self) -> Vec<Option<u32>> {
        match self {
            Sizing::Widths(widths) => widths.iter().copied().map(Some).collect(),
            Sizing::Original => vec![None],
        }
    }
}

/// Configuration for one generator run.
///
/// Built via [`GeneratorConfig::builder()`] or [`GeneratorConfig::preset()`].
#[derive(Clone)]
pub struct GeneratorConfig {
    /// Directory scanned for sources; outputs are written next to them.
    pub image_dir: PathBuf,

    /// Required file-name prefix for sources. Empty matches every file.
    pub source_prefix: String,

    /// Accepted source extensions, in preference order.
    pub source_formats: Vec<SourceFormat>,

    /// Widths (or original size) to produce per source.
    pub sizing: Sizing,

    /// Size markers stripped from stems when deriving base names.
    pub size_suffixes: Vec<u32>,

    /// Collapse candidates sharing a base name into one primary.
    ///
    /// Off for [`Preset::FullSize`], where every PNG is its own source.
    pub resolve_base_names: bool,

    /// Lossy WebP quality, 0–100.
    pub quality: f32,

    /// libwebp compression method, 0 (fast) – 6 (smallest).
    pub method: u8,

    /// Gaussian blur sigma applied after resizing, if any.
    pub blur_sigma: Option<f32>,

    /// Receives per-file events.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::preset(Preset::Responsive)
    }
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("image_dir", &self.image_dir)
            .field("source_prefix", &self.source_prefix)
            .field("source_formats", &self.source_formats)
            .field("sizing", &self.sizing)
            .field("size_suffixes", &self.size_suffixes)
            .field("resolve_base_names", &self.resolve_base_names)
            .field("quality", &self.quality)
            .field("method", &self.method)
            .field("blur_sigma", &self.blur_sigma)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn GenerationProgressCallback>"),
            )
            .finish()
    }
}

impl GeneratorConfig {
    /// The fixed configuration of a preset, reading from [`DEFAULT_IMAGE_DIR`].
    pub fn preset(preset: Preset) -> Self {
        let base = Self {
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
            source_prefix: PAGE_PREFIX.to_string(),
            source_formats: vec![SourceFormat::Png, SourceFormat::Webp],
            sizing: Sizing::Widths(RESPONSIVE_WIDTHS.to_vec()),
            size_suffixes: SIZE_SUFFIXES.to_vec(),
            resolve_base_names: true,
            quality: 85.0,
            method: MAX_EFFORT_METHOD,
            blur_sigma: None,
            progress_callback: None,
        };

        match preset {
            Preset::Responsive => base,
            Preset::Placeholder => Self {
                sizing: Sizing::Widths(vec![PLACEHOLDER_WIDTH]),
                quality: 50.0,
                blur_sigma: Some(PLACEHOLDER_BLUR_SIGMA),
                ..base
            },
            Preset::FullSize => Self {
                source_prefix: String::new(),
                source_formats: vec![SourceFormat::Png],
                sizing: Sizing::Original,
                resolve_base_names: false,
                ..base
            },
        }
    }

    /// Create a builder seeded with a preset.
    pub fn builder(preset: Preset) -> GeneratorConfigBuilder {
        GeneratorConfigBuilder {
            config: Self::preset(preset),
        }
    }

    /// Glob-style description of the source patterns, e.g. `page-*.png, page-*.webp`.
    pub fn patterns(&self) -> String {
        self.source_formats
            .iter()
            .map(|f| format!("{}*.{}", self.source_prefix, f.extension()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    pub fn image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.image_dir = dir.into();
        self
    }

    pub fn source_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.source_prefix = prefix.into();
        self
    }

    pub fn source_formats(mut self, formats: Vec<SourceFormat>) -> Self {
        self.config.source_formats = formats;
        self
    }

    pub fn widths(mut self, widths: Vec<u32>) -> Self {
        self.config.sizing = Sizing::Widths(widths);
        self
    }

    pub fn original_size(mut self) -> Self {
        self.config.sizing = Sizing::Original;
        self
    }

    pub fn size_suffixes(mut self, suffixes: Vec<u32>) -> Self {
        self.config.size_suffixes = suffixes;
        self
    }

    pub fn resolve_base_names(mut self, v: bool) -> Self {
        self.config.resolve_base_names = v;
        self
    }

    pub fn quality(mut self, q: f32) -> Self {
        self.config.quality = q;
        self
    }

    pub fn method(mut self, m: u8) -> Self {
        self.config.method = m;
        self
    }

    pub fn blur_sigma(mut self, sigma: Option<f32>) -> Self {
        self.config.blur_sigma = sigma;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<GeneratorConfig, ImageGenError> {
        let c = &self.config;
        if let Sizing::Widths(widths) = &c.sizing {
            if widths.is_empty() {
                return Err(ImageGenError::InvalidConfig(
                    "At least one target width is required".into(),
                ));
            }
            if widths.contains(&0) {
                return Err(ImageGenError::InvalidConfig(
                    "Target widths must be ≥ 1".into(),
                ));
            }
        }
        if c.source_formats.is_empty() {
            return Err(ImageGenError::InvalidConfig(
                "At least one source format is required".into(),
            ));
        }
        if !(0.0..=100.0).contains(&c.quality) {
            return Err(ImageGenError::InvalidConfig(format!(
                "Quality must be 0–100, got {}",
                c.quality
            )));
        }
        if c.method > MAX_EFFORT_METHOD {
            return Err(ImageGenError::InvalidConfig(format!(
                "Method must be 0–{MAX_EFFORT_METHOD}, got {}",
                c.method
            )));
        }
        if let Some(sigma) = c.blur_sigma {
            if !(sigma >= 0.0 && sigma.is_finite()) {
                return Err(ImageGenError::InvalidConfig(format!(
                    "Blur sigma must be a non-negative number, got {sigma}"
                )));
            }
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn responsive_preset() {
        let c = GeneratorConfig::preset(Preset::Responsive);
        assert_eq!(c.sizing, Sizing::Widths(vec![480, 800, 1200]));
        assert_eq!(c.quality, 85.0);
        assert_eq!(c.method, 6);
        assert!(c.blur_sigma.is_none());
        assert!(c.resolve_base_names);
        assert_eq!(c.image_dir, PathBuf::from("resume-images"));
    }

    #[test]
    fn placeholder_preset() {
        let c = GeneratorConfig::preset(Preset::Placeholder);
        assert_eq!(c.sizing, Sizing::Widths(vec![40]));
        assert_eq!(c.quality, 50.0);
        assert_eq!(c.blur_sigma, Some(1.0));
        assert_eq!(c.patterns(), "page-*.png, page-*.webp");
    }

    #[test]
    fn full_size_preset() {
        let c = GeneratorConfig::preset(Preset::FullSize);
        assert_eq!(c.sizing, Sizing::Original);
        assert_eq!(c.source_formats, vec![SourceFormat::Png]);
        assert!(!c.resolve_base_names);
        assert_eq!(c.patterns(), "*.png");
    }

    #[test]
    fn builder_rejects_bad_values() {
        assert!(GeneratorConfig::builder(Preset::Responsive)
            .widths(vec![])
            .build()
            .is_err());
        assert!(GeneratorConfig::builder(Preset::Responsive)
            .widths(vec![480, 0])
            .build()
            .is_err());
        assert!(GeneratorConfig::builder(Preset::Responsive)
            .quality(101.0)
            .build()
            .is_err());
        assert!(GeneratorConfig::builder(Preset::Responsive)
            .method(7)
            .build()
            .is_err());
        assert!(GeneratorConfig::builder(Preset::Placeholder)
            .blur_sigma(Some(-1.0))
            .build()
            .is_err());
        assert!(GeneratorConfig::builder(Preset::Responsive)
            .source_formats(vec![])
            .build()
            .is_err());
    }

    #[test]
    fn builder_overrides_preset() {
        let c = GeneratorConfig::builder(Preset::Responsive)
            .image_dir("/tmp/imgs")
            .widths(vec![320])
            .quality(70.0)
            .build()
            .unwrap();
        assert_eq!(c.image_dir, PathBuf::from("/tmp/imgs"));
        assert_eq!(c.sizing.targets(), vec![Some(320)]);
        assert_eq!(c.quality, 70.0);
    }

    #[test]
    fn source_format_from_path() {
        assert_eq!(
            SourceFormat::from_path(Path::new("page-01.png")),
            Some(SourceFormat::Png)
        );
        assert_eq!(SourceFormat::from_path(Path::new("page-01.PNG")), None);
        assert_eq!(SourceFormat::from_path(Path::new("page-01.WebP")), None);
        assert_eq!(
            SourceFormat::from_path(Path::new("page-01.webp")),
            Some(SourceFormat::Webp)
        );
        assert_eq!(SourceFormat::from_path(Path::new("page-01.jpg")), None);
        assert_eq!(SourceFormat::from_path(Path::new("page-01")), None);
        assert!(SourceFormat::Png < SourceFormat::Webp);
    }

    #[test]
    fn original_sizing_targets() {
        assert_eq!(Sizing::Original.targets(), vec![None]);
    }
}
