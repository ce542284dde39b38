//! WebP encoding: `DynamicImage` → lossy WebP bytes.
//!
//! The `image` crate only writes lossless WebP, so encoding goes through
//! libwebp via the `webp` crate, which exposes quality and method.

use crate::error::VariantError;
use image::DynamicImage;
use std::path::Path;
use tracing::debug;
use webp::{Encoder, WebPConfig};

/// Largest width or height libwebp accepts.
pub const WEBP_MAX_DIMENSION: u32 = 16383;

/// Encode `img` as lossy WebP.
///
/// `output` is only used to label errors. Images without an alpha channel
/// are encoded from RGB so no alpha plane is stored.
pub fn encode_webp(
    img: &DynamicImage,
    quality: f32,
    method: u8,
    output: &Path,
) -> Result<Vec<u8>, VariantError> {
    let encode_failed = |detail: String| VariantError::EncodeFailed {
        path: output.to_path_buf(),
        detail,
    };

    let (width, height) = (img.width(), img.height());
    if width > WEBP_MAX_DIMENSION || height > WEBP_MAX_DIMENSION {
        return Err(encode_failed(format!(
            "{width}x{height} exceeds the WebP limit of {WEBP_MAX_DIMENSION}px"
        )));
    }

    let mut config =
        WebPConfig::new().map_err(|_| encode_failed("libwebp config init failed".into()))?;
    config.lossless = 0;
    config.quality = quality;
    config.method = i32::from(method);

    let encoded = if img.color().has_alpha() {
        let rgba = img.to_rgba8();
        Encoder::from_rgba(rgba.as_raw(), width, height).encode_advanced(&config)
    } else {
        let rgb = img.to_rgb8();
        Encoder::from_rgb(rgb.as_raw(), width, height).encode_advanced(&config)
    };
    let memory = encoded.map_err(|e| encode_failed(format!("{e:?}")))?;

    debug!("Encoded {}x{} → {} bytes WebP", width, height, memory.len());
    Ok(memory.to_vec())
}
