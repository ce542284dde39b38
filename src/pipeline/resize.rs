//! Aspect-preserving downscale with optional blur.
//!
//! Sources narrower than (or as wide as) the target are kept at their own
//! size: upscaling would only add bytes without adding detail. Wider sources
//! are scaled to exactly the target width with Lanczos3 resampling.

use image::imageops::FilterType;
use image::DynamicImage;
use tracing::debug;

/// Output dimensions for a source of `width × height` at `target_width`.
///
/// Height is `floor(height * target_width / width)`, never below 1.
pub fn target_dimensions(width: u32, height: u32, target_width: u32) -> (u32, u32) {
    if width <= target_width {
        return (width, height);
    }
    let scaled = u64::from(height) * u64::from(target_width) / u64::from(width);
    (target_width, scaled.max(1) as u32)
}

/// Resize `img` to `target_width` (or keep it), then blur if `blur_sigma` is set.
///
/// `target_width = None` keeps the original size. The blur runs on the
/// resized image so its radius is relative to the output pixels.
pub fn prepare_variant(
    img: &DynamicImage,
    target_width: Option<u32>,
    blur_sigma: Option<f32>,
) -> DynamicImage {
    let (w, h) = (img.width(), img.height());
    let (tw, th) = match target_width {
        Some(target) => target_dimensions(w, h, target),
        None => (w, h),
    };

    let resized = if (tw, th) == (w, h) {
        img.clone()
    } else {
        debug!("Resizing {}x{} → {}x{}", w, h, tw, th);
        img.resize_exact(tw, th, FilterType::Lanczos3)
    };

    match blur_sigma {
        Some(sigma) if sigma > 0.0 => resized.blur(sigma),
        _ => resized,
    }
}
