use imageproc::filter::gaussian_blur_f32;
use tracing::info;

use crate::error::{Error, Result};
use crate::types::{Dimensions, RasterImage};

/// Saturating per-channel blend: `clamp(round(a * wa + b * wb), 0, 255)`.
///
/// Both images must have the same dimensions.
pub fn add_weighted(a: &RasterImage, wa: f32, b: &RasterImage, wb: f32) -> Result<RasterImage> {
    let (left, right) = (Dimensions::of(a), Dimensions::of(b));
    if left != right {
        return Err(Error::DimensionMismatch { left, right });
    }

    let data = a
        .as_raw()
        .iter()
        .zip(b.as_raw())
        .map(|(&pa, &pb)| (pa as f32 * wa + pb as f32 * wb).round().clamp(0.0, 255.0) as u8)
        .collect();
    RasterImage::from_raw(left.width, left.height, data)
        .ok_or(Error::DimensionMismatch { left, right })
}

/// Unsharp mask: `(1 + amount) * image - amount * blur(image, sigma)`.
///
/// `sigma` must be positive; the blur kernel size follows from it.
pub fn unsharp_mask(image: &RasterImage, sigma: f32, amount: f32) -> Result<RasterImage> {
    info!("Sharpening: sigma={} amount={}", sigma, amount);
    let blurred = gaussian_blur_f32(image, sigma);
    add_weighted(image, 1.0 + amount, &blurred, -amount)
}
