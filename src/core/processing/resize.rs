use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::types::{Dimensions, RasterImage};

/// Target size of the finished image, decided from the *original* input size.
///
/// Inside the bound the original size is restored exactly; otherwise the long
/// side becomes `max_dimension` and the short side follows proportionally.
pub fn final_dimensions(original: Dimensions, max_dimension: u32) -> Dimensions {
    let target = original.fit_within(max_dimension);
    if target != original {
        warn!(
            "Original size {} exceeds {}px on the long side; output limited to {}",
            original, max_dimension, target
        );
    }
    target
}

/// Area-averaging resize (box convolution), suited to shrinking.
pub fn resize_area(image: RasterImage, target: Dimensions) -> Result<RasterImage> {
    let source = Dimensions::of(&image);
    if source == target {
        return Ok(image);
    }

    let resize_options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Box));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        source.width,
        source.height,
        image.into_raw(),
        PixelType::U8x3,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(target.width, target.height, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    RasterImage::from_raw(target.width, target.height, dst_image.into_vec())
        .ok_or_else(|| Error::Resize(format!("resized buffer does not match {}", target)))
}

/// Bring the processed image back to its final size.
pub fn finalize(image: RasterImage, original: Dimensions, max_dimension: u32) -> Result<RasterImage> {
    let target = final_dimensions(original, max_dimension);
    info!("Resizing {} -> {} (area)", Dimensions::of(&image), target);
    resize_area(image, target)
}
