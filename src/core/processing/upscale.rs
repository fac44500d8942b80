use std::f64::consts::PI;

use fast_image_resize::{
    Filter, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image,
};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::{Dimensions, RasterImage, ScaleFactor};

/// Half-width of the Lanczos window.
const LANCZOS_A: f64 = 4.0;

fn sinc(x: f64) -> f64 {
    if x.abs() < 1e-12 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

fn lanczos4(x: f64) -> f64 {
    if x.abs() >= LANCZOS_A {
        0.0
    } else {
        sinc(x) * sinc(x / LANCZOS_A)
    }
}

/// Resample with a Lanczos kernel of window size 4.
pub fn resize_lanczos4(image: RasterImage, target: Dimensions) -> Result<RasterImage> {
    let source = Dimensions::of(&image);
    if source == target {
        return Ok(image);
    }

    let filter = Filter::new("Lanczos4", lanczos4, LANCZOS_A).map_err(Error::resize)?;
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Custom(filter)));
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

/// Enlarge by `factor` on both axes.
pub fn upscale(image: RasterImage, factor: ScaleFactor) -> Result<RasterImage> {
    let source = Dimensions::of(&image);
    let target = source.scaled(factor);
    info!("Upscaling {} by {} to {}", source, factor, target);
    resize_lanczos4(image, target)
}
