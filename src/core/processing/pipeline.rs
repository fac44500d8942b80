use rand::Rng;
use tracing::{debug, info};

use crate::core::params::PipelineParams;
use crate::core::processing::noise::add_gaussian_noise;
use crate::core::processing::resize::finalize;
use crate::core::processing::sharpen::unsharp_mask;
use crate::core::processing::upscale::upscale;
use crate::error::Result;
use crate::types::{Dimensions, RasterImage};

/// Run upscale -> sharpen -> noise -> finalize on one decoded image.
///
/// Each stage consumes the previous buffer; only the upscaled copy is kept
/// alive alongside its blurred twin while sharpening.
pub fn process_raster<R: Rng + ?Sized>(
    image: RasterImage,
    params: &PipelineParams,
    rng: &mut R,
) -> Result<RasterImage> {
    let original = Dimensions::of(&image);
    info!("Pipeline start: {}", original);

    let upscaled = upscale(image, params.scale_factor)?;

    let sharpened = unsharp_mask(&upscaled, params.blur_sigma, params.sharpen_amount)?;
    drop(upscaled);

    let noisy = add_gaussian_noise(sharpened, params.noise_std_dev, rng)?;
    debug!("Working size before finalize: {}", Dimensions::of(&noisy));

    let finished = finalize(noisy, original, params.max_dimension)?;
    info!("Pipeline done: {} -> {}", original, Dimensions::of(&finished));
    Ok(finished)
}
