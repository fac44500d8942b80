//! High-level library API: the [`ImageTransformer`] that runs the whole
//! decode -> transform -> encode flow, plus a defaults-only convenience
//! wrapper. Prefer these entrypoints over the `core::processing` stages when
//! embedding grainpress.
use std::path::Path;

use rand::Rng;
use tracing::info;

use crate::core::params::PipelineParams;
use crate::core::processing::pipeline::process_raster;
use crate::error::Result;
use crate::io::{load_image, write_rgb_jpeg};
use crate::types::{Dimensions, RasterImage};

/// Loads an image, runs the five stages in order and writes a JPEG.
#[derive(Debug, Clone, Default)]
pub struct ImageTransformer {
    params: PipelineParams,
}

impl ImageTransformer {
    /// Build a transformer, rejecting invalid parameters up front.
    pub fn new(params: PipelineParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &PipelineParams {
        &self.params
    }

    /// Transform an in-memory raster using the thread-local RNG.
    pub fn transform(&self, image: RasterImage) -> Result<RasterImage> {
        self.transform_with_rng(image, &mut rand::rng())
    }

    /// Transform an in-memory raster drawing noise from `rng`. A seeded RNG
    /// makes the output reproducible.
    pub fn transform_with_rng<R: Rng + ?Sized>(
        &self,
        image: RasterImage,
        rng: &mut R,
    ) -> Result<RasterImage> {
        process_raster(image, &self.params, rng)
    }

    /// Decode `input`, transform it and write the JPEG to `output`.
    /// Returns the dimensions of the written image.
    pub fn process_file(&self, input: &Path, output: &Path) -> Result<Dimensions> {
        let image = load_image(input)?;
        let finished = self.transform(image)?;
        write_rgb_jpeg(output, &finished, self.params.jpeg_quality)?;

        let dims = Dimensions::of(&finished);
        info!("Processed {:?} -> {:?} ({})", input, output, dims);
        Ok(dims)
    }
}

/// Run the default pipeline from `input` to `output`.
pub fn process_file_to_path(input: &Path, output: &Path) -> Result<Dimensions> {
    ImageTransformer::default().process_file(input, output)
}
