use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::ScaleFactor;

pub const DEFAULT_SCALE_FACTOR: ScaleFactor = ScaleFactor::new(NonZeroU32::new(3).unwrap());
pub const DEFAULT_BLUR_SIGMA: f32 = 2.0;
pub const DEFAULT_SHARPEN_AMOUNT: f32 = 0.1;
pub const DEFAULT_NOISE_STD_DEV: f32 = 1.5;
pub const DEFAULT_MAX_DIMENSION: u32 = 1536;
pub const DEFAULT_JPEG_QUALITY: u8 = 85;

/// Tunables of the five-stage pipeline. `Default` is what the CLI runs with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineParams {
    /// Isotropic enlargement applied before sharpening and noise
    pub scale_factor: ScaleFactor,
    /// Gaussian sigma of the unsharp-mask blur
    pub blur_sigma: f32,
    /// Unsharp-mask strength; the blend is `(1 + amount) * original - amount * blurred`
    pub sharpen_amount: f32,
    /// Standard deviation of the zero-mean per-channel noise
    pub noise_std_dev: f32,
    /// Long-side bound of the output, measured against the original input
    pub max_dimension: u32,
    /// JPEG quality, 1..=100
    pub jpeg_quality: u8,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            blur_sigma: DEFAULT_BLUR_SIGMA,
            sharpen_amount: DEFAULT_SHARPEN_AMOUNT,
            noise_std_dev: DEFAULT_NOISE_STD_DEV,
            max_dimension: DEFAULT_MAX_DIMENSION,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl PipelineParams {
    pub fn validate(&self) -> Result<()> {
        if !self.blur_sigma.is_finite() || self.blur_sigma <= 0.0 {
            return Err(Error::InvalidArgument {
                arg: "blur_sigma",
                value: self.blur_sigma.to_string(),
            });
        }
        if !self.sharpen_amount.is_finite() || self.sharpen_amount < 0.0 {
            return Err(Error::InvalidArgument {
                arg: "sharpen_amount",
                value: self.sharpen_amount.to_string(),
            });
        }
        if !self.noise_std_dev.is_finite() || self.noise_std_dev < 0.0 {
            return Err(Error::InvalidArgument {
                arg: "noise_std_dev",
                value: self.noise_std_dev.to_string(),
            });
        }
        if self.max_dimension == 0 {
            return Err(Error::InvalidArgument {
                arg: "max_dimension",
                value: self.max_dimension.to_string(),
            });
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(Error::InvalidArgument {
                arg: "jpeg_quality",
                value: self.jpeg_quality.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = PipelineParams::default();
        params.validate().unwrap();
        assert_eq!(params.scale_factor.get(), 3);
        assert_eq!(params.max_dimension, 1536);
        assert_eq!(params.jpeg_quality, 85);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let cases = [
            PipelineParams { blur_sigma: 0.0, ..Default::default() },
            PipelineParams { blur_sigma: f32::NAN, ..Default::default() },
            PipelineParams { sharpen_amount: -0.5, ..Default::default() },
            PipelineParams { noise_std_dev: -1.0, ..Default::default() },
            PipelineParams { max_dimension: 0, ..Default::default() },
            PipelineParams { jpeg_quality: 0, ..Default::default() },
            PipelineParams { jpeg_quality: 101, ..Default::default() },
        ];
        for params in cases {
            assert!(
                matches!(params.validate(), Err(Error::InvalidArgument { .. })),
                "accepted {params:?}"
            );
        }
    }

    #[test]
    fn serializes_scale_factor_as_plain_integer() {
        let json = serde_json::to_value(PipelineParams::default()).unwrap();
        assert_eq!(json["scale_factor"], 3);
        assert_eq!(json["max_dimension"], 1536);
        let back: PipelineParams = serde_json::from_value(json).unwrap();
        assert_eq!(back, PipelineParams::default());
    }
}
