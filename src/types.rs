//! Shared types used across the pipeline: the `RasterImage` buffer, image
//! `Dimensions`, and the isotropic `ScaleFactor`.
use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Decoded working buffer: interleaved 8-bit RGB, row-major.
///
/// Every stage takes one by value and hands back a new one, so there is exactly
/// one owner at a time.
pub type RasterImage = image::RgbImage;

/// Channels per pixel of a [`RasterImage`].
pub const CHANNELS: usize = 3;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of(image: &RasterImage) -> Self {
        let (width, height) = image.dimensions();
        Self { width, height }
    }

    pub fn long_side(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Multiply both sides by `factor`. Saturates instead of overflowing.
    pub fn scaled(&self, factor: ScaleFactor) -> Self {
        let f = factor.get();
        Self {
            width: self.width.saturating_mul(f),
            height: self.height.saturating_mul(f),
        }
    }

    /// Shrink so that the long side is at most `max_dimension`, keeping the
    /// aspect ratio. Dimensions already inside the bound are returned as-is.
    ///
    /// The long side lands exactly on `max_dimension`; the short side is
    /// rounded to the nearest pixel and never drops below 1.
    pub fn fit_within(&self, max_dimension: u32) -> Self {
        let long_side = self.long_side();
        if long_side <= max_dimension {
            return *self;
        }

        let scale = max_dimension as f64 / long_side as f64;
        let shrink = |side: u32| ((side as f64 * scale).round() as u32).clamp(1, max_dimension);

        if self.width >= self.height {
            Self::new(max_dimension, shrink(self.height))
        } else {
            Self::new(shrink(self.width), max_dimension)
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Positive integer multiplier applied to width and height together.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaleFactor(NonZeroU32);

impl ScaleFactor {
    pub const IDENTITY: ScaleFactor = ScaleFactor(NonZeroU32::MIN);

    pub const fn new(factor: NonZeroU32) -> Self {
        Self(factor)
    }

    /// `None` for zero.
    pub fn from_u32(factor: u32) -> Option<Self> {
        NonZeroU32::new(factor).map(Self)
    }

    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}
