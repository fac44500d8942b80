//! The five image stages and their composition. Each stage is a free function
//! over an owned or borrowed [`RasterImage`](crate::types::RasterImage).
pub mod noise;
pub mod pipeline;
pub mod resize;
pub mod sharpen;
pub mod upscale;
