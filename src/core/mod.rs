//! Core processing building blocks: pipeline parameters and the upscale,
//! sharpen, noise and resize stages. These are internal primitives consumed
//! by the high-level `api` module.
pub mod params;
pub mod processing;
