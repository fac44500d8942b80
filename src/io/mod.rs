//! I/O layer: decoding inputs into a `RasterImage` (`loader`) and encoding the
//! finished raster to disk (`writers`).
pub mod loader;
pub use loader::load_image;

pub mod writers;
pub use writers::jpeg::write_rgb_jpeg;
