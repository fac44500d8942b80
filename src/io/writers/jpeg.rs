use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use jpeg_encoder::{ColorType, Encoder};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::{Dimensions, RasterImage};

/// Encode `image` as a baseline RGB JPEG at `quality` (1..=100), creating or
/// truncating `output`.
pub fn write_rgb_jpeg(output: &Path, image: &RasterImage, quality: u8) -> Result<()> {
    let dims = Dimensions::of(image);
    let (Ok(cols), Ok(rows)) = (u16::try_from(dims.width), u16::try_from(dims.height)) else {
        return Err(Error::DimensionsTooLarge {
            width: dims.width,
            height: dims.height,
        });
    };

    let write_err = |source: std::io::Error| Error::Write {
        path: output.to_path_buf(),
        source,
    };

    let file = File::create(output).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, quality);
    encoder
        .encode(image.as_raw(), cols, rows, ColorType::Rgb)
        .map_err(|source| Error::Encode {
            path: output.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(write_err)?;

    info!("Wrote {} JPEG (q={}) to {:?}", dims, quality, output);
    Ok(())
}
