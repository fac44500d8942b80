use std::path::Path;

use image::ImageReader;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::RasterImage;

/// Decode `path` into an 8-bit RGB raster.
///
/// The format is sniffed from the file contents, falling back to the
/// extension. Alpha is dropped and grayscale is expanded to three channels.
pub fn load_image(path: &Path) -> Result<RasterImage> {
    if !path.exists() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let decode_err = |source: image::ImageError| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?;
    debug!("Detected input format: {:?}", reader.format());

    let decoded = reader.decode().map_err(decode_err)?;
    info!(
        "Loaded {:?}: {}x{} ({:?})",
        path,
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    Ok(decoded.into_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbaImage, Rgba};
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.png");
        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, Error::InputNotFound { .. }));
        assert!(err.to_string().contains("absent.png"));
    }

    #[test]
    fn garbage_fails_to_decode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("noise.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert!(err.is_decode());
    }

    #[test]
    fn rgba_input_becomes_rgb() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        RgbaImage::from_pixel(5, 3, Rgba([10, 20, 30, 40])).save(&path).unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!(img.dimensions(), (5, 3));
        assert_eq!(img.get_pixel(2, 1), &Rgb([10, 20, 30]));
    }

    #[test]
    fn grayscale_input_is_expanded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gray.png");
        GrayImage::from_pixel(4, 4, Luma([77])).save(&path).unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!(img.get_pixel(0, 0), &Rgb([77, 77, 77]));
    }

    #[test]
    fn format_is_detected_from_content() {
        let dir = tempdir().unwrap();
        let png = dir.path().join("real.png");
        RasterImage::from_pixel(3, 3, Rgb([1, 2, 3])).save(&png).unwrap();
        let misnamed = dir.path().join("real.dat");
        std::fs::copy(&png, &misnamed).unwrap();

        assert_eq!(load_image(&misnamed).unwrap().dimensions(), (3, 3));
    }
}
