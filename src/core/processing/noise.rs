use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::info;

use crate::error::Result;
use crate::types::RasterImage;

/// Add zero-mean Gaussian noise to every channel of every pixel independently.
///
/// Each sample is rounded to the nearest integer and added with a saturating
/// clamp: `clamp(value + round(sample), 0, 255)`.
pub fn add_gaussian_noise<R: Rng + ?Sized>(
    mut image: RasterImage,
    std_dev: f32,
    rng: &mut R,
) -> Result<RasterImage> {
    info!("Injecting Gaussian noise: std_dev={}", std_dev);
    let normal = Normal::new(0.0f32, std_dev)?;

    for value in image.iter_mut() {
        let sample = normal.sample(rng).round() as i32;
        *value = (*value as i32 + sample).clamp(0, 255) as u8;
    }
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_std_dev_is_identity() {
        let img = RasterImage::from_fn(10, 10, |x, y| Rgb([x as u8, y as u8, 42]));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(add_gaussian_noise(img.clone(), 0.0, &mut rng).unwrap(), img);
    }

    #[test]
    fn bright_and_dark_pixels_never_wrap() {
        let white = RasterImage::from_pixel(64, 64, Rgb([255, 255, 255]));
        let black = RasterImage::from_pixel(64, 64, Rgb([0, 0, 0]));
        let mut rng = StdRng::seed_from_u64(7);

        let noisy_white = add_gaussian_noise(white, 1.5, &mut rng).unwrap();
        assert!(noisy_white.iter().all(|&v| v >= 240));
        assert!(noisy_white.iter().any(|&v| v < 255));

        let noisy_black = add_gaussian_noise(black, 1.5, &mut rng).unwrap();
        assert!(noisy_black.iter().all(|&v| v <= 15));
        assert!(noisy_black.iter().any(|&v| v > 0));
    }

    #[test]
    fn noise_is_zero_mean_and_small() {
        let grey = RasterImage::from_pixel(128, 128, Rgb([128, 128, 128]));
        let mut rng = StdRng::seed_from_u64(42);
        let noisy = add_gaussian_noise(grey, 1.5, &mut rng).unwrap();

        let n = noisy.len() as f64;
        let mean = noisy.iter().map(|&v| v as f64).sum::<f64>() / n;
        assert!((mean - 128.0).abs() < 0.1, "mean={mean}");
        assert!(noisy.iter().all(|&v| (118..=138).contains(&v)));
        assert!(noisy.iter().any(|&v| v != 128));
    }

    #[test]
    fn same_seed_same_noise() {
        let img = RasterImage::from_pixel(16, 16, Rgb([100, 100, 100]));
        let a = add_gaussian_noise(img.clone(), 1.5, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = add_gaussian_noise(img, 1.5, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn negative_std_dev_is_rejected() {
        let img = RasterImage::new(2, 2);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(add_gaussian_noise(img, -1.0, &mut rng).is_err());
    }
}
