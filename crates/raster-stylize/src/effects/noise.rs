//! Luminance grain.

use rand::Rng;

use crate::color::clamp8;
use crate::image::RasterImage;

/// Add one uniform offset in `[-amount, amount)` per pixel, applied
/// identically to R, G and B so hue is preserved.
///
/// Draws exactly one random value per pixel in row-major order. An
/// `amount` of zero or less returns an unchanged copy without touching
/// the generator.
pub fn add_noise<R: Rng + ?Sized>(image: &RasterImage, amount: f32, rng: &mut R) -> RasterImage {
    let mut output = image.clone();
    if amount.is_nan() || amount <= 0.0 {
        return output;
    }

    for px in output.pixels_mut() {
        let n = (rng.gen::<f32>() * 2.0 - 1.0) * amount;
        for channel in &mut px[..3] {
            *channel = clamp8(*channel as f32 + n);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    fn gradient() -> RasterImage {
        RasterImage::from_fn(16, 8, |x, y| [(x * 16) as u8, (y * 30) as u8, 90, 255])
    }

    #[test]
    fn test_zero_amount_is_noop() {
        let image = gradient();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(add_noise(&image, 0.0, &mut rng), image);
        assert_eq!(add_noise(&image, -5.0, &mut rng), image);

        // the generator was not advanced
        let mut fresh = StdRng::seed_from_u64(1);
        assert_eq!(rng.next_u64(), fresh.next_u64());
    }

    #[test]
    fn test_same_offset_on_all_channels() {
        let image = RasterImage::filled(8, 8, Rgb::new(100, 120, 140));
        let out = add_noise(&image, 30.0, &mut StdRng::seed_from_u64(2));
        for px in out.pixels() {
            let d = px[0] as i32 - 100;
            assert_eq!(px[1] as i32 - 120, d);
            assert_eq!(px[2] as i32 - 140, d);
            assert!((-30..=30).contains(&d));
            assert_eq!(px[3], 255);
        }
        assert!(out.pixels().any(|px| px[0] != 100));
    }

    #[test]
    fn test_clamped_at_extremes() {
        let image = RasterImage::from_rgb(2, 1, &[Rgb::BLACK, Rgb::WHITE]).unwrap();
        let out = add_noise(&image, 255.0, &mut StdRng::seed_from_u64(3));
        assert_eq!(out.width(), 2);
        assert!(out.pixels().all(|px| px[0] == px[1] && px[1] == px[2]));
    }

    #[test]
    fn test_deterministic_with_seed() {
        let image = gradient();
        let a = add_noise(&image, 12.0, &mut StdRng::seed_from_u64(99));
        let b = add_noise(&image, 12.0, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
