//! Linear interpolation between two rasters.

use crate::image::{RasterError, RasterImage};

/// Per-channel `a * (1 - weight) + b * weight`, rounded.
///
/// `weight` is clamped to `[0, 1]`. Alpha is taken from `a`.
///
/// # Errors
///
/// Returns [`RasterError::SizeMismatch`] if the rasters differ in size.
pub fn mix(a: &RasterImage, b: &RasterImage, weight: f32) -> Result<RasterImage, RasterError> {
    a.ensure_same_size(b)?;
    let w = if weight.is_nan() { 0.0 } else { weight.clamp(0.0, 1.0) };

    let mut output = a.clone();
    for (out, other) in output.pixels_mut().zip(b.pixels()) {
        for (channel, &target) in out[..3].iter_mut().zip(&other[..3]) {
            *channel = (*channel as f32 * (1.0 - w) + target as f32 * w).round() as u8;
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_weight_endpoints() {
        let a = RasterImage::filled(3, 3, Rgb::new(10, 20, 30));
        let b = RasterImage::filled(3, 3, Rgb::new(200, 100, 0));
        assert_eq!(mix(&a, &b, 0.0).unwrap(), a);
        assert_eq!(mix(&a, &b, 1.0).unwrap(), b);
        assert_eq!(mix(&a, &b, -3.0).unwrap(), a);
        assert_eq!(mix(&a, &b, 7.0).unwrap(), b);
    }

    #[test]
    fn test_midpoint_rounds() {
        let a = RasterImage::filled(1, 1, Rgb::new(0, 10, 255));
        let b = RasterImage::filled(1, 1, Rgb::new(255, 11, 0));
        // 127.5 -> 128, 10.5 -> 11, 127.5 -> 128
        assert_eq!(mix(&a, &b, 0.5).unwrap().rgb_at(0, 0), Rgb::new(128, 11, 128));
    }

    #[test]
    fn test_alpha_from_first() {
        let a = RasterImage::new(1, 1, vec![0, 0, 0, 80]).unwrap();
        let b = RasterImage::new(1, 1, vec![255, 255, 255, 255]).unwrap();
        assert_eq!(mix(&a, &b, 0.5).unwrap().rgba_at(0, 0)[3], 80);
    }

    #[test]
    fn test_size_mismatch() {
        let a = RasterImage::filled(2, 2, Rgb::BLACK);
        let b = RasterImage::filled(3, 2, Rgb::BLACK);
        assert!(matches!(
            mix(&a, &b, 0.5),
            Err(RasterError::SizeMismatch { right_width: 3, .. })
        ));
    }
}
