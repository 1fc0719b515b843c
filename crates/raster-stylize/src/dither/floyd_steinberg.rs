//! Floyd-Steinberg error diffusion dithering algorithm.

use super::{dither_with_kernel, Dither, FLOYD_STEINBERG};
use crate::image::RasterImage;
use crate::palette::Palette;

/// Floyd-Steinberg error diffusion dithering.
///
/// Distributes 100% of the quantization error to four neighbors:
///
/// ```text
///        X   7
///    3   5   1     (/16)
/// ```
///
/// The scan is strictly left-to-right, top-to-bottom (no serpentine), and
/// error aimed outside the image is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, image: &RasterImage, palette: &Palette) -> RasterImage {
        dither_with_kernel(image, palette, &FLOYD_STEINBERG)
    }
}
