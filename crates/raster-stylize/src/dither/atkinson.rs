//! Atkinson error diffusion dithering algorithm.
//!
//! Atkinson dithering distributes only 75% of the quantization error (6/8).
//! Originally developed by Bill Atkinson for the Apple Macintosh.

use super::{dither_with_kernel, Dither, ATKINSON};
use crate::image::RasterImage;
use crate::palette::Palette;

/// Atkinson error diffusion dithering.
///
/// The error of each pixel is divided by eight and added to six
/// neighbors:
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// The two undistributed eighths are lost, so highlights and shadows
/// clip harder than with [`FloydSteinberg`](super::FloydSteinberg).
#[derive(Debug, Clone, Copy, Default)]
pub struct Atkinson;

impl Dither for Atkinson {
    fn dither(&self, image: &RasterImage, palette: &Palette) -> RasterImage {
        dither_with_kernel(image, palette, &ATKINSON)
    }
}
