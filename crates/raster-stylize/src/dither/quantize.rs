//! Plain nearest-color quantization.

use super::Dither;
use crate::image::RasterImage;
use crate::palette::Palette;

/// Replace every pixel with its nearest palette color.
///
/// No error is carried between pixels, so quantizing an already
/// quantized raster returns it unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quantize;

impl Dither for Quantize {
    fn dither(&self, image: &RasterImage, palette: &Palette) -> RasterImage {
        let mut output = image.clone();
        output.map_rgb(|c| palette.nearest(c.to_f32()));
        output
    }
}
