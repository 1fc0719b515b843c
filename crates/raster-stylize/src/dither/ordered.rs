//! Ordered (Bayer) dithering.
//!
//! A square threshold matrix is tiled over the image. Each pixel's
//! luminance is nudged up or down by its threshold and the result picks
//! an entry of the luminance-sorted palette. There is no error
//! propagation: the output is a pure function of position and input
//! pixel.

use super::Dither;
use crate::color::luminance;
use crate::image::RasterImage;
use crate::palette::Palette;

/// Threshold spread in normalized luminance units: thresholds in
/// `[0, 1)` move luminance by `(t - 0.5) * 0.5`, i.e. up to a quarter of
/// the full range either way.
const ORDERED_SPREAD: f32 = 0.5;

const BAYER_2: [[u8; 2]; 2] = [[0, 2], [3, 1]];

const BAYER_4: [[u8; 4]; 4] = [[0, 8, 2, 10], [12, 4, 14, 6], [3, 11, 1, 9], [15, 7, 13, 5]];

#[rustfmt::skip]
const BAYER_8: [[u8; 8]; 8] = [
    [ 0, 32,  8, 40,  2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44,  4, 36, 14, 46,  6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [ 3, 35, 11, 43,  1, 33,  9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47,  7, 39, 13, 45,  5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// Bayer matrix size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BayerSize {
    Two,
    #[default]
    Four,
    Eight,
}

impl BayerSize {
    /// Snap an arbitrary size to the nearest supported matrix
    /// (`<= 2` -> 2, `3..=5` -> 4, otherwise 8).
    pub fn from_size(size: u32) -> Self {
        match size {
            0..=2 => BayerSize::Two,
            3..=5 => BayerSize::Four,
            _ => BayerSize::Eight,
        }
    }

    /// Edge length of the matrix.
    pub fn size(self) -> usize {
        match self {
            BayerSize::Two => 2,
            BayerSize::Four => 4,
            BayerSize::Eight => 8,
        }
    }

    /// Threshold for pixel `(x, y)`, normalized to `[0, 1)`.
    #[inline]
    pub fn threshold(self, x: usize, y: usize) -> f32 {
        let (rank, cells) = match self {
            BayerSize::Two => (BAYER_2[y % 2][x % 2], 4.0),
            BayerSize::Four => (BAYER_4[y % 4][x % 4], 16.0),
            BayerSize::Eight => (BAYER_8[y % 8][x % 8], 64.0),
        };
        rank as f32 / cells
    }
}

/// Ordered dithering against the luminance-sorted palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ordered {
    size: BayerSize,
}

impl Ordered {
    pub fn new(size: BayerSize) -> Self {
        Self { size }
    }
}

impl Dither for Ordered {
    fn dither(&self, image: &RasterImage, palette: &Palette) -> RasterImage {
        let mut output = image.clone();
        for y in 0..image.height() {
            for x in 0..image.width() {
                let c = image.rgb_at(x, y);
                let threshold = self.size.threshold(x, y);
                let perturbed =
                    luminance(c.r, c.g, c.b) as f32 + (threshold - 0.5) * ORDERED_SPREAD * 255.0;
                output.set_rgb(x, y, palette.for_luminance(perturbed));
            }
        }
        output
    }
}
