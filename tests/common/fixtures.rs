//! Test fixtures and constants.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raster_stylize::{RasterImage, Rgb};
use stylizer::rendering::encode_png;

/// Palettes used across tests
pub mod palettes {
    pub const BLACK_WHITE: &str = "#000000,#ffffff";
    pub const FOUR_COLOR: &str = "#000000,#ffffff,#ff0000,#ffff00";
}

/// Horizontal RGB gradient with a vertical blue ramp
pub fn gradient(width: usize, height: usize) -> RasterImage {
    RasterImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / (width - 1).max(1)) as u8;
        let b = (y * 255 / (height - 1).max(1)) as u8;
        [r, 255 - r, b, 255]
    })
}

/// Uniform random pixels from a fixed seed
pub fn random_image(width: usize, height: usize, seed: u64) -> RasterImage {
    let mut rng = StdRng::seed_from_u64(seed);
    RasterImage::from_fn(width, height, |_, _| [rng.gen(), rng.gen(), rng.gen(), 255])
}

pub fn gray(width: usize, height: usize, level: u8) -> RasterImage {
    RasterImage::filled(width, height, Rgb::new(level, level, level))
}

pub fn png_bytes(image: &RasterImage) -> Vec<u8> {
    encode_png(image).expect("fixture encodes")
}

/// Configuration YAML exercising every stage
pub const FULL_CONFIG: &str = r##"
palette: ["#000000", "#ffffff", "#ff0000", "#ffff00"]
settings:
  dither:
    kind: atkinson
    strength: 90
  pixel-scale: 2
  posterize:
    enabled: true
    levels: 6
    mode: artistic
  overlay:
    enabled: true
    intensity: 60
    density: 30
    blend-mode: soft-light
  noise:
    enabled: true
    amount: 12
  original-blend: 10
  seed: 1234
"##;
