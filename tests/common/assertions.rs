//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use raster_stylize::{Palette, RasterImage, Rgb};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.len() > PNG_SIGNATURE.len() && bytes[..8] == PNG_SIGNATURE,
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert every pixel's RGB is a palette entry
pub fn assert_in_palette(image: &RasterImage, palette: &Palette) {
    for y in 0..image.height() {
        for x in 0..image.width() {
            let c = image.rgb_at(x, y);
            assert!(
                palette.contains(c),
                "Pixel ({x}, {y}) = {c} is not in the palette"
            );
        }
    }
}

pub fn assert_size(image: &RasterImage, width: usize, height: usize) {
    assert_eq!((image.width(), image.height()), (width, height));
}

/// Count pixels equal to `color`
pub fn count_color(image: &RasterImage, color: Rgb) -> usize {
    image
        .pixels()
        .filter(|p| Rgb::new(p[0], p[1], p[2]) == color)
        .count()
}
