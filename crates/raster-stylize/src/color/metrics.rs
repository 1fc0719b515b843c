//! Luminance, color distance and nearest-palette search.
//!
//! These functions define the bit-exact behavior of every quantizer in the
//! crate. In particular the luminance is integer arithmetic with a
//! truncating shift, and nearest-color search keeps the first entry on
//! ties so dithered output is reproducible.

use super::Rgb;

/// Channel weights for [`distance_squared`].
const DISTANCE_WEIGHTS: [f32; 3] = [0.30, 0.59, 0.11];

/// Integer perceptual luminance, `(r*77 + g*150 + b*29) >> 8`.
///
/// The weights approximate ITU-R BT.601 scaled to 256. The shift
/// truncates; pure white maps to 255 and pure black to 0.
///
/// ```
/// use raster_stylize::color::luminance;
///
/// assert_eq!(luminance(255, 255, 255), 255);
/// assert_eq!(luminance(128, 128, 128), 128);
/// assert_eq!(luminance(255, 0, 0), 76);
/// ```
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 77 + g as u32 * 150 + b as u32 * 29) >> 8) as u8
}

/// Weighted squared Euclidean distance (0.30 R, 0.59 G, 0.11 B).
///
/// No square root is taken; the value is only ever compared.
#[inline]
pub fn distance_squared(a: [f32; 3], b: [f32; 3]) -> f32 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    DISTANCE_WEIGHTS[0] * dr * dr + DISTANCE_WEIGHTS[1] * dg * dg + DISTANCE_WEIGHTS[2] * db * db
}

/// Index of the palette entry nearest to `color`.
///
/// `color` may lie outside `0..=255` (error diffusion pushes values past
/// the gamut). Linear scan; the first entry wins ties.
///
/// Returns 0 for an empty slice.
#[inline]
pub fn nearest_index(color: [f32; 3], palette: &[Rgb]) -> usize {
    let mut best_idx = 0;
    let mut best_dist = f32::MAX;

    for (i, entry) in palette.iter().enumerate() {
        let dist = distance_squared(color, entry.to_f32());
        if dist < best_dist {
            best_dist = dist;
            best_idx = i;
        }
    }

    best_idx
}

/// Nearest palette color to `color`, see [`nearest_index`].
///
/// Returns black for an empty slice.
#[inline]
pub fn nearest(color: [f32; 3], palette: &[Rgb]) -> Rgb {
    palette
        .get(nearest_index(color, palette))
        .copied()
        .unwrap_or(Rgb::BLACK)
}

/// Stable ascending sort by [`luminance`].
pub fn sort_by_luminance(palette: &[Rgb]) -> Vec<Rgb> {
    let mut sorted = palette.to_vec();
    sorted.sort_by_key(|c| c.luminance());
    sorted
}

/// Map a luminance (nominally 0..=255) to an index into an `n`-entry
/// luminance-sorted palette: `round(lum / 255 * (n - 1))`, clamped.
///
/// Perturbed luminances from ordered dithering may fall outside the
/// nominal range; they clamp to the first or last entry.
///
/// ```
/// use raster_stylize::color::index_for_luminance;
///
/// assert_eq!(index_for_luminance(0.0, 4), 0);
/// assert_eq!(index_for_luminance(128.0, 4), 2);
/// assert_eq!(index_for_luminance(300.0, 4), 3);
/// ```
#[inline]
pub fn index_for_luminance(luminance: f32, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let max = (n - 1) as f32;
    let idx = (luminance / 255.0 * max).round();
    idx.clamp(0.0, max) as usize
}

/// Round and clamp a channel value into `0..=255`.
///
/// NaN maps to 0.
#[inline]
pub fn clamp8(x: f32) -> u8 {
    x.round().clamp(0.0, 255.0) as u8
}
