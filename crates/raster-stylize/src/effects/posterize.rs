//! Posterization: snapping tones to a small number of evenly spaced steps.

use serde::{Deserialize, Serialize};

use crate::color::{clamp8, luminance, Rgb};
use crate::image::RasterImage;
use crate::palette::Palette;

pub const MIN_LEVELS: u8 = 2;
pub const MAX_LEVELS: u8 = 16;

/// Contrast gain applied around the image mean in artistic mode.
const ARTISTIC_CONTRAST: f32 = 1.3;

/// Green gain in artistic mode (warm cast).
const ARTISTIC_GREEN_GAIN: f32 = 1.05;

/// How tones are posterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PosterizeMode {
    /// Snap luminance, then rescale RGB by the luminance ratio (keeps hue).
    #[default]
    Luminance,
    /// Snap each channel independently.
    PerChannel,
    /// Contrast boost around the image mean, per-channel snap, warm cast.
    Artistic,
}

impl PosterizeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PosterizeMode::Luminance => "luminance",
            PosterizeMode::PerChannel => "per-channel",
            PosterizeMode::Artistic => "artistic",
        }
    }
}

/// Snap `value` to the nearest multiple of `step`.
#[inline]
fn snap(value: f32, step: f32) -> f32 {
    (value / step).round() * step
}

/// Posterize an image to `levels` steps (clamped to 2..=16).
///
/// The step between levels is `255 / (levels - 1)`. When `palette` is
/// given, every pixel is afterwards replaced by the luminance-sorted
/// palette entry for its luminance, whatever the mode produced.
///
/// ```
/// use raster_stylize::effects::{posterize, PosterizeMode};
/// use raster_stylize::{RasterImage, Rgb};
///
/// let row = [0u8, 64, 128, 192, 255].map(|v| Rgb::new(v, v, v));
/// let image = RasterImage::from_rgb(5, 1, &row).unwrap();
///
/// let out = posterize(&image, 2, PosterizeMode::PerChannel, None);
/// let values: Vec<u8> = (0..5).map(|x| out.rgb_at(x, 0).r).collect();
/// assert_eq!(values, vec![0, 0, 255, 255, 255]);
/// ```
pub fn posterize(
    image: &RasterImage,
    levels: u8,
    mode: PosterizeMode,
    palette: Option<&Palette>,
) -> RasterImage {
    let levels = levels.clamp(MIN_LEVELS, MAX_LEVELS);
    let step = 255.0 / (levels - 1) as f32;
    let mut output = image.clone();

    match mode {
        PosterizeMode::Luminance => output.map_rgb(|c| {
            let lum = luminance(c.r, c.g, c.b) as f32;
            let scale = if lum == 0.0 { 1.0 } else { snap(lum, step) / lum };
            Rgb::new(
                clamp8(c.r as f32 * scale),
                clamp8(c.g as f32 * scale),
                clamp8(c.b as f32 * scale),
            )
        }),
        PosterizeMode::PerChannel => output.map_rgb(|c| {
            Rgb::new(
                clamp8(snap(c.r as f32, step)),
                clamp8(snap(c.g as f32, step)),
                clamp8(snap(c.b as f32, step)),
            )
        }),
        PosterizeMode::Artistic => {
            let mean = artistic_mean(image);
            let boost = |v: u8| snap((v as f32 - mean) * ARTISTIC_CONTRAST + mean, step);
            output.map_rgb(|c| {
                Rgb::new(
                    clamp8(boost(c.r)),
                    clamp8(boost(c.g) * ARTISTIC_GREEN_GAIN),
                    clamp8(boost(c.b)),
                )
            });
        }
    }

    if let Some(palette) = palette {
        output.map_rgb(|c| palette.for_luminance(c.luminance() as f32));
    }

    output
}

/// Mean brightness for artistic mode: the sum of R+G+B over all pixels
/// divided by `0.75 *` the total number of channel samples (alpha
/// included), which equals the mean over the three color channels.
fn artistic_mean(image: &RasterImage) -> f32 {
    let sum: u64 = image
        .pixels()
        .map(|p| p[0] as u64 + p[1] as u64 + p[2] as u64)
        .sum();
    let samples = image.data().len() as f64;
    (sum as f64 / (0.75 * samples)) as f32
}
