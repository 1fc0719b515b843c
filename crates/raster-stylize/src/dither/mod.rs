//! Palette quantization and dithering.
//!
//! Four interchangeable strategies share the [`Dither`] trait:
//!
//! - [`Quantize`]: nearest palette color per pixel, no dithering
//! - [`FloydSteinberg`]: error diffusion, 100% propagation
//! - [`Atkinson`]: error diffusion, 75% propagation
//! - [`Ordered`]: Bayer threshold matrix over the luminance-sorted palette
//!
//! Every strategy returns a raster of the input's dimensions in which each
//! pixel's RGB is an entry of the palette. Alpha is copied through.
//!
//! # Scan order
//!
//! The two error diffusion strategies visit pixels strictly row-major,
//! left to right, top to bottom; a pixel's choice depends on error pushed
//! forward by every pixel before it. [`Quantize`] and [`Ordered`] are pure
//! per-pixel functions and could run row-parallel.
//!
//! # Example
//!
//! ```
//! use raster_stylize::dither::{Dither, FloydSteinberg};
//! use raster_stylize::{Palette, RasterImage, Rgb};
//!
//! let palette = Palette::new(&[Rgb::BLACK, Rgb::WHITE]).unwrap();
//! let image = RasterImage::filled(4, 4, Rgb::new(128, 128, 128));
//!
//! let out = FloydSteinberg.dither(&image, &palette);
//! assert!(out.pixels().all(|p| p[0] == 0 || p[0] == 255));
//! ```

mod atkinson;
mod floyd_steinberg;
mod kernel;
mod ordered;
mod quantize;

pub use atkinson::Atkinson;
pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, ATKINSON, FLOYD_STEINBERG};
pub use ordered::{BayerSize, Ordered};
pub use quantize::Quantize;

use serde::{Deserialize, Serialize};

use crate::image::RasterImage;
use crate::palette::Palette;

/// Dithering strategy selected by the settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DitherKind {
    /// Plain nearest-color quantization.
    None,
    /// Floyd-Steinberg error diffusion.
    #[default]
    FloydSteinberg,
    /// Bayer matrix ordered dithering.
    Ordered,
    /// Atkinson error diffusion.
    Atkinson,
}

impl DitherKind {
    /// Kebab-case name as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            DitherKind::None => "none",
            DitherKind::FloydSteinberg => "floyd-steinberg",
            DitherKind::Ordered => "ordered",
            DitherKind::Atkinson => "atkinson",
        }
    }

    /// Run this strategy. `bayer` is only consulted by
    /// [`DitherKind::Ordered`].
    pub fn apply(self, image: &RasterImage, palette: &Palette, bayer: BayerSize) -> RasterImage {
        match self {
            DitherKind::None => Quantize.dither(image, palette),
            DitherKind::FloydSteinberg => FloydSteinberg.dither(image, palette),
            DitherKind::Ordered => Ordered::new(bayer).dither(image, palette),
            DitherKind::Atkinson => Atkinson.dither(image, palette),
        }
    }
}

impl std::str::FromStr for DitherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(DitherKind::None),
            "floyd-steinberg" | "floyd_steinberg" | "fs" => Ok(DitherKind::FloydSteinberg),
            "ordered" | "bayer" => Ok(DitherKind::Ordered),
            "atkinson" => Ok(DitherKind::Atkinson),
            other => Err(format!(
                "unknown dither kind '{other}' (expected none, floyd-steinberg, ordered, atkinson)"
            )),
        }
    }
}

/// A palette quantization strategy.
pub trait Dither {
    /// Map every pixel of `image` to a palette color.
    ///
    /// The output has the input's dimensions and alpha; its RGB values are
    /// all entries of `palette`.
    fn dither(&self, image: &RasterImage, palette: &Palette) -> RasterImage;
}

/// Full-image float error buffer for error diffusion.
///
/// Seeded with the input's RGB values; diffused error is added in place,
/// so `get(x, y)` returns the pixel's error-adjusted value once the scan
/// reaches it.
#[derive(Debug)]
pub struct DiffusionBuffer {
    values: Vec<[f32; 3]>,
    width: usize,
    height: usize,
}

impl DiffusionBuffer {
    /// Seed the buffer from an image's RGB channels.
    pub fn from_image(image: &RasterImage) -> Self {
        Self {
            values: image
                .pixels()
                .map(|p| [p[0] as f32, p[1] as f32, p[2] as f32])
                .collect(),
            width: image.width(),
            height: image.height(),
        }
    }

    /// Current (error-adjusted) value of pixel `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [f32; 3] {
        self.values[y * self.width + x]
    }

    /// Add error to pixel `(x, y)`.
    ///
    /// Silently drops error aimed outside the image; it is not
    /// redistributed.
    #[inline]
    pub fn add_error(&mut self, x: i64, y: i64, error: [f32; 3]) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let value = &mut self.values[y as usize * self.width + x as usize];
        for (v, e) in value.iter_mut().zip(error) {
            *v += e;
        }
    }
}

/// Core error diffusion loop shared by Floyd-Steinberg and Atkinson.
///
/// For each pixel in raster order: pick the nearest palette color to the
/// buffered value, write it, then push `(buffered - chosen) * weight /
/// divisor` to each kernel neighbor.
pub(crate) fn dither_with_kernel(
    image: &RasterImage,
    palette: &Palette,
    kernel: &Kernel,
) -> RasterImage {
    let mut buffer = DiffusionBuffer::from_image(image);
    let mut output = image.clone();
    let divisor = kernel.divisor as f32;

    for y in 0..image.height() {
        for x in 0..image.width() {
            let value = buffer.get(x, y);
            let chosen = palette.nearest(value);
            output.set_rgb(x, y, chosen);

            let target = chosen.to_f32();
            let error = [
                value[0] - target[0],
                value[1] - target[1],
                value[2] - target[2],
            ];

            for &(dx, dy, weight) in kernel.entries {
                let w = weight as f32;
                let scaled = [
                    error[0] * w / divisor,
                    error[1] * w / divisor,
                    error[2] * w / divisor,
                ];
                buffer.add_error(x as i64 + dx as i64, y as i64 + dy as i64, scaled);
            }
        }
    }

    output
}
