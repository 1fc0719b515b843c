//! raster-stylize: palette-constrained stylization of RGBA rasters
//!
//! Turns a full-color raster into a stylized image restricted to a small
//! palette, through a fixed sequence of pixelation, posterization,
//! dithering, procedural overlay, noise and compositing stages.
//!
//! # Quick Start
//!
//! ```
//! use raster_stylize::{DitherKind, Palette, Pipeline, ProcessingSettings, RasterImage, Rgb};
//!
//! let palette = Palette::from_hex(&["#000000", "#ffffff", "#ff0000"]).unwrap();
//! let mut pipeline = Pipeline::new(palette);
//! pipeline.load_source(RasterImage::filled(16, 16, Rgb::new(200, 60, 40)));
//!
//! let mut settings = ProcessingSettings::default();
//! settings.dither.kind = DitherKind::Atkinson;
//! settings.seed = Some(1);
//!
//! let out = pipeline.run(&settings).unwrap();
//! assert_eq!((out.width(), out.height()), (16, 16));
//! ```
//!
//! # Color Math
//!
//! All math runs on the 8-bit sRGB values straight from the buffer, with
//! no gamma decoding:
//!
//! - luminance is `(77 R + 150 G + 29 B) >> 8`, truncating
//! - nearest-color search uses squared distance weighted 0.30 / 0.59 / 0.11
//!   and keeps the first palette entry on ties
//! - luminance-indexed lookups (ordered dithering, palette posterization)
//!   go through the palette sorted ascending by luminance
//!
//! # Reproducibility
//!
//! Quantization, dithering and posterization are deterministic. Overlay
//! and noise draw from a random source passed to
//! [`Pipeline::run_with_rng`]; [`Pipeline::run`] seeds it from
//! [`ProcessingSettings::seed`] when set.
//!
//! # Modules
//!
//! - [`color`]: [`Rgb`] and the shared color math
//! - [`palette`]: validated [`Palette`]
//! - [`image`]: [`RasterImage`] buffer
//! - [`dither`]: quantize, Floyd-Steinberg, Atkinson, ordered
//! - [`effects`]: posterize, blend modes, overlay, noise, mix, pixelate
//! - [`settings`]: serde-ready [`ProcessingSettings`]
//! - [`pipeline`]: the [`Pipeline`] orchestrator

pub mod color;
pub mod dither;
pub mod effects;
pub mod image;
pub mod palette;
pub mod pipeline;
pub mod settings;


pub use color::Rgb;
pub use dither::{BayerSize, Dither, DitherKind};
pub use effects::{BlendMode, PosterizeMode};
pub use image::{RasterError, RasterImage};
pub use palette::{Palette, PaletteError, ParseColorError};
pub use pipeline::{Pipeline, PipelineError};
pub use settings::ProcessingSettings;
