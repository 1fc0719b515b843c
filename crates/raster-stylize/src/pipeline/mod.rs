//! The stage sequencer.
//!
//! ```text
//! source
//!   -> pixelate-down   (pixel-scale > 1)
//!   -> posterize       (posterize.enabled)
//!   -> dither/quantize
//!   -> strength blend  (strength < 100, kind != none)
//!   -> pixelate-up     (pixel-scale > 1)
//!   -> overlay         (overlay.enabled)
//!   -> noise           (noise.enabled)
//!   -> original blend  (original-blend > 0)
//! ```
//!
//! Every stage reads the previous stage's raster by reference and returns
//! a new one; the loaded source is never modified, so the same pipeline
//! can be re-run with different settings.

mod error;

pub use error::PipelineError;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Rgb;
use crate::dither::DitherKind;
use crate::effects::{add_noise, apply_overlay, downscale_box, mix, posterize, upscale_nearest};
use crate::image::RasterImage;
use crate::palette::Palette;
use crate::settings::ProcessingSettings;

/// Holds the palette and the loaded source raster.
///
/// # Example
///
/// ```
/// use raster_stylize::{Pipeline, ProcessingSettings, RasterImage, Rgb};
///
/// let mut pipeline = Pipeline::from_colors(&[Rgb::BLACK, Rgb::WHITE]).unwrap();
/// pipeline.load_source(RasterImage::filled(8, 8, Rgb::new(90, 90, 90)));
///
/// let out = pipeline.run(&ProcessingSettings::default()).unwrap();
/// assert!(out.pixels().all(|p| p[0] == 0 || p[0] == 255));
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    palette: Palette,
    source: Option<RasterImage>,
}

impl Pipeline {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            source: None,
        }
    }

    /// Build a pipeline from raw colors, validating the palette.
    pub fn from_colors(colors: &[Rgb]) -> Result<Self, PipelineError> {
        Ok(Self::new(Palette::new(colors)?))
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace the palette; the luminance-sorted view comes with it.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Load (or replace) the source raster.
    pub fn load_source(&mut self, image: RasterImage) {
        tracing::debug!(width = image.width(), height = image.height(), "source loaded");
        self.source = Some(image);
    }

    pub fn source(&self) -> Option<&RasterImage> {
        self.source.as_ref()
    }

    /// Run with the settings' seed, or OS entropy when no seed is set.
    pub fn run(&self, settings: &ProcessingSettings) -> Result<RasterImage, PipelineError> {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(settings, &mut rng)
    }

    /// Run with an explicit random source for overlay and noise.
    ///
    /// Settings are clamped first, so out-of-range values never fail.
    ///
    /// # Errors
    ///
    /// [`PipelineError::NoImageLoaded`] if no source has been loaded.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        settings: &ProcessingSettings,
        rng: &mut R,
    ) -> Result<RasterImage, PipelineError> {
        let source = self.source.as_ref().ok_or(PipelineError::NoImageLoaded)?;
        let settings = settings.clamped();
        let (width, height) = (source.width(), source.height());
        let palette = &self.palette;

        tracing::info!(
            width,
            height,
            colors = palette.len(),
            dither = settings.dither.kind.as_str(),
            "running pipeline"
        );

        let mut working = downscale_box(source, settings.pixel_scale);
        if working.width() != width || working.height() != height {
            tracing::debug!(
                width = working.width(),
                height = working.height(),
                scale = settings.pixel_scale,
                "pixelate down"
            );
        }

        if settings.posterize.enabled {
            let p = &settings.posterize;
            let levels = p.level_count();
            tracing::debug!(levels, mode = p.mode.as_str(), "posterize");
            working = posterize(&working, levels, p.mode, p.use_palette.then_some(palette));
        }

        let kind = settings.dither.kind;
        let dithered = kind.apply(&working, palette, settings.dither.bayer_size());
        tracing::debug!(kind = kind.as_str(), "dither");

        let strength = settings.dither.strength;
        working = if kind != DitherKind::None && strength < 100.0 {
            tracing::debug!(strength, "strength blend");
            mix(&dithered, &working, (100.0 - strength) / 100.0)?
        } else {
            dithered
        };

        working = upscale_nearest(&working, width, height);

        if settings.overlay.enabled {
            let options = settings.overlay.to_options(palette.lightest());
            working = apply_overlay(&working, &options, rng);
        }

        if settings.noise.enabled {
            tracing::debug!(amount = settings.noise.amount, "noise");
            working = add_noise(&working, settings.noise.amount, rng);
        }

        if settings.original_blend > 0.0 {
            tracing::debug!(weight = settings.original_blend, "original blend");
            working = mix(&working, source, settings.original_blend / 100.0)?;
        }

        Ok(working)
    }
}
