//! Processing settings consumed by [`Pipeline::run`](crate::Pipeline::run).
//!
//! Settings deserialize from YAML (or any serde format) with every field
//! optional; enum values use kebab-case names:
//!
//! ```
//! use raster_stylize::{BlendMode, DitherKind, ProcessingSettings};
//!
//! let yaml = "
//! dither:
//!   kind: atkinson
//!   strength: 80
//! overlay:
//!   enabled: true
//!   blend-mode: soft-light
//! seed: 7
//! ";
//! let settings: ProcessingSettings = serde_yaml::from_str(yaml).unwrap();
//! assert_eq!(settings.dither.kind, DitherKind::Atkinson);
//! assert_eq!(settings.overlay.blend_mode, BlendMode::SoftLight);
//! assert_eq!(settings.pixel_scale, 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::dither::{BayerSize, DitherKind};
use crate::effects::{
    BlendMode, OverlayOptions, PosterizeMode, MAX_DENSITY, MAX_LEVELS, MIN_DENSITY, MIN_LEVELS,
};

/// Dithering stage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DitherSettings {
    pub kind: DitherKind,
    /// 0 to 100; below 100 the result is blended toward the undithered image.
    pub strength: f32,
    /// Bayer matrix edge, snapped to 2, 4 or 8.
    pub matrix_size: i64,
}

impl Default for DitherSettings {
    fn default() -> Self {
        Self {
            kind: DitherKind::FloydSteinberg,
            strength: 100.0,
            matrix_size: 4,
        }
    }
}

impl DitherSettings {
    pub fn bayer_size(&self) -> BayerSize {
        BayerSize::from_size(u32::try_from(self.matrix_size.max(0)).unwrap_or(u32::MAX))
    }
}

/// Posterize stage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PosterizeSettings {
    pub enabled: bool,
    /// Tone levels, clamped to 2..=16.
    pub levels: i64,
    pub mode: PosterizeMode,
    /// Remap posterized tones through the palette by luminance.
    pub use_palette: bool,
}

impl Default for PosterizeSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            levels: 4,
            mode: PosterizeMode::Luminance,
            use_palette: true,
        }
    }
}

impl PosterizeSettings {
    pub fn level_count(&self) -> u8 {
        clamp_to_u8(self.levels, MIN_LEVELS, MAX_LEVELS)
    }
}

/// Procedural overlay settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OverlaySettings {
    pub enabled: bool,
    pub intensity: f32,
    /// Blob count, clamped to 5..=100.
    pub density: i64,
    pub size_min: f32,
    pub size_max: f32,
    pub softness: f32,
    pub blend_mode: BlendMode,
    /// Hex color; the lightest palette color when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        let options = OverlayOptions::default();
        Self {
            enabled: false,
            intensity: options.intensity,
            density: i64::from(options.density),
            size_min: options.size_min,
            size_max: options.size_max,
            softness: options.softness,
            blend_mode: options.blend_mode,
            color: None,
        }
    }
}

impl OverlaySettings {
    /// Resolve into overlay options; `fallback` is used when no color is set.
    /// A malformed color becomes black.
    pub fn to_options(&self, fallback: Rgb) -> OverlayOptions {
        OverlayOptions {
            intensity: self.intensity,
            density: clamp_to_u32(self.density, MIN_DENSITY, MAX_DENSITY),
            size_min: self.size_min,
            size_max: self.size_max,
            softness: self.softness,
            blend_mode: self.blend_mode,
            color: self
                .color
                .as_deref()
                .map_or(fallback, Rgb::parse_or_black),
        }
    }
}

/// Noise stage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NoiseSettings {
    pub enabled: bool,
    pub amount: f32,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            amount: 10.0,
        }
    }
}

/// Full configuration of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProcessingSettings {
    pub dither: DitherSettings,
    /// Downscale factor applied before processing; 1 disables pixelation.
    pub pixel_scale: f32,
    pub posterize: PosterizeSettings,
    pub overlay: OverlaySettings,
    pub noise: NoiseSettings,
    /// 0 to 100, final blend weight toward the unprocessed source.
    pub original_blend: f32,
    /// Seed for overlay and noise; entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ProcessingSettings {
    fn default() -> Self {
        Self {
            dither: DitherSettings::default(),
            pixel_scale: 1.0,
            posterize: PosterizeSettings::default(),
            overlay: OverlaySettings::default(),
            noise: NoiseSettings::default(),
            original_blend: 0.0,
            seed: None,
        }
    }
}

/// Clamp to `[min, max]`, mapping NaN to `fallback`.
fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

fn clamp_to_u8(value: i64, min: u8, max: u8) -> u8 {
    u8::try_from(value.clamp(i64::from(min), i64::from(max))).unwrap_or(min)
}

fn clamp_to_u32(value: i64, min: u32, max: u32) -> u32 {
    u32::try_from(value.clamp(i64::from(min), i64::from(max))).unwrap_or(min)
}

impl ProcessingSettings {
    /// Copy with every numeric field forced into its valid range.
    ///
    /// Out-of-range values degrade to the nearest valid value instead of
    /// failing; a warning is logged when anything changed.
    pub fn clamped(&self) -> Self {
        let mut s = self.clone();

        s.dither.strength = clamp_or(s.dither.strength, 0.0, 100.0, 100.0);
        s.dither.matrix_size = s.dither.bayer_size().size() as i64;
        s.pixel_scale = clamp_or(s.pixel_scale, 1.0, f32::MAX, 1.0);

        s.posterize.levels = i64::from(s.posterize.level_count());

        s.overlay.intensity = clamp_or(s.overlay.intensity, 0.0, 100.0, 0.0);
        s.overlay.density = i64::from(clamp_to_u32(s.overlay.density, MIN_DENSITY, MAX_DENSITY));
        s.overlay.size_min = clamp_or(s.overlay.size_min, 1.0, f32::MAX, 1.0);
        s.overlay.size_max = clamp_or(s.overlay.size_max, 1.0, f32::MAX, 1.0);
        s.overlay.softness = clamp_or(s.overlay.softness, 0.0, 100.0, 50.0);

        s.noise.amount = clamp_or(s.noise.amount, 0.0, f32::MAX, 0.0);
        s.original_blend = clamp_or(s.original_blend, 0.0, 100.0, 0.0);

        if s != *self {
            tracing::warn!("processing settings out of range, clamped to valid values");
        }
        s
    }
}
