//! Effects applied around the dithering stage.
//!
//! - [`posterize`]: snap tones to 2..=16 levels in one of three modes
//! - [`blend_channel`]: the twelve separable blend modes
//! - [`apply_overlay`]: seeded procedural soft-edged blobs
//! - [`add_noise`]: seeded luminance grain
//! - [`mix`]: linear blend of two rasters
//! - [`downscale_box`] / [`upscale_nearest`]: pixelation
//!
//! Every function here takes its input by reference and returns a fresh
//! raster.

mod blend;
mod mix;
mod noise;
mod overlay;
mod pixelate;
mod posterize;

pub use blend::{blend_channel, BlendMode};
pub use mix::mix;
pub use noise::add_noise;
pub use overlay::{
    apply_overlay, generate_blobs, Blob, OverlayLayer, OverlayOptions, MAX_DENSITY, MIN_DENSITY,
};
pub use pixelate::{downscale_box, pixelated_size, upscale_nearest};
pub use posterize::{posterize, PosterizeMode, MAX_LEVELS, MIN_LEVELS};
