//! Color types and the integer/float color math shared by every stage.
//!
//! Everything here works on 8-bit sRGB values as they come out of the
//! image buffer. No gamma decoding happens anywhere in the pipeline: the
//! luminance weights and the distance weights operate directly on the
//! encoded channel values.
//!
//! # Example
//!
//! ```
//! use raster_stylize::color::{luminance, Rgb};
//!
//! let orange: Rgb = "#ff8800".parse().unwrap();
//! assert_eq!(luminance(orange.r, orange.g, orange.b), 156);
//! ```

mod metrics;
mod rgb;

pub use metrics::{
    clamp8, distance_squared, index_for_luminance, luminance, nearest, nearest_index,
    sort_by_luminance,
};
pub use rgb::Rgb;
