//! RGBA raster buffer and its validation errors.

mod raster;

pub use raster::{RasterError, RasterImage};
