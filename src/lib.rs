//! Stylizer - palette-constrained image stylization
//!
//! Command-line shell around the `raster-stylize` pipeline: YAML
//! configuration, PNG decoding and encoding, and rendering.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
