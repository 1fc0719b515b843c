//! Palette types and utilities
//!
//! This module provides the validated [`Palette`] type together with the
//! error types for color parsing and palette validation.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, MAX_COLORS, MIN_COLORS};
