//! Pipeline error type.

use thiserror::Error;

use crate::image::RasterError;
use crate::palette::PaletteError;

/// Failures of a pipeline call. Nothing is retried internally and no
/// partial output is produced.
///
/// ```
/// use raster_stylize::{Pipeline, PipelineError, Rgb};
///
/// fn build() -> Result<Pipeline, PipelineError> {
///     Pipeline::from_colors(&[Rgb::BLACK, Rgb::WHITE])
/// }
/// assert!(build().is_ok());
/// ```
#[derive(Debug, Error)]
pub enum PipelineError {
    /// `run` was called before any source raster was loaded.
    #[error("no image loaded")]
    NoImageLoaded,

    #[error("invalid palette: {0}")]
    Palette(#[from] PaletteError),

    #[error("raster error: {0}")]
    Raster(#[from] RasterError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(PipelineError::NoImageLoaded.to_string(), "no image loaded");
        let err: PipelineError = PaletteError::TooFewColors { count: 1, min: 2 }.into();
        assert!(err.to_string().starts_with("invalid palette: "));
    }
}
