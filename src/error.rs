use raster_stylize::PipelineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported PNG layout: {0}")]
    UnsupportedFormat(String),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_stylize::PaletteError;

    #[test]
    fn test_render_error_png_decode() {
        let error = RenderError::PngDecode("bad signature".to_string());
        assert_eq!(error.to_string(), "PNG decode error: bad signature");
    }

    #[test]
    fn test_render_error_png_encode() {
        let error = RenderError::PngEncode("Encoding failed".to_string());
        assert_eq!(error.to_string(), "PNG encode error: Encoding failed");
    }

    #[test]
    fn test_render_error_unsupported() {
        let error = RenderError::UnsupportedFormat("16-bit".to_string());
        assert_eq!(error.to_string(), "Unsupported PNG layout: 16-bit");
    }

    #[test]
    fn test_render_error_from_pipeline_error() {
        let error: RenderError = PipelineError::NoImageLoaded.into();
        assert_eq!(error.to_string(), "Pipeline error: no image loaded");

        let error: RenderError = PipelineError::from(PaletteError::TooFewColors {
            count: 1,
            min: 2,
        })
        .into();
        match error {
            RenderError::Pipeline(PipelineError::Palette(_)) => {}
            _ => panic!("Expected Pipeline(Palette) variant"),
        }
    }

    #[test]
    fn test_render_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.png");
        let error: RenderError = io.into();
        assert_eq!(error.to_string(), "IO error: missing.png");
    }
}
