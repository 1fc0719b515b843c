use crate::error::RenderError;
use crate::models::AppConfig;
use crate::rendering::{decode_png, encode_png};
use raster_stylize::{Palette, Pipeline, PipelineError, ProcessingSettings, RasterImage};
use std::path::Path;
use std::time::Instant;

/// Runs the stylization pipeline on PNG input
pub struct RenderService {
    pipeline: Pipeline,
    settings: ProcessingSettings,
}

impl RenderService {
    /// Build from a loaded configuration, validating its palette
    pub fn new(config: &AppConfig) -> Result<Self, RenderError> {
        let palette = config.palette().map_err(PipelineError::from)?;
        Ok(Self::with_palette(palette, config.settings.clone()))
    }

    pub fn with_palette(palette: Palette, settings: ProcessingSettings) -> Self {
        Self {
            pipeline: Pipeline::new(palette),
            settings,
        }
    }

    pub fn palette(&self) -> &Palette {
        self.pipeline.palette()
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.pipeline.set_palette(palette);
    }

    pub fn settings(&self) -> &ProcessingSettings {
        &self.settings
    }

    /// Mutable access for command-line overrides
    pub fn settings_mut(&mut self) -> &mut ProcessingSettings {
        &mut self.settings
    }

    /// Stylize a decoded raster
    pub fn render_image(&mut self, image: RasterImage) -> Result<RasterImage, RenderError> {
        self.pipeline.load_source(image);
        Ok(self.pipeline.run(&self.settings)?)
    }

    /// Decode PNG bytes, stylize, and encode the result as an RGBA PNG
    pub fn render_png(&mut self, input: &[u8]) -> Result<Vec<u8>, RenderError> {
        let start = Instant::now();
        let image = decode_png(input)?;
        let (width, height) = (image.width(), image.height());

        let output = self.render_image(image)?;
        let png = encode_png(&output)?;

        tracing::info!(
            width,
            height,
            bytes = png.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Rendered image"
        );
        Ok(png)
    }

    /// Read `input`, stylize, and write the PNG to `output`
    pub fn render_file(&mut self, input: &Path, output: &Path) -> Result<(), RenderError> {
        let bytes = std::fs::read(input)?;
        let png = self.render_png(&bytes)?;
        std::fs::write(output, png)?;
        Ok(())
    }
}
