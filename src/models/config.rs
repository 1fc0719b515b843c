use raster_stylize::{Palette, PaletteError, ProcessingSettings, Rgb};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration loaded from a YAML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Palette as hex colors, 2 to 5 entries
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Pipeline settings
    #[serde(default)]
    pub settings: ProcessingSettings,
}

fn default_palette() -> Vec<String> {
    vec!["#000000".to_string(), "#ffffff".to_string()]
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults when
    /// the file is missing or malformed
    pub fn load_from_path(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        colors = config.palette.len(),
                        dither = config.settings.dither.kind.as_str(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Render the effective configuration as YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Build the palette; malformed entries become black
    pub fn palette(&self) -> Result<Palette, PaletteError> {
        let colors: Vec<Rgb> = self
            .palette
            .iter()
            .map(|s| Rgb::parse_or_black(s))
            .collect();
        Palette::new(&colors)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            settings: ProcessingSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_stylize::{BlendMode, DitherKind};

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.palette, vec!["#000000", "#ffffff"]);
        assert_eq!(config.settings, ProcessingSettings::default());

        let palette = config.palette().unwrap();
        assert_eq!(palette.colors(), &[Rgb::BLACK, Rgb::WHITE]);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r##"
palette: ["#000000", "#ffffff", "#ff0000"]
settings:
  dither:
    kind: ordered
    matrix-size: 2
  overlay:
    enabled: true
    blend-mode: multiply
  seed: 42
"##;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.palette.len(), 3);
        assert_eq!(config.settings.dither.kind, DitherKind::Ordered);
        assert_eq!(config.settings.overlay.blend_mode, BlendMode::Multiply);
        assert_eq!(config.settings.seed, Some(42));
        assert!(!config.settings.noise.enabled);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = AppConfig::from_yaml("settings:\n  pixel-scale: 2.0\n").unwrap();
        assert_eq!(config.palette, default_palette());
        assert_eq!(config.settings.pixel_scale, 2.0);
    }

    #[test]
    fn test_malformed_palette_entry_becomes_black() {
        let config = AppConfig {
            palette: vec!["#ffffff".to_string(), "not-a-color".to_string()],
            ..Default::default()
        };
        let palette = config.palette().unwrap();
        assert_eq!(palette.colors(), &[Rgb::WHITE, Rgb::BLACK]);
    }

    #[test]
    fn test_single_color_palette_rejected() {
        let config = AppConfig {
            palette: vec!["#123456".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            config.palette(),
            Err(PaletteError::TooFewColors { count: 1, .. })
        ));
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = AppConfig::default();
        config.settings.noise.enabled = true;
        config.settings.seed = Some(5);
        let yaml = config.to_yaml().unwrap();
        assert_eq!(AppConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_load_from_missing_path_falls_back() {
        let config = AppConfig::load_from_path(Path::new("/nonexistent/stylizer.yaml"));
        assert_eq!(config, AppConfig::default());
    }
}
