//! Configuration loading tests against real files.

mod common;

use common::fixtures;
use pretty_assertions::assert_eq;
use raster_stylize::{BlendMode, DitherKind, PosterizeMode, Rgb};
use stylizer::models::AppConfig;

#[test]
fn test_load_full_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stylizer.yaml");
    std::fs::write(&path, fixtures::FULL_CONFIG).unwrap();

    let config = AppConfig::load_from_path(&path);
    assert_eq!(config.palette.len(), 4);
    assert_eq!(config.settings.dither.kind, DitherKind::Atkinson);
    assert_eq!(config.settings.posterize.mode, PosterizeMode::Artistic);
    assert_eq!(config.settings.overlay.blend_mode, BlendMode::SoftLight);
    assert_eq!(config.settings.seed, Some(1234));
}

#[test]
fn test_invalid_yaml_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "settings: [this is: not, a map").unwrap();

    assert_eq!(AppConfig::load_from_path(&path), AppConfig::default());
}

#[test]
fn test_unknown_dither_kind_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unknown.yaml");
    std::fs::write(&path, "settings:\n  dither:\n    kind: halftone\n").unwrap();

    assert_eq!(AppConfig::load_from_path(&path), AppConfig::default());
}

#[test]
fn test_written_default_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("default.yaml");
    std::fs::write(&path, AppConfig::default().to_yaml().unwrap()).unwrap();

    let config = AppConfig::load_from_path(&path);
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.palette().unwrap().colors(), &[Rgb::BLACK, Rgb::WHITE]);
}

#[test]
fn test_out_of_range_integers_keep_rest_of_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wide.yaml");
    std::fs::write(
        &path,
        "palette: [\"#102030\", \"#f0e0d0\", \"#808080\"]\n\
         settings:\n  dither:\n    kind: ordered\n  posterize:\n    levels: 300\n  overlay:\n    density: -3\n",
    )
    .unwrap();

    let config = AppConfig::load_from_path(&path);
    assert_eq!(config.palette.len(), 3);
    assert_eq!(config.settings.dither.kind, DitherKind::Ordered);

    let settings = config.settings.clamped();
    assert_eq!(settings.posterize.levels, 16);
    assert_eq!(settings.overlay.density, 5);
}
