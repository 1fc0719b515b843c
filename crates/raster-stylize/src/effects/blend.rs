//! Photoshop-style separable blend modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Per-channel combination of a base and an overlay value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    SoftLight,
    HardLight,
    ColorDodge,
    ColorBurn,
    Difference,
    Exclusion,
    Lighten,
    Darken,
}

impl BlendMode {
    /// Every mode, in declaration order.
    pub const ALL: [BlendMode; 12] = [
        BlendMode::Normal,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::SoftLight,
        BlendMode::HardLight,
        BlendMode::ColorDodge,
        BlendMode::ColorBurn,
        BlendMode::Difference,
        BlendMode::Exclusion,
        BlendMode::Lighten,
        BlendMode::Darken,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::SoftLight => "soft-light",
            BlendMode::HardLight => "hard-light",
            BlendMode::ColorDodge => "color-dodge",
            BlendMode::ColorBurn => "color-burn",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
            BlendMode::Lighten => "lighten",
            BlendMode::Darken => "darken",
        }
    }

    /// Apply the mode to normalized values in `[0, 1]`.
    pub fn apply(self, base: f32, overlay: f32) -> f32 {
        let (b, o) = (base, overlay);
        match self {
            BlendMode::Normal => o,
            BlendMode::Multiply => b * o,
            BlendMode::Screen => 1.0 - (1.0 - b) * (1.0 - o),
            BlendMode::Overlay => {
                if b < 0.5 {
                    2.0 * b * o
                } else {
                    1.0 - 2.0 * (1.0 - b) * (1.0 - o)
                }
            }
            BlendMode::SoftLight => {
                if o <= 0.5 {
                    b - (1.0 - 2.0 * o) * b * (1.0 - b)
                } else {
                    let d = if b <= 0.25 {
                        ((16.0 * b - 12.0) * b + 4.0) * b
                    } else {
                        b.sqrt()
                    };
                    b + (2.0 * o - 1.0) * (d - b)
                }
            }
            BlendMode::HardLight => {
                if o < 0.5 {
                    2.0 * b * o
                } else {
                    1.0 - 2.0 * (1.0 - b) * (1.0 - o)
                }
            }
            BlendMode::ColorDodge => {
                if o >= 1.0 {
                    1.0
                } else {
                    (b / (1.0 - o)).min(1.0)
                }
            }
            BlendMode::ColorBurn => {
                if o <= 0.0 {
                    0.0
                } else {
                    1.0 - ((1.0 - b) / o).min(1.0)
                }
            }
            BlendMode::Difference => (b - o).abs(),
            BlendMode::Exclusion => b + o - 2.0 * b * o,
            BlendMode::Lighten => b.max(o),
            BlendMode::Darken => b.min(o),
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        BlendMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == name)
            .ok_or_else(|| format!("unknown blend mode: {s}"))
    }
}

/// Blend two 8-bit channel values.
///
/// The formula runs in normalized `[0, 1]` space and the result is scaled
/// back to `0..=255` with rounding.
///
/// ```
/// use raster_stylize::effects::{blend_channel, BlendMode};
///
/// assert_eq!(blend_channel(0, 255, BlendMode::Multiply), 0);
/// assert_eq!(blend_channel(255, 0, BlendMode::Screen), 255);
/// assert_eq!(blend_channel(10, 200, BlendMode::Difference), 190);
/// ```
#[inline]
pub fn blend_channel(base: u8, overlay: u8, mode: BlendMode) -> u8 {
    let v = mode.apply(base as f32 / 255.0, overlay as f32 / 255.0);
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_values() {
        // (mode, f(0,0), f(255,255), f(0,255))
        let expected = [
            (BlendMode::Normal, 0, 255, 255),
            (BlendMode::Multiply, 0, 255, 0),
            (BlendMode::Screen, 0, 255, 255),
            (BlendMode::Overlay, 0, 255, 0),
            (BlendMode::SoftLight, 0, 255, 0),
            (BlendMode::HardLight, 0, 255, 255),
            (BlendMode::ColorDodge, 0, 255, 255),
            (BlendMode::ColorBurn, 0, 255, 0),
            (BlendMode::Difference, 0, 0, 255),
            (BlendMode::Exclusion, 0, 0, 255),
            (BlendMode::Lighten, 0, 255, 255),
            (BlendMode::Darken, 0, 255, 0),
        ];
        assert_eq!(expected.len(), BlendMode::ALL.len());
        for (mode, zero, full, mixed) in expected {
            assert_eq!(blend_channel(0, 0, mode), zero, "{mode} (0, 0)");
            assert_eq!(blend_channel(255, 255, mode), full, "{mode} (255, 255)");
            assert_eq!(blend_channel(0, 255, mode), mixed, "{mode} (0, 255)");
        }
    }

    #[test]
    fn test_named_examples() {
        assert_eq!(blend_channel(0, 255, BlendMode::Multiply), 0);
        assert_eq!(blend_channel(255, 0, BlendMode::Screen), 255);
        assert_eq!(blend_channel(10, 200, BlendMode::Difference), 190);
        assert_eq!(blend_channel(200, 10, BlendMode::Difference), 190);
    }

    #[test]
    fn test_normal_returns_overlay() {
        for base in [0u8, 17, 128, 255] {
            for overlay in [0u8, 99, 200, 255] {
                assert_eq!(blend_channel(base, overlay, BlendMode::Normal), overlay);
            }
        }
    }

    #[test]
    fn test_dodge_and_burn_guards() {
        assert_eq!(BlendMode::ColorDodge.apply(0.3, 1.0), 1.0);
        assert_eq!(BlendMode::ColorBurn.apply(0.7, 0.0), 0.0);
        assert!(BlendMode::ColorDodge.apply(0.9, 0.5) <= 1.0);
        assert!(BlendMode::ColorBurn.apply(0.1, 0.5) >= 0.0);
    }

    #[test]
    fn test_overlay_and_hard_light_are_mirrors() {
        for (b, o) in [(0.2, 0.7), (0.6, 0.3), (0.9, 0.9), (0.1, 0.1)] {
            let overlay = BlendMode::Overlay.apply(b, o);
            let hard = BlendMode::HardLight.apply(o, b);
            assert!((overlay - hard).abs() < 1e-6);
        }
    }

    #[test]
    fn test_soft_light_neutral_at_half() {
        for b in [0.0, 0.1, 0.3, 0.5, 0.8, 1.0] {
            assert!((BlendMode::SoftLight.apply(b, 0.5) - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_multiply_darkens_screen_lightens() {
        for (b, o) in [(40u8, 90u8), (128, 128), (200, 30)] {
            assert!(blend_channel(b, o, BlendMode::Multiply) <= b.min(o));
            assert!(blend_channel(b, o, BlendMode::Screen) >= b.max(o));
        }
    }

    #[test]
    fn test_parse_round_trips_names() {
        for mode in BlendMode::ALL {
            assert_eq!(mode.as_str().parse::<BlendMode>().unwrap(), mode);
        }
        assert_eq!("Soft_Light".parse::<BlendMode>().unwrap(), BlendMode::SoftLight);
        assert!("vivid-light".parse::<BlendMode>().is_err());
    }

    #[test]
    fn test_serde_kebab_case() {
        let mode: BlendMode = serde_yaml::from_str("color-dodge").unwrap();
        assert_eq!(mode, BlendMode::ColorDodge);
        assert_eq!(serde_yaml::to_string(&BlendMode::HardLight).unwrap().trim(), "hard-light");
    }
}
