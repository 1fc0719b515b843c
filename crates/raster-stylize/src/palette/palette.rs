//! Palette struct with a cached luminance-sorted view.

use std::collections::HashSet;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::{nearest_index, sort_by_luminance, Rgb};

/// Smallest palette the quantizers accept.
pub const MIN_COLORS: usize = 2;

/// Largest palette the stylizer accepts.
pub const MAX_COLORS: usize = 5;

/// An ordered set of 2 to 5 distinct colors.
///
/// Caller order is kept for nearest-color search (it decides ties). A
/// luminance-sorted copy is computed once at construction for ordered
/// dithering and palette-mapped posterization; since a `Palette` is
/// immutable, replacing the palette is the only way to change that view.
///
/// # Example
///
/// ```
/// use raster_stylize::{Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::WHITE, Rgb::BLACK]).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.by_luminance(), &[Rgb::BLACK, Rgb::WHITE]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
    by_luminance: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from caller-ordered colors.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::TooFewColors`] for fewer than [`MIN_COLORS`] entries
    /// - [`PaletteError::TooManyColors`] for more than [`MAX_COLORS`] entries
    /// - [`PaletteError::DuplicateColor`] if a color repeats
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.len() < MIN_COLORS {
            return Err(PaletteError::TooFewColors {
                count: colors.len(),
                min: MIN_COLORS,
            });
        }
        if colors.len() > MAX_COLORS {
            return Err(PaletteError::TooManyColors {
                count: colors.len(),
                max: MAX_COLORS,
            });
        }

        let mut seen = HashSet::new();
        for (i, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self {
            colors: colors.to_vec(),
            by_luminance: sort_by_luminance(colors),
        })
    }

    /// Create a palette from hex color strings, failing on the first
    /// malformed entry.
    ///
    /// ```
    /// use raster_stylize::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000", "#FFFFFF", "#FF0000"]).unwrap();
    /// assert_eq!(palette.len(), 3);
    /// ```
    pub fn from_hex(colors: &[&str]) -> Result<Self, PaletteError> {
        let parsed = colors
            .iter()
            .map(|s| Rgb::from_str(s).map_err(PaletteError::ParseColor))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&parsed)
    }

    /// Create a palette from a comma-separated list such as
    /// `"#000000,#FFFFFF,#FF0000"`.
    ///
    /// Malformed entries become black (see [`Rgb::parse_or_black`]); empty
    /// entries are skipped. Size and uniqueness are still validated.
    pub fn parse_list(text: &str) -> Result<Self, PaletteError> {
        let colors: Vec<Rgb> = text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Rgb::parse_or_black)
            .collect();
        Self::new(&colors)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; construction rejects palettes below two colors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors in caller order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Colors sorted ascending by luminance (stable).
    #[inline]
    pub fn by_luminance(&self) -> &[Rgb] {
        &self.by_luminance
    }

    /// The brightest color.
    #[inline]
    pub fn lightest(&self) -> Rgb {
        self.by_luminance
            .last()
            .copied()
            .unwrap_or(Rgb::WHITE)
    }

    /// Whether `color` is one of the palette entries.
    #[inline]
    pub fn contains(&self, color: Rgb) -> bool {
        self.colors.contains(&color)
    }

    /// Nearest palette color to a (possibly out-of-gamut) float color.
    ///
    /// Searches in caller order; the first entry wins ties.
    #[inline]
    pub fn nearest(&self, color: [f32; 3]) -> Rgb {
        self.colors[nearest_index(color, &self.colors)]
    }

    /// Luminance-sorted entry for a luminance value, see
    /// [`index_for_luminance`](crate::color::index_for_luminance).
    #[inline]
    pub fn for_luminance(&self, luminance: f32) -> Rgb {
        let idx = crate::color::index_for_luminance(luminance, self.by_luminance.len());
        self.by_luminance[idx]
    }
}
