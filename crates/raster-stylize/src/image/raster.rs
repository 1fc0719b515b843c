//! Owned RGBA8 raster.

use thiserror::Error;

use crate::color::Rgb;

/// Errors raised when constructing a [`RasterImage`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    #[error("raster dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("buffer length {actual} does not match {width}x{height}x4 = {expected}")]
    BufferLength {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("raster sizes differ: {left_width}x{left_height} vs {right_width}x{right_height}")]
    SizeMismatch {
        left_width: usize,
        left_height: usize,
        right_width: usize,
        right_height: usize,
    },
}

/// A `width x height` image with row-major RGBA8 pixels.
///
/// The buffer always holds exactly `width * height * 4` bytes and both
/// dimensions are non-zero. Alpha is carried through every stage untouched
/// (except pixelation, which averages it with the color channels) and is
/// treated as opaque by all color math.
///
/// # Example
///
/// ```
/// use raster_stylize::{RasterImage, Rgb};
///
/// let image = RasterImage::filled(3, 2, Rgb::new(10, 20, 30));
/// assert_eq!(image.data().len(), 3 * 2 * 4);
/// assert_eq!(image.rgb_at(2, 1), Rgb::new(10, 20, 30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RasterImage {
    /// Wrap an RGBA8 buffer.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::ZeroDimension`] if either dimension is zero and
    /// [`RasterError::BufferLength`] if `data.len() != width * height * 4`
    /// or that product overflows.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::ZeroDimension { width, height });
        }
        let expected = width.checked_mul(height).and_then(|n| n.checked_mul(4));
        if expected != Some(data.len()) {
            return Err(RasterError::BufferLength {
                width,
                height,
                expected: expected.unwrap_or(usize::MAX),
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build an opaque image from RGB colors in row-major order.
    pub fn from_rgb(width: usize, height: usize, pixels: &[Rgb]) -> Result<Self, RasterError> {
        let data = pixels
            .iter()
            .flat_map(|c| [c.r, c.g, c.b, 255])
            .collect();
        Self::new(width, height, data)
    }

    /// A solid opaque image. Zero dimensions are raised to 1.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        Self::from_fn(width, height, |_, _| [color.r, color.g, color.b, 255])
    }

    /// Build an image by evaluating `f(x, y) -> [r, g, b, a]` for every
    /// pixel. Zero dimensions are raised to 1.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> [u8; 4]) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        let mut data = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Raw RGBA8 bytes, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGBA8 bytes. The length cannot change through a slice,
    /// so the buffer invariant holds.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return its buffer.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Iterate over `[r, g, b, a]` pixels.
    #[inline]
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(4)
    }

    /// Iterate mutably over `[r, g, b, a]` pixels.
    #[inline]
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.data.chunks_exact_mut(4)
    }

    /// Byte offset of pixel `(x, y)`.
    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * 4
    }

    /// RGB of pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn rgb_at(&self, x: usize, y: usize) -> Rgb {
        let i = self.offset(x, y);
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Full RGBA of pixel `(x, y)`.
    #[inline]
    pub fn rgba_at(&self, x: usize, y: usize) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Overwrite the RGB of pixel `(x, y)`, keeping its alpha.
    #[inline]
    pub fn set_rgb(&mut self, x: usize, y: usize, color: Rgb) {
        let i = self.offset(x, y);
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
    }

    /// Apply `f` to the RGB of every pixel, keeping alpha.
    pub fn map_rgb(&mut self, mut f: impl FnMut(Rgb) -> Rgb) {
        for px in self.data.chunks_exact_mut(4) {
            let out = f(Rgb::new(px[0], px[1], px[2]));
            px[0] = out.r;
            px[1] = out.g;
            px[2] = out.b;
        }
    }

    /// Whether the two images share dimensions.
    #[inline]
    pub fn same_size(&self, other: &RasterImage) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Error unless `other` has the same dimensions.
    pub fn ensure_same_size(&self, other: &RasterImage) -> Result<(), RasterError> {
        if self.same_size(other) {
            Ok(())
        } else {
            Err(RasterError::SizeMismatch {
                left_width: self.width,
                left_height: self.height,
                right_width: other.width,
                right_height: other.height,
            })
        }
    }
}
