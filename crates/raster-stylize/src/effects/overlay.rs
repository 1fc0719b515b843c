//! Procedural soft-edged overlay ("blobs").
//!
//! Blob geometry is drawn from a caller-supplied [`Rng`], so a seeded
//! generator reproduces the same overlay bit for bit. Rendering happens in
//! two passes: every blob is composited source-over into a transparent
//! single-color layer, then the layer is blended onto the image with the
//! selected [`BlendMode`] at the global intensity.

use std::f32::consts::TAU;

use rand::Rng;

use super::blend::{blend_channel, BlendMode};
use crate::color::{clamp8, Rgb};
use crate::image::RasterImage;

pub const MIN_DENSITY: u32 = 5;
pub const MAX_DENSITY: u32 = 100;

const MIN_POINTS: usize = 6;
const MAX_POINTS: usize = 9;

/// Angular jitter of each control point, in radians.
const ANGLE_JITTER: f32 = 0.3;

/// Line segments per quadratic curve when flattening the outline.
const CURVE_STEPS: usize = 8;

/// Parameters of one overlay pass.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayOptions {
    /// Global opacity, 0 to 100.
    pub intensity: f32,
    /// Number of blobs, clamped to 5..=100.
    pub density: u32,
    pub size_min: f32,
    pub size_max: f32,
    /// Position of the half-alpha gradient stop, 0 to 100 percent of the radius.
    pub softness: f32,
    pub blend_mode: BlendMode,
    pub color: Rgb,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            intensity: 30.0,
            density: 20,
            size_min: 20.0,
            size_max: 80.0,
            softness: 50.0,
            blend_mode: BlendMode::Normal,
            color: Rgb::WHITE,
        }
    }
}

/// One organic blob: a jittered ring of control points around a center.
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    pub center: (f32, f32),
    pub radius: f32,
    /// Alpha at the center, between 0.2 and 0.7.
    pub alpha: f32,
    pub points: Vec<(f32, f32)>,
}

impl Blob {
    /// Closed outline through the midpoints of successive control points,
    /// using each control point as a quadratic control.
    pub fn outline(&self) -> Vec<(f32, f32)> {
        let n = self.points.len();
        if n < 3 {
            return self.points.clone();
        }

        let mid = |a: (f32, f32), b: (f32, f32)| ((a.0 + b.0) * 0.5, (a.1 + b.1) * 0.5);
        let mut outline = Vec::with_capacity(n * CURVE_STEPS);
        let mut start = mid(self.points[n - 1], self.points[0]);

        for i in 0..n {
            let control = self.points[i];
            let end = mid(control, self.points[(i + 1) % n]);
            for step in 0..CURVE_STEPS {
                let t = step as f32 / CURVE_STEPS as f32;
                let u = 1.0 - t;
                outline.push((
                    u * u * start.0 + 2.0 * u * t * control.0 + t * t * end.0,
                    u * u * start.1 + 2.0 * u * t * control.1 + t * t * end.1,
                ));
            }
            start = end;
        }

        outline
    }

    /// Alpha of the 3-stop radial gradient at `distance` from the center:
    /// full alpha at 0, half at `softness` of the radius, zero at the radius.
    pub fn alpha_at(&self, distance: f32, softness: f32) -> f32 {
        let t = distance / self.radius;
        if t >= 1.0 {
            return 0.0;
        }
        let s = softness.clamp(0.0, 1.0);
        let half = self.alpha * 0.5;
        if t < s {
            lerp(self.alpha, half, t / s)
        } else if s >= 1.0 {
            half
        } else {
            lerp(half, 0.0, (t - s) / (1.0 - s))
        }
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Even-odd point-in-polygon test.
fn contains(polygon: &[(f32, f32)], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut j = polygon.len().wrapping_sub(1);
    for (i, &(xi, yi)) in polygon.iter().enumerate() {
        let (xj, yj) = polygon[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Draw blob geometry for a `width` x `height` frame.
///
/// Per blob the draws are, in order: center x, center y, radius, alpha,
/// point count, then an (angle jitter, radial jitter) pair per point.
pub fn generate_blobs<R: Rng + ?Sized>(
    rng: &mut R,
    width: usize,
    height: usize,
    options: &OverlayOptions,
) -> Vec<Blob> {
    let density = options.density.clamp(MIN_DENSITY, MAX_DENSITY);
    let (min_size, max_size) = if options.size_min <= options.size_max {
        (options.size_min, options.size_max)
    } else {
        (options.size_max, options.size_min)
    };

    (0..density)
        .map(|_| {
            let cx = rng.gen::<f32>() * width as f32;
            let cy = rng.gen::<f32>() * height as f32;
            let radius = (min_size + rng.gen::<f32>() * (max_size - min_size)).max(1.0);
            let alpha = 0.2 + rng.gen::<f32>() * 0.5;
            let count = rng.gen_range(MIN_POINTS..=MAX_POINTS);

            let points = (0..count)
                .map(|i| {
                    let jitter = (rng.gen::<f32>() * 2.0 - 1.0) * ANGLE_JITTER;
                    let angle = i as f32 / count as f32 * TAU + jitter;
                    let r = radius * (0.6 + rng.gen::<f32>() * 0.8);
                    (cx + angle.cos() * r, cy + angle.sin() * r)
                })
                .collect();

            Blob {
                center: (cx, cy),
                radius,
                alpha,
                points,
            }
        })
        .collect()
}

/// Transparent single-color layer that blobs are composited into.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayer {
    width: usize,
    height: usize,
    color: Rgb,
    alpha: Vec<f32>,
}

impl OverlayLayer {
    pub fn new(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            width,
            height,
            color,
            alpha: vec![0.0; width * height],
        }
    }

    #[inline]
    pub fn alpha_at(&self, x: usize, y: usize) -> f32 {
        self.alpha[y * self.width + x]
    }

    /// Composite one blob source-over. The layer has a single color, so
    /// only coverage accumulates: `a = a_src + a_dst * (1 - a_src)`.
    pub fn fill_blob(&mut self, blob: &Blob, softness: f32) {
        let outline = blob.outline();
        if outline.len() < 3 || self.width == 0 || self.height == 0 {
            return;
        }

        let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
        let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
        for &(x, y) in &outline {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        if max_x < 0.0 || max_y < 0.0 {
            return;
        }
        let x0 = min_x.floor().max(0.0) as usize;
        let y0 = min_y.floor().max(0.0) as usize;
        let x1 = (max_x.ceil().max(0.0) as usize).min(self.width - 1);
        let y1 = (max_y.ceil().max(0.0) as usize).min(self.height - 1);

        for y in y0..=y1 {
            let py = y as f32 + 0.5;
            for x in x0..=x1 {
                let px = x as f32 + 0.5;
                if !contains(&outline, px, py) {
                    continue;
                }
                let distance = (px - blob.center.0).hypot(py - blob.center.1);
                let src = blob.alpha_at(distance, softness);
                if src <= 0.0 {
                    continue;
                }
                let dst = &mut self.alpha[y * self.width + x];
                *dst = src + *dst * (1.0 - src);
            }
        }
    }

    /// Blend the layer onto `target` with `mode` at `intensity` percent.
    ///
    /// Per channel: `out = base * (1 - ea) + blend(base, color) * ea` where
    /// `ea` is the layer alpha scaled by the intensity. Target alpha is kept.
    pub fn composite_onto(&self, target: &mut RasterImage, mode: BlendMode, intensity: f32) {
        let opacity = (intensity / 100.0).clamp(0.0, 1.0);
        if opacity == 0.0 {
            return;
        }
        let color = self.color.to_bytes();
        for (px, &a) in target.pixels_mut().zip(&self.alpha) {
            let ea = a * opacity;
            if ea <= 0.0 {
                continue;
            }
            for (channel, &over) in px.iter_mut().zip(&color) {
                let blended = blend_channel(*channel, over, mode) as f32;
                *channel = clamp8(*channel as f32 * (1.0 - ea) + blended * ea);
            }
        }
    }
}

/// Generate blobs for `image` and composite them, returning a new raster.
pub fn apply_overlay<R: Rng + ?Sized>(
    image: &RasterImage,
    options: &OverlayOptions,
    rng: &mut R,
) -> RasterImage {
    let (width, height) = (image.width(), image.height());
    let blobs = generate_blobs(rng, width, height, options);
    tracing::debug!(blobs = blobs.len(), mode = options.blend_mode.as_str(), "rendering overlay");

    let softness = options.softness.clamp(0.0, 100.0) / 100.0;
    let mut layer = OverlayLayer::new(width, height, options.color);
    for blob in &blobs {
        layer.fill_blob(blob, softness);
    }

    let mut output = image.clone();
    layer.composite_onto(&mut output, options.blend_mode, options.intensity);
    output
}
