//! Box downscale and nearest-neighbor upscale for the pixelated look.

use crate::image::RasterImage;

/// Target size for a downscale by `scale`: `floor(W / scale)` by
/// `floor(H / scale)`, never below 1x1. Scales at or below 1 keep the size.
pub fn pixelated_size(width: usize, height: usize, scale: f32) -> (usize, usize) {
    if scale.is_nan() || scale <= 1.0 {
        return (width, height);
    }
    let shrink = |v: usize| ((v as f32 / scale).floor() as usize).max(1);
    (shrink(width), shrink(height))
}

/// Box-filter downscale by `scale`.
///
/// Each target pixel averages (rounded) all four channels over the source
/// block `[tx*W/tw, (tx+1)*W/tw)`, which always covers at least one pixel.
pub fn downscale_box(image: &RasterImage, scale: f32) -> RasterImage {
    let (w, h) = (image.width(), image.height());
    let (tw, th) = pixelated_size(w, h, scale);
    if (tw, th) == (w, h) {
        return image.clone();
    }

    let span = |t: usize, target: usize, source: usize| {
        let start = t * source / target;
        let end = ((t + 1) * source / target).max(start + 1);
        start..end
    };

    RasterImage::from_fn(tw, th, |tx, ty| {
        let mut sum = [0u32; 4];
        let mut count = 0u32;
        for sy in span(ty, th, h) {
            for sx in span(tx, tw, w) {
                let px = image.rgba_at(sx, sy);
                for (acc, v) in sum.iter_mut().zip(px) {
                    *acc += v as u32;
                }
                count += 1;
            }
        }
        sum.map(|s| ((s + count / 2) / count) as u8)
    })
}

/// Nearest-neighbor upscale to `width` x `height` (hard block edges).
pub fn upscale_nearest(image: &RasterImage, width: usize, height: usize) -> RasterImage {
    let (sw, sh) = (image.width(), image.height());
    if (sw, sh) == (width, height) {
        return image.clone();
    }
    RasterImage::from_fn(width, height, |x, y| {
        let sx = (x * sw / width.max(1)).min(sw - 1);
        let sy = (y * sh / height.max(1)).min(sh - 1);
        image.rgba_at(sx, sy)
    })
}
