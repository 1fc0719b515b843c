use crate::error::RenderError;
use raster_stylize::RasterImage;
use std::io::Cursor;

/// Decode a PNG into an RGBA8 raster.
///
/// Palette and sub-byte images are expanded and 16-bit channels stripped
/// to 8 bits; grayscale and gray+alpha are widened to RGBA.
pub fn decode_png(bytes: &[u8]) -> Result<RasterImage, RenderError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| RenderError::PngDecode(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| RenderError::PngDecode(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    if info.bit_depth != png::BitDepth::Eight {
        return Err(RenderError::UnsupportedFormat(format!(
            "bit depth {:?}",
            info.bit_depth
        )));
    }

    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Indexed => {
            return Err(RenderError::UnsupportedFormat(
                "indexed color after expansion".to_string(),
            ))
        }
    };

    tracing::debug!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );

    RasterImage::new(info.width as usize, info.height as usize, rgba)
        .map_err(|e| RenderError::PngDecode(e.to_string()))
}

/// Encode an RGBA8 raster as a PNG.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, RenderError> {
    let width = u32::try_from(image.width())
        .map_err(|_| RenderError::UnsupportedFormat(format!("width {}", image.width())))?;
    let height = u32::try_from(image.height())
        .map_err(|_| RenderError::UnsupportedFormat(format!("height {}", image.height())))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(image.data())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_stylize::Rgb;

    /// Encode raw rows with an arbitrary PNG layout.
    fn encode_raw(
        width: u32,
        height: u32,
        color: png::ColorType,
        depth: png::BitDepth,
        plte: Option<&[u8]>,
        data: &[u8],
    ) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(color);
            encoder.set_depth(depth);
            if let Some(plte) = plte {
                encoder.set_palette(plte);
            }
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf
    }

    #[test]
    fn test_encode_has_png_signature() {
        let image = RasterImage::filled(3, 2, Rgb::new(1, 2, 3));
        let png = encode_png(&image).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_then_decode_preserves_pixels() {
        let image = RasterImage::from_fn(5, 4, |x, y| [x as u8 * 50, y as u8 * 60, 7, 200]);
        let decoded = decode_png(&encode_png(&image).unwrap()).unwrap();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_decode_grayscale() {
        let png = encode_raw(
            2,
            1,
            png::ColorType::Grayscale,
            png::BitDepth::Eight,
            None,
            &[10, 240],
        );
        let image = decode_png(&png).unwrap();
        assert_eq!(image.rgba_at(0, 0), [10, 10, 10, 255]);
        assert_eq!(image.rgba_at(1, 0), [240, 240, 240, 255]);
    }

    #[test]
    fn test_decode_gray_alpha() {
        let png = encode_raw(
            1,
            1,
            png::ColorType::GrayscaleAlpha,
            png::BitDepth::Eight,
            None,
            &[99, 33],
        );
        assert_eq!(decode_png(&png).unwrap().rgba_at(0, 0), [99, 99, 99, 33]);
    }

    #[test]
    fn test_decode_rgb() {
        let png = encode_raw(
            1,
            1,
            png::ColorType::Rgb,
            png::BitDepth::Eight,
            None,
            &[1, 2, 3],
        );
        assert_eq!(decode_png(&png).unwrap().rgba_at(0, 0), [1, 2, 3, 255]);
    }

    #[test]
    fn test_decode_indexed_expands_palette() {
        let plte = [255, 0, 0, 0, 0, 255];
        // 1-bit indices: 0, 1 packed in the high bits
        let png = encode_raw(
            2,
            1,
            png::ColorType::Indexed,
            png::BitDepth::One,
            Some(&plte),
            &[0b0100_0000],
        );
        let image = decode_png(&png).unwrap();
        assert_eq!(image.rgb_at(0, 0), Rgb::new(255, 0, 0));
        assert_eq!(image.rgb_at(1, 0), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_decode_sixteen_bit_stripped() {
        let png = encode_raw(
            1,
            1,
            png::ColorType::Grayscale,
            png::BitDepth::Sixteen,
            None,
            &[0xAB, 0xCD],
        );
        assert_eq!(decode_png(&png).unwrap().rgba_at(0, 0), [0xAB, 0xAB, 0xAB, 255]);
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            decode_png(b"definitely not a png"),
            Err(RenderError::PngDecode(_))
        ));
    }
}
