//! JPEG encoding using the `image` crate's JPEG encoder.
//!
//! JPEG has no alpha channel, so the RGBA input is flattened by dropping the
//! alpha byte of each pixel before encoding.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;

use super::{quality_to_percent, validate_input, EncodeError};

/// Encode RGBA pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - Quality in [0.01, 1.0]; mapped onto the codec's 1-100 scale
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for a zero-area request,
/// `EncodeError::InvalidPixelData` for a mismatched buffer length, and
/// `EncodeError::EncodingFailed` if the codec refuses the input.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: f32,
) -> Result<Vec<u8>, EncodeError> {
    validate_input(pixels, width, height)?;

    let quality = quality_to_percent(quality).round() as u8;

    // Drop the alpha channel; JPEG cannot carry it
    let rgb: Vec<u8> = pixels
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed {
            format: "JPEG",
            reason: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_pixels(width: usize, height: usize) -> Vec<u8> {
        let mut pixels = vec![128u8; width * height * 4];
        for px in pixels.chunks_exact_mut(4) {
            px[3] = 255;
        }
        pixels
    }

    #[test]
    fn test_encode_jpeg_basic() {
        let pixels = gray_pixels(100, 100);

        let jpeg_bytes = encode_jpeg(&pixels, 100, 100, 0.9).unwrap();

        // Check JPEG magic bytes (SOI marker)
        assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8]);

        // Check JPEG ends with EOI marker
        let len = jpeg_bytes.len();
        assert_eq!(&jpeg_bytes[len - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_quality_affects_size() {
        // Gradient image so quality differences show up in the bitstream
        let width = 100usize;
        let height = 100usize;
        let mut pixels = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 255 / width) as u8);
                pixels.push((y * 255 / height) as u8);
                pixels.push(((x + y) * 127 / (width + height)) as u8);
                pixels.push(255);
            }
        }

        let low_q = encode_jpeg(&pixels, 100, 100, 0.1).unwrap();
        let high_q = encode_jpeg(&pixels, 100, 100, 0.95).unwrap();

        assert!(high_q.len() > low_q.len());
    }

    #[test]
    fn test_encode_jpeg_quality_clamping() {
        let pixels = gray_pixels(10, 10);

        // Below the domain floor clamps to the codec minimum
        assert!(encode_jpeg(&pixels, 10, 10, 0.0).is_ok());
        // Above the domain ceiling clamps to the codec maximum
        assert!(encode_jpeg(&pixels, 10, 10, 5.0).is_ok());
    }

    #[test]
    fn test_encode_jpeg_invalid_pixel_data() {
        let pixels = vec![128u8; 99 * 100 * 4]; // One row short

        let result = encode_jpeg(&pixels, 100, 100, 0.9);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_jpeg_zero_dimensions() {
        let result = encode_jpeg(&[], 0, 100, 0.9);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));

        let result = encode_jpeg(&[], 100, 0, 0.9);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_jpeg_single_pixel() {
        let pixels = vec![255, 0, 0, 255]; // Red pixel

        let jpeg_bytes = encode_jpeg(&pixels, 1, 1, 0.9).unwrap();
        assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_jpeg_ignores_alpha_values() {
        // Same RGB, different alpha: the flattened output must be identical
        let opaque = vec![10, 20, 30, 255].repeat(64);
        let transparent = vec![10, 20, 30, 0].repeat(64);

        let a = encode_jpeg(&opaque, 8, 8, 0.9).unwrap();
        let b = encode_jpeg(&transparent, 8, 8, 0.9).unwrap();
        assert_eq!(a, b);
    }
}
