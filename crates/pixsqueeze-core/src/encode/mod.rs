//! Image encoding pipeline for Pixsqueeze.
//!
//! This module provides functionality for:
//! - Encoding RGBA pixel data to JPEG, PNG or WebP
//! - Mapping the engine's canvas-style quality domain [0.01, 1.0] onto each
//!   codec's native quality scale
//!
//! # Architecture
//!
//! The encoding pipeline is designed to be used from Web Workers via WASM
//! bindings. All operations are synchronous and single-threaded within WASM.
//! Encoding is deterministic for a fixed (pixels, dimensions, quality) triple,
//! which the quality search relies on.
//!
//! # Examples
//!
//! ```ignore
//! use pixsqueeze_core::encode::encode;
//! use pixsqueeze_core::{decode::SourceImage, OutputFormat};
//!
//! let image = SourceImage::new(100, 100, vec![128u8; 100 * 100 * 4]);
//! let jpeg_bytes = encode(&image, OutputFormat::Jpeg, 0.95).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;
mod png;
mod webp;

pub use self::jpeg::encode_jpeg;
pub use self::png::encode_png;
// `self::` disambiguates the module from the webp crate
pub use self::webp::encode_webp;

use thiserror::Error;

use crate::decode::SourceImage;
use crate::OutputFormat;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying codec could not produce output
    #[error("{format} encoding failed: {reason}")]
    EncodingFailed { format: &'static str, reason: String },
}

/// Encode an image in the requested format.
///
/// `quality` is in the engine's [0.01, 1.0] domain and is ignored for PNG,
/// which is always lossless.
pub fn encode(
    image: &SourceImage,
    format: OutputFormat,
    quality: f32,
) -> Result<Vec<u8>, EncodeError> {
    match format {
        OutputFormat::Jpeg => encode_jpeg(&image.pixels, image.width, image.height, quality),
        OutputFormat::Png => encode_png(&image.pixels, image.width, image.height),
        OutputFormat::Webp => encode_webp(&image.pixels, image.width, image.height, quality),
    }
}

/// Validate dimensions and RGBA buffer length before handing off to a codec.
fn validate_input(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 4;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    Ok(())
}

/// Map a quality in [0.01, 1.0] onto the 1-100 scale JPEG and WebP use.
fn quality_to_percent(quality: f32) -> f32 {
    (quality * 100.0).clamp(1.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_dispatches_all_formats() {
        let image = SourceImage::new(16, 16, vec![200u8; 16 * 16 * 4]);

        let jpeg = encode(&image, OutputFormat::Jpeg, 0.9).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);

        let png = encode(&image, OutputFormat::Png, 0.9).unwrap();
        assert_eq!(&png[0..4], &[0x89, b'P', b'N', b'G']);

        let webp = encode(&image, OutputFormat::Webp, 0.9).unwrap();
        assert_eq!(&webp[0..4], b"RIFF");
    }

    #[test]
    fn test_validate_input_rejects_zero_area() {
        assert!(matches!(
            validate_input(&[], 0, 10),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            validate_input(&[], 10, 0),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_validate_input_rejects_bad_length() {
        let pixels = vec![0u8; 10 * 10 * 4 - 1];
        assert!(matches!(
            validate_input(&pixels, 10, 10),
            Err(EncodeError::InvalidPixelData { .. })
        ));
    }

    #[test]
    fn test_quality_to_percent() {
        assert_eq!(quality_to_percent(1.0), 100.0);
        assert_eq!(quality_to_percent(0.5), 50.0);
        // The engine's minimum quality 0.01 maps onto the codec minimum
        assert_eq!(quality_to_percent(0.01), 1.0);
        // Out-of-domain values are clamped rather than rejected
        assert_eq!(quality_to_percent(0.0), 1.0);
        assert_eq!(quality_to_percent(2.0), 100.0);
    }
}
