//! Lossy WebP encoding via libwebp.
//!
//! The `image` crate's WebP encoder is lossless-only, so the lossy path goes
//! through the `webp` crate's libwebp bindings. Alpha is preserved.

use ::webp::{Encoder, WebPConfig};

use super::{quality_to_percent, validate_input, EncodeError};

/// Encode RGBA pixel data to lossy WebP bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - Quality in [0.01, 1.0]; mapped onto libwebp's 0-100 scale
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for a zero-area request,
/// `EncodeError::InvalidPixelData` for a mismatched buffer length, and
/// `EncodeError::EncodingFailed` if libwebp rejects the input.
pub fn encode_webp(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: f32,
) -> Result<Vec<u8>, EncodeError> {
    validate_input(pixels, width, height)?;

    let mut config = WebPConfig::new().map_err(|_| EncodeError::EncodingFailed {
        format: "WebP",
        reason: "failed to initialize WebPConfig".to_string(),
    })?;
    config.lossless = 0;
    config.quality = quality_to_percent(quality);
    // Method 4 balances speed and compression density
    config.method = 4;

    let encoder = Encoder::from_rgba(pixels, width, height);
    let memory = encoder
        .encode_advanced(&config)
        .map_err(|e| EncodeError::EncodingFailed {
            format: "WebP",
            reason: format!("{e:?}"),
        })?;

    Ok(memory.to_vec())
}
