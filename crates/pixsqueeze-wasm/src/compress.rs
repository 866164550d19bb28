//! Compression WASM bindings.
//!
//! This module exposes the pixsqueeze-core compression entry point to
//! JavaScript. The settings object mirrors the shape the UI already uses:
//!
//! ```typescript
//! import { compress } from '@pixsqueeze/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = compress(bytes, {
//!   targetSize: 200,
//!   unit: 'KB',
//!   outputFormat: 'jpeg',
//! });
//! const blob = new Blob([result.bytes()], { type: 'image/jpeg' });
//! ```

use pixsqueeze_core::CompressionRequest;
use wasm_bindgen::prelude::*;

use crate::types::JsCompressedImage;

/// Compress source image bytes to fit a byte budget.
///
/// # Arguments
///
/// * `source_bytes` - Encoded source image (JPEG, PNG or WebP) as a
///   `Uint8Array`
/// * `settings` - `{ targetSize: number, unit: "KB"|"MB", outputFormat:
///   "jpeg"|"png"|"webp" }`
///
/// # Returns
///
/// A [`JsCompressedImage`] with the encoded bytes, final dimensions and a
/// `target_met` flag. A `false` flag is not an error: the attempt budgets
/// ran out and the bytes are the best effort.
///
/// # Errors
///
/// Returns an error if the settings object does not match the expected
/// shape, the source bytes are not a decodable image, or a codec refuses
/// an encode attempt.
#[wasm_bindgen]
pub fn compress(source_bytes: &[u8], settings: JsValue) -> Result<JsCompressedImage, JsValue> {
    let request: CompressionRequest = serde_wasm_bindgen::from_value(settings)
        .map_err(|e| JsValue::from_str(&format!("Invalid settings: {e}")))?;

    let result = pixsqueeze_core::compress(source_bytes, &request)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(JsCompressedImage::from_result(result))
}
