//! WASM-compatible wrapper types for compression results.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! Pixsqueeze types, handling the conversion between Rust and JavaScript
//! data representations.

use pixsqueeze_core::CompressionResult;
use wasm_bindgen::prelude::*;

/// A compression result wrapper for JavaScript.
///
/// Wraps the core `CompressionResult` and exposes the encoded bytes, the
/// final dimensions and the outcome flag to JavaScript.
///
/// # Memory Management
///
/// The encoded bytes live in WASM memory. `bytes()` copies them out as a
/// `Uint8Array`; call it once and build a `Blob` from the copy. The `free()`
/// method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsCompressedImage {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
    quality: f32,
    target_met: bool,
}

#[wasm_bindgen]
impl JsCompressedImage {
    /// Get the width of the encoded image in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height of the encoded image in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the size of the encoded output in bytes
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Get the quality the final encode used (1.0 for lossless)
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> f32 {
        self.quality
    }

    /// Whether the encoded size is at or below the requested target.
    /// `false` means the attempt budgets ran out and these bytes are the
    /// best effort.
    #[wasm_bindgen(getter)]
    pub fn target_met(&self) -> bool {
        self.target_met
    }

    /// Returns the encoded bytes as a Uint8Array.
    ///
    /// Note: This creates a copy of the data. Build the download Blob from
    /// this copy rather than calling it repeatedly.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically. Call this to immediately release a large result.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsCompressedImage {
    /// Create a JsCompressedImage from a core CompressionResult.
    pub(crate) fn from_result(result: CompressionResult) -> Self {
        Self {
            bytes: result.bytes,
            width: result.width,
            height: result.height,
            quality: result.quality,
            target_met: result.target_met,
        }
    }
}
