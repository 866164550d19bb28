//! Pixsqueeze WASM - WebAssembly bindings for Pixsqueeze
//!
//! This crate provides WASM bindings to expose the pixsqueeze-core
//! compression engine to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `compress` - The size-targeting compression entry point
//! - `types` - WASM-compatible wrapper types for compression results
//!
//! # Usage
//!
//! ```typescript
//! import init, { compress } from '@pixsqueeze/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = compress(bytes, { targetSize: 200, unit: 'KB', outputFormat: 'jpeg' });
//! console.log(`Compressed to ${result.size} bytes at ${result.width}x${result.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod types;

// Re-export public types
pub use compress::compress;
pub use types::JsCompressedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
