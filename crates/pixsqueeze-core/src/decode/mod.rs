//! Image decoding pipeline for Pixsqueeze.
//!
//! This module provides functionality for:
//! - Decoding JPEG/PNG/WebP source bytes into an RGBA pixel buffer
//! - EXIF orientation correction (so results match browser-canvas behavior)
//! - Resizing for the dimension-scaling stage of compression
//!
//! # Architecture
//!
//! The decoding pipeline is designed to be used from Web Workers via WASM
//! bindings. All operations are synchronous and single-threaded within WASM.
//!
//! # Examples
//!
//! ```ignore
//! use pixsqueeze_core::decode::{decode_image, SourceImage};
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod image;
mod resize;
mod types;

// `self::` disambiguates the module from the image crate
pub use self::image::{decode_image, decode_image_no_orientation};
pub use self::resize::resize;
pub use self::types::{DecodeError, FilterType, Orientation, SourceImage};
