//! Pixsqueeze Core - Size-targeting image compression engine
//!
//! This crate provides the core compression functionality for Pixsqueeze:
//! decoding, resizing, encoding to JPEG/PNG/WebP, and the size-targeting
//! orchestration that searches quality and scales dimensions until the
//! encoded output fits a caller-specified byte budget.

pub mod compress;
pub mod decode;
pub mod encode;

pub use compress::{compress, CompressError, CompressionResult};
pub use decode::{DecodeError, FilterType, SourceImage};
pub use encode::EncodeError;

use serde::{Deserialize, Serialize};

/// Lower bound of the lossy quality domain.
pub const QUALITY_MIN: f32 = 0.01;

/// Upper bound of the lossy quality domain.
pub const QUALITY_MAX: f32 = 1.0;

/// Quality used for the first encode attempt on lossy formats.
pub const INITIAL_QUALITY: f32 = 0.95;

/// Fixed quality used while scaling dimensions down on lossy formats.
/// The scaling stage trades resolution for size; it does not re-search quality.
pub const SCALE_FALLBACK_QUALITY: f32 = 0.5;

/// Unit for a caller-specified target size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeUnit {
    /// Kilobytes (×1024).
    #[serde(rename = "KB")]
    Kb,
    /// Megabytes (×1024×1024).
    #[serde(rename = "MB")]
    Mb,
}

impl SizeUnit {
    /// Number of bytes per unit.
    pub fn bytes(self) -> u64 {
        match self {
            SizeUnit::Kb => 1024,
            SizeUnit::Mb => 1024 * 1024,
        }
    }
}

impl std::str::FromStr for SizeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KB" | "kb" => Ok(SizeUnit::Kb),
            "MB" | "mb" => Ok(SizeUnit::Mb),
            other => Err(format!("Unknown size unit: {other}")),
        }
    }
}

/// Output format for the compressed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JPEG - lossy, no alpha channel.
    Jpeg,
    /// PNG - lossless, alpha preserved; no quality axis.
    Png,
    /// WebP - lossy, alpha preserved.
    Webp,
}

impl OutputFormat {
    /// Whether the format's encoder accepts a variable quality parameter.
    ///
    /// Quality search only applies to lossy formats; PNG can only be made
    /// smaller by shrinking dimensions.
    pub fn is_lossy(self) -> bool {
        !matches!(self, OutputFormat::Png)
    }

    /// Quality for the initial full-resolution encode attempt.
    pub fn initial_quality(self) -> f32 {
        if self.is_lossy() {
            INITIAL_QUALITY
        } else {
            QUALITY_MAX
        }
    }

    /// Quality used during dimension scaling.
    pub fn fallback_quality(self) -> f32 {
        if self.is_lossy() {
            SCALE_FALLBACK_QUALITY
        } else {
            QUALITY_MAX
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both the short names and the MIME types browsers use.
        match s {
            "jpeg" | "jpg" | "image/jpeg" => Ok(OutputFormat::Jpeg),
            "png" | "image/png" => Ok(OutputFormat::Png),
            "webp" | "image/webp" => Ok(OutputFormat::Webp),
            other => Err(format!("Unknown output format: {other}")),
        }
    }
}

/// A single compression request: byte budget plus output format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionRequest {
    /// Target size expressed in `unit`s.
    pub target_size: u32,
    /// Unit the target size is expressed in.
    pub unit: SizeUnit,
    /// Format the output should be encoded in.
    pub output_format: OutputFormat,
}

impl CompressionRequest {
    /// Create a request for the given target size, unit and format.
    pub fn new(target_size: u32, unit: SizeUnit, output_format: OutputFormat) -> Self {
        Self {
            target_size,
            unit,
            output_format,
        }
    }

    /// The byte budget the encoded output should not exceed.
    pub fn target_bytes(&self) -> u64 {
        self.target_size as u64 * self.unit.bytes()
    }
}
