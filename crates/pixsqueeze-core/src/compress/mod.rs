//! Size-targeting compression orchestration.
//!
//! Sequences the pipeline: decode → initial encode → quality search →
//! dimension scaling → result. The engine is best-effort: it always
//! terminates within the fixed attempt budgets (10 quality probes plus 10
//! downscale steps) and returns the last attempt whether or not the target
//! was met, flagging the outcome on the result.
//!
//! Each request is strictly sequential and owns all of its state; independent
//! requests may run concurrently on separate threads or workers without
//! locking.

mod scale;
mod search;

pub use scale::{MAX_SCALE_ATTEMPTS, SCALE_FACTOR};
pub use search::{MAX_QUALITY_ATTEMPTS, SWEET_SPOT_RATIO};

use thiserror::Error;

use crate::decode::{self, FilterType, SourceImage};
use crate::encode;
use crate::{CompressionRequest, DecodeError, EncodeError};

/// Errors that can abort a compression request.
///
/// Failing to reach the target size is not an error; see
/// [`CompressionResult::target_met`].
#[derive(Debug, Error)]
pub enum CompressError {
    /// The source bytes could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// An encode attempt failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Final output of a compression request. Ownership transfers to the caller.
#[derive(Debug, Clone)]
pub struct CompressionResult {
    /// Encoded bytes in the requested format.
    pub bytes: Vec<u8>,
    /// Width of the encoded image.
    pub width: u32,
    /// Height of the encoded image.
    pub height: u32,
    /// Quality the final encode used (1.0 for lossless).
    pub quality: f32,
    /// Whether the encoded size is at or below the target. `false` means
    /// both budgets were exhausted and these bytes are the best effort.
    pub target_met: bool,
}

impl CompressionResult {
    /// Size of the encoded output in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// One encode attempt during the pipeline: the quality and dimensions used
/// and the bytes they produced.
#[derive(Debug)]
struct EncodeAttempt {
    quality: f32,
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl EncodeAttempt {
    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn into_result(self, target: u64) -> CompressionResult {
        let target_met = self.size() <= target;
        CompressionResult {
            bytes: self.bytes,
            width: self.width,
            height: self.height,
            quality: self.quality,
            target_met,
        }
    }
}

/// Compress source image bytes to fit a byte budget.
///
/// Policy, in order:
/// 1. Decode the source.
/// 2. Encode once at native dimensions (quality 0.95 for lossy formats;
///    lossless ignores quality). Done immediately if it fits.
/// 3. Lossy and still over target: binary-search quality at native
///    dimensions.
/// 4. Still over target: shrink dimensions by 10% per step at the fallback
///    quality, re-encoding up to ten times.
///
/// The last attempt is returned either way; `target_met` tells the caller
/// whether the budget was reached.
///
/// # Errors
///
/// Returns `CompressError::Decode` for unreadable source bytes and
/// `CompressError::Encode` if a codec refuses an attempt. Neither is retried.
pub fn compress(
    source_bytes: &[u8],
    request: &CompressionRequest,
) -> Result<CompressionResult, CompressError> {
    let target = request.target_bytes();
    let format = request.output_format;

    let source = decode::decode_image(source_bytes)?;

    // Initial attempt at native dimensions
    let quality = format.initial_quality();
    let bytes = encode::encode(&source, format, quality)?;
    let mut attempt = EncodeAttempt {
        quality,
        width: source.width,
        height: source.height,
        bytes,
    };

    if attempt.size() <= target {
        return Ok(attempt.into_result(target));
    }

    // Quality search at native dimensions; pointless for lossless formats
    if format.is_lossy() {
        let outcome = search::search_quality(target, |q| encode::encode(&source, format, q))?;
        attempt = EncodeAttempt {
            quality: outcome.quality,
            width: source.width,
            height: source.height,
            bytes: outcome.bytes,
        };
    }

    // Downscale fallback: trade resolution for size at a fixed quality
    if attempt.size() > target {
        let fallback = format.fallback_quality();
        let EncodeAttempt {
            quality,
            width,
            height,
            bytes,
        } = attempt;

        let outcome = scale::scale_down(width, height, target, bytes, |w, h| {
            let frame = resample(&source, w, h)?;
            encode::encode(&frame, format, fallback).map_err(CompressError::from)
        })?;

        let scaled = outcome.width != width || outcome.height != height;
        attempt = EncodeAttempt {
            quality: if scaled { fallback } else { quality },
            width: outcome.width,
            height: outcome.height,
            bytes: outcome.bytes,
        };
    }

    Ok(attempt.into_result(target))
}

/// Resample the original source to the given dimensions.
///
/// Always resamples from the full-resolution source so repeated downscale
/// steps do not accumulate interpolation error.
fn resample(source: &SourceImage, width: u32, height: u32) -> Result<SourceImage, CompressError> {
    Ok(decode::resize(source, width, height, FilterType::default())?)
}
