//! Iterative dimension downscaling.
//!
//! Runs when quality adjustment alone cannot reach the target (or the format
//! has no quality axis). Width and height shrink by 10% per step, flooring to
//! whole pixels, and the image is re-encoded at a fixed fallback quality.
//! This stage trades resolution, not quality, for size.

/// Maximum number of downscale re-encodes.
pub const MAX_SCALE_ATTEMPTS: u32 = 10;

/// Per-step dimension multiplier.
pub const SCALE_FACTOR: f64 = 0.9;

/// Result of the scaling stage: final dimensions and their encode.
#[derive(Debug)]
pub(crate) struct ScaleOutcome {
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

/// Next downscale step: both edges ×0.9, floored to whole pixels.
pub(crate) fn next_dimensions(width: u32, height: u32) -> (u32, u32) {
    (
        (width as f64 * SCALE_FACTOR).floor() as u32,
        (height as f64 * SCALE_FACTOR).floor() as u32,
    )
}

/// Shrink dimensions until the encode fits the target or budgets run out.
///
/// `initial` is the best encode so far at `width`×`height`; it is returned
/// unchanged if it already fits. `encode_at` resamples the original source to
/// the given dimensions and encodes at the fallback quality. The loop stops
/// early if another step would floor a dimension to zero, keeping the last
/// non-degenerate attempt.
pub(crate) fn scale_down<F, E>(
    width: u32,
    height: u32,
    target: u64,
    initial: Vec<u8>,
    mut encode_at: F,
) -> Result<ScaleOutcome, E>
where
    F: FnMut(u32, u32) -> Result<Vec<u8>, E>,
{
    let mut outcome = ScaleOutcome {
        width,
        height,
        bytes: initial,
    };
    let mut attempt = 0;

    while outcome.bytes.len() as u64 > target && attempt < MAX_SCALE_ATTEMPTS {
        let (next_width, next_height) = next_dimensions(outcome.width, outcome.height);
        if next_width == 0 || next_height == 0 {
            break;
        }

        let bytes = encode_at(next_width, next_height)?;
        outcome = ScaleOutcome {
            width: next_width,
            height: next_height,
            bytes,
        };
        attempt += 1;
    }

    Ok(outcome)
}
