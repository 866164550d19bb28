//! Bounded binary search over lossy quality at fixed dimensions.
//!
//! The search halves the quality interval until an encode lands in the
//! "sweet spot" band (0.9×target, target] or the attempt budget runs out.
//! The band is a heuristic stopping rule rather than a true convergence
//! criterion; it is part of the engine's observable behavior and must not
//! be tuned without noting the change.

use crate::{QUALITY_MAX, QUALITY_MIN};

/// Maximum number of encode attempts the quality search may make.
pub const MAX_QUALITY_ATTEMPTS: u32 = 10;

/// Fraction of the target below which a fitting encode is considered
/// needlessly small and quality is raised instead of accepted.
pub const SWEET_SPOT_RATIO: f64 = 0.9;

/// Result of a quality search: the last quality tried and its encode.
#[derive(Debug)]
pub(crate) struct SearchOutcome {
    pub quality: f32,
    pub bytes: Vec<u8>,
}

/// True when `size` lands in the sweet spot band (0.9×target, target].
pub(crate) fn in_sweet_spot(size: u64, target: u64) -> bool {
    size <= target && size as f64 > target as f64 * SWEET_SPOT_RATIO
}

/// Binary-search quality in [0.01, 1.0] for an encode near the target size.
///
/// `encode_at` encodes the image at the given quality and fixed dimensions.
/// Each attempt halves the interval: an oversized encode lowers the upper
/// bound, an undersized one raises the lower bound. When the budget runs out
/// the last attempt is returned regardless of which side of the target it
/// fell on; the caller decides whether to continue with dimension scaling.
pub(crate) fn search_quality<F, E>(target: u64, mut encode_at: F) -> Result<SearchOutcome, E>
where
    F: FnMut(f32) -> Result<Vec<u8>, E>,
{
    let mut min_quality = QUALITY_MIN;
    let mut max_quality = QUALITY_MAX;
    let mut attempt = 0;

    loop {
        let quality = (min_quality + max_quality) / 2.0;
        let bytes = encode_at(quality)?;
        let size = bytes.len() as u64;
        attempt += 1;

        if in_sweet_spot(size, target) || attempt >= MAX_QUALITY_ATTEMPTS {
            return Ok(SearchOutcome { quality, bytes });
        }

        if size > target {
            max_quality = quality;
        } else {
            min_quality = quality;
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: for any monotone size function whose range brackets the
        /// target, the search lands in the sweet spot within budget.
        ///
        /// Slope is kept within 8× the target so the band is wider than the
        /// quality resolution ten halvings can reach.
        #[test]
        fn prop_search_hits_band_for_bracketing_slopes(
            target in 1_000u64..100_000,
            slope_factor in 1.2f64..8.0,
        ) {
            let slope = target as f64 * slope_factor;
            let outcome = search_quality::<_, ()>(target, |q| {
                Ok(vec![0u8; (q as f64 * slope) as usize])
            }).unwrap();

            let size = outcome.bytes.len() as u64;
            prop_assert!(in_sweet_spot(size, target), "size {} target {}", size, target);
        }

        /// Property: the search never makes more than 10 attempts, whatever
        /// the size function does.
        #[test]
        fn prop_attempt_budget_holds(
            target in 1u64..1_000_000,
            sizes in prop::collection::vec(0usize..2_000_000, 10),
        ) {
            let mut calls = 0usize;
            let _ = search_quality::<_, ()>(target, |_q| {
                let size = sizes[calls.min(sizes.len() - 1)];
                calls += 1;
                Ok(vec![0u8; size])
            });
            prop_assert!(calls as u32 <= MAX_QUALITY_ATTEMPTS);
        }
    }
}
