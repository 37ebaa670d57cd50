//! Brute-force search over input-inversion masks.
//!
//! Inverting a subset of the inputs before evaluation can make the reduced
//! polynomial of a lookup function much cheaper to realize (fewer control
//! points), without changing the function the final circuit computes: the
//! emitter flips the chosen carriers, applies the monomial gates, and flips
//! them back. The search is exhaustive over all `2^n` masks -- correct by
//! exhaustion, with no pruning or heuristics -- which is fine for the small
//! widths QROM lookup tables use in practice (n up to ~12).

use log::debug;

use crate::bits::width_mask;
use crate::cost::control_count;

/// Best flip mask found by [`optimize_flips`] and its control-point cost.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BestFlip {
    /// Bitmask of the inputs to invert.
    pub mask: u64,
    /// Control-point count of the flipped function's realization.
    pub cost: u64,
}

/// Apply a flip mask to a function specification.
///
/// XOR-ing `mask` into every pattern re-expresses the function over the
/// inverted inputs. XOR is a bijection on the `n`-bit window, so the result
/// is a valid specification of the same width.
pub fn flip_patterns(patterns: &[u64], mask: u64) -> Vec<u64> {
    patterns.iter().map(|&x| x ^ mask).collect()
}

/// Exhaustively search all `2^n` flip masks for the cheapest realization.
///
/// Masks are scanned in ascending order and the incumbent is replaced only by
/// a strictly smaller cost, so among equally cheap masks the smallest one
/// wins. Mask `0` (no flips) seeds the scan, which makes the
/// empty-specification result `BestFlip { mask: 0, cost: 0 }`.
///
/// Each candidate costs one full reduction, `O(4^n * n)` in total.
///
/// ```
/// use qrom_rs::search::optimize_flips;
///
/// // NOT (x0 OR x1) costs 4 unflipped; inverting both inputs brings it to 2.
/// let best = optimize_flips(&[0b00], 2);
/// assert_eq!(best.mask, 0b11);
/// assert_eq!(best.cost, 2);
/// ```
///
/// # Panics
///
/// Panics if `n` is out of `1..=63` or any pattern does not fit in `n` bits.
pub fn optimize_flips(patterns: &[u64], n: u32) -> BestFlip {
    let mask = width_mask(n);
    for &x in patterns {
        assert!(x <= mask, "Pattern {:#b} does not fit in {} bits", x, n);
    }

    let mut best = BestFlip {
        mask: 0,
        cost: control_count(patterns.iter().copied(), n),
    };
    for k in 1..=mask {
        let cost = control_count(patterns.iter().map(|&x| x ^ k), n);
        if cost < best.cost {
            debug!("optimize_flips: flips = {:#b} improve cost to {}", k, cost);
            best = BestFlip { mask: k, cost };
        }
    }

    debug!(
        "optimize_flips: best flips = {:#b} with cost {} (n = {})",
        best.mask, best.cost, n
    );
    best
}

/// Parallel variant of [`optimize_flips`].
///
/// Candidate masks are scored independently across the rayon pool and merged
/// by the minimum of `(cost, mask)`. That key is unique per candidate, so the
/// merge is deterministic regardless of scheduling and agrees exactly with
/// the sequential scan's smallest-mask-among-equal-minima tie-break.
///
/// # Panics
///
/// Panics if `n` is out of `1..=63` or any pattern does not fit in `n` bits.
#[cfg(feature = "parallel")]
pub fn optimize_flips_par(patterns: &[u64], n: u32) -> BestFlip {
    use rayon::prelude::*;

    let mask = width_mask(n);
    for &x in patterns {
        assert!(x <= mask, "Pattern {:#b} does not fit in {} bits", x, n);
    }

    let best = (0..=mask)
        .into_par_iter()
        .map(|k| BestFlip {
            mask: k,
            cost: control_count(patterns.iter().map(|&x| x ^ k), n),
        })
        .min_by_key(|best| (best.cost, best.mask))
        .expect("the mask range is never empty");

    debug!(
        "optimize_flips_par: best flips = {:#b} with cost {} (n = {})",
        best.mask, best.cost, n
    );
    best
}
