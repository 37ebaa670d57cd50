//! Gate-sequence emission for reduced-polynomial lookup circuits.
//!
//! The emitter drives a caller-owned [`GateSink`]: it inverts the flipped
//! input carriers, appends one gate per monomial of the flipped function's
//! polynomial, and restores the inverted carriers. Register allocation and
//! the physical gate set stay with the host circuit library; this crate only
//! decides *which* gates to append, and in what order.

use log::debug;

use crate::anf::Anf;
use crate::bits::{one_positions, width_mask};
use crate::search::{flip_patterns, optimize_flips};

/// Ordered-append sink for a synthesized gate sequence.
///
/// The host owns `n` single-bit input carriers indexed `0..n` and one output
/// carrier. Calls arrive in application order and must be appended in that
/// order. [`GateList`](crate::circuit::GateList) records the calls for tests
/// and demos; a quantum backend would map them onto its own registers.
pub trait GateSink {
    /// Unconditional NOT on the input carrier `index`.
    fn invert_input(&mut self, index: usize);

    /// Unconditional NOT on the output carrier.
    fn invert_output(&mut self);

    /// NOT on the output carrier, applied only when every listed input
    /// carrier is set. `controls` is ascending and non-empty: the constant
    /// monomial is routed to [`invert_output`](GateSink::invert_output)
    /// instead of a zero-control gate.
    fn conditional_invert(&mut self, controls: &[usize]);
}

/// Input-inversion policy for [`synthesize`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Flips {
    /// Search all `2^n` masks for the cheapest realization.
    Best,
    /// Use the given mask as-is; `Fixed(0)` emits the function unflipped.
    Fixed(u64),
}

/// Summary of one [`synthesize`] run.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Synthesis {
    /// Flip mask actually applied around the monomial gates.
    pub flips: u64,
    /// Control-point count of the emitted sequence.
    pub cost: u64,
}

/// Emit a gate sequence computing the lookup function given by `patterns`.
///
/// The sequence is, in order: a NOT on every input carrier set in the flip
/// mask (ascending), then per monomial of the flipped function's polynomial
/// (ascending) either a NOT on the output (constant monomial) or a
/// conditional NOT controlled by the monomial's carriers, then the same input
/// NOTs again to restore the carriers. With [`Flips::Best`] the mask comes
/// from [`optimize_flips`], so the emitted sequence has the minimal
/// control-point count over all input inversions.
///
/// ```
/// use qrom_rs::circuit::GateList;
/// use qrom_rs::synth::{synthesize, Flips};
///
/// // f = NOT (x0 OR x1), true only on the all-zeros input
/// let patterns = [0b00];
/// let mut gates = GateList::new();
/// let run = synthesize(&patterns, 2, Flips::Best, &mut gates);
///
/// assert_eq!(run.flips, 0b11);
/// assert_eq!(run.cost, 2);
/// assert_eq!(gates.control_count(), 2);
///
/// // The recorded sequence computes f on every input.
/// assert!((0..4).all(|x| gates.evaluate(x, 2) == patterns.contains(&x)));
/// ```
///
/// # Panics
///
/// Panics if `n` is out of `1..=63`, any pattern does not fit in `n` bits,
/// or a fixed flip mask does not fit in `n` bits.
pub fn synthesize(patterns: &[u64], n: u32, flips: Flips, sink: &mut impl GateSink) -> Synthesis {
    let mask = width_mask(n);
    for &x in patterns {
        assert!(x <= mask, "Pattern {:#b} does not fit in {} bits", x, n);
    }

    let flips = match flips {
        Flips::Best => optimize_flips(patterns, n).mask,
        Flips::Fixed(k) => {
            assert!(k <= mask, "Flip mask {:#b} does not fit in {} bits", k, n);
            k
        }
    };
    debug!("synthesize(n = {}, flips = {:#b})", n, flips);

    let flip_inds = one_positions(flips, n);
    let poly = Anf::reduce(flip_patterns(patterns, flips), n);
    debug!("synthesize: poly = {} with cost {}", poly, poly.cost());

    // Invert the flipped inputs for the duration of the monomial block.
    for &i in &flip_inds {
        sink.invert_input(i);
    }

    for m in poly.monomials() {
        if m == 0 {
            // The constant monomial just negates the output.
            sink.invert_output();
        } else {
            sink.conditional_invert(&one_positions(m, n));
        }
    }

    // Restore the inputs.
    for &i in &flip_inds {
        sink.invert_input(i);
    }

    Synthesis {
        flips,
        cost: poly.cost(),
    }
}
