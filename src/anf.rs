//! Reduction of a boolean lookup function to its [algebraic normal form][anf].
//!
//! A function f: {0,1}^n -> {0,1} is specified by the patterns on which it
//! evaluates to 1. Read as a minterm, a pattern is a product over all `n`
//! inputs in which the set bits appear plain and the clear bits negated.
//! Substituting `1 - x` for every negated literal and expanding turns each
//! minterm into a sum of numeric monomials; summing all minterms mod 2 cancels
//! every monomial with an even coefficient and leaves the unique minimal
//! XOR-of-ANDs polynomial.
//!
//! # Example
//!
//! ```
//! use qrom_rs::anf::Anf;
//!
//! // f = x0 XOR x1, satisfied by "01" and "10"
//! let poly = Anf::reduce([0b01, 0b10], 2);
//! assert_eq!(poly.to_string(), "x0 ^ x1");
//!
//! // The polynomial reproduces the truth table
//! assert!(!poly.evaluate(0b00));
//! assert!(poly.evaluate(0b01));
//! assert!(poly.evaluate(0b10));
//! assert!(!poly.evaluate(0b11));
//! ```
//!
//! [anf]: https://en.wikipedia.org/wiki/Algebraic_normal_form

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use log::debug;

use crate::bits::width_mask;

/// A boolean function as a fully reduced mod-2 polynomial.
///
/// Each monomial is a bitmask of the variables AND-ed together in that term;
/// `0` encodes the constant monomial `1` (a pure negation term), not "no
/// term". A monomial is present iff its coefficient is 1 mod 2, so the set is
/// never partially reduced. The empty polynomial is the constant-0 function.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Anf {
    n: u32,
    monomials: BTreeSet<u64>,
}

impl Anf {
    /// Reduce a function specification to its minimal mod-2 polynomial.
    ///
    /// `patterns` lists the inputs on which the function is 1. Order is
    /// irrelevant and duplicates are redundant: the patterns form a set, so a
    /// repeated pattern is ignored rather than cancelling itself.
    ///
    /// ```
    /// use qrom_rs::anf::Anf;
    ///
    /// // NOT (x0 AND x1): the x0 and x1 terms cancel out
    /// let poly = Anf::reduce([0b00, 0b01, 0b10], 2);
    /// assert_eq!(poly.monomials().collect::<Vec<_>>(), vec![0b00, 0b11]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `n` is out of `1..=63` or any pattern does not fit in `n`
    /// bits.
    pub fn reduce(patterns: impl IntoIterator<Item = u64>, n: u32) -> Self {
        let mask = width_mask(n);
        let patterns: BTreeSet<u64> = patterns.into_iter().collect();
        debug!("reduce({} patterns, n = {})", patterns.len(), n);

        let mut monomials = BTreeSet::new();
        for &x in &patterns {
            assert!(x <= mask, "Pattern {:#b} does not fit in {} bits", x, n);
            for m in expand_minterm(x, n) {
                toggle(&mut monomials, m);
            }
        }

        debug!("reduce: {} monomials", monomials.len());
        Self { n, monomials }
    }

    /// The bit width the polynomial is defined over.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Number of monomials with coefficient 1.
    pub fn len(&self) -> usize {
        self.monomials.len()
    }

    /// Check whether the polynomial is the constant-0 function.
    pub fn is_empty(&self) -> bool {
        self.monomials.is_empty()
    }

    /// Check whether the monomial `m` has coefficient 1.
    pub fn contains(&self, m: u64) -> bool {
        self.monomials.contains(&m)
    }

    /// Iterator over the monomials in ascending encoding order.
    ///
    /// This is also the order the gate emitter walks, so realizations of the
    /// same polynomial are deterministic.
    pub fn monomials(&self) -> impl Iterator<Item = u64> + '_ {
        self.monomials.iter().copied()
    }

    /// Evaluate the polynomial at one input point.
    ///
    /// A monomial contributes 1 iff all its variables are set in `input`; the
    /// constant monomial `0` always contributes 1. Contributions combine by
    /// XOR.
    ///
    /// # Panics
    ///
    /// Panics if `input` does not fit in the polynomial's width.
    pub fn evaluate(&self, input: u64) -> bool {
        assert!(
            input <= width_mask(self.n),
            "Value {:#b} does not fit in {} bits",
            input,
            self.n
        );
        self.monomials
            .iter()
            .fold(false, |acc, &m| acc ^ (input & m == m))
    }
}

impl<'a> IntoIterator for &'a Anf {
    type Item = u64;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, u64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.monomials.iter().copied()
    }
}

impl Display for Anf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.monomials.is_empty() {
            return write!(f, "0");
        }
        for (k, m) in self.monomials.iter().enumerate() {
            if k > 0 {
                write!(f, " ^ ")?;
            }
            if *m == 0 {
                write!(f, "1")?;
            } else {
                let mut sep = "";
                for i in 0..self.n as usize {
                    if (m >> i) & 1 == 1 {
                        write!(f, "{}x{}", sep, i)?;
                        sep = "*";
                    }
                }
            }
        }
        Ok(())
    }
}

/// Mod-2 accumulation: inserting an already-present monomial removes it.
fn toggle(set: &mut BTreeSet<u64>, m: u64) {
    if !set.insert(m) {
        set.remove(&m);
    }
}

/// Expand one minterm into the monomials of its numeric polynomial.
///
/// `x` encodes a product over all `n` inputs with the set bits plain and the
/// clear bits negated. Expanding the `1 - x` substitutions yields one
/// monomial for every subset of the clear bits added back in, i.e. every
/// `x | s` with `s` a submask of the zero bits -- `2^z` monomials for `z`
/// zero bits.
///
/// ```
/// use qrom_rs::anf::expand_minterm;
///
/// // x1 * (1 - x0) = x1 - x0*x1
/// let mut ms: Vec<u64> = expand_minterm(0b10, 2).collect();
/// ms.sort();
/// assert_eq!(ms, vec![0b10, 0b11]);
/// ```
///
/// # Panics
///
/// Panics if `n` is out of `1..=63` or `x` does not fit in `n` bits.
pub fn expand_minterm(x: u64, n: u32) -> Expansion {
    let mask = width_mask(n);
    assert!(x <= mask, "Pattern {:#b} does not fit in {} bits", x, n);
    let free = !x & mask;
    Expansion {
        base: x,
        free,
        next: Some(free),
    }
}

/// Iterator over the expansion of one minterm, created by [`expand_minterm`].
///
/// Walks the submasks of the minterm's zero bits in descending order using
/// the `s = (s - 1) & free` step, ending with the empty submask (the minterm
/// itself).
#[derive(Debug)]
pub struct Expansion {
    base: u64,
    free: u64,
    next: Option<u64>,
}

impl Iterator for Expansion {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let s = self.next?;
        self.next = if s == 0 { None } else { Some((s - 1) & self.free) };
        Some(self.base | s)
    }
}
