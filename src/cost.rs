use crate::anf::Anf;

impl Anf {
    /// Total control-point count of the polynomial's gate realization.
    ///
    /// Each non-constant monomial becomes one conditional-NOT controlled by
    /// the carriers of its set bits, so it contributes its popcount; the
    /// constant monomial becomes an unconditional NOT and contributes 0.
    /// This sum is the quantity the flip search minimizes.
    ///
    /// ```
    /// use qrom_rs::anf::Anf;
    ///
    /// // 1 ^ x0 ^ x1 ^ x0*x1: 0 + 1 + 1 + 2 control points
    /// assert_eq!(Anf::reduce([0], 2).cost(), 4);
    /// ```
    pub fn cost(&self) -> u64 {
        self.monomials().map(|m| m.count_ones() as u64).sum()
    }
}

/// Control-point count of the reduced polynomial of a function specification.
///
/// Shorthand for `Anf::reduce(patterns, n).cost()`; this is the score the
/// flip search evaluates once per candidate mask.
///
/// # Panics
///
/// Panics if `n` is out of `1..=63` or any pattern does not fit in `n` bits.
pub fn control_count(patterns: impl IntoIterator<Item = u64>, n: u32) -> u64 {
    Anf::reduce(patterns, n).cost()
}
