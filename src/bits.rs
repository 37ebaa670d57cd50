/// Largest supported bit width.
///
/// Patterns, monomials and flip masks are `u64` bitmasks, so widths are capped
/// one short of the word size to keep `1 << n` well-defined.
pub const MAX_WIDTH: u32 = 63;

/// Mask with the low `n` bits set.
///
/// ```
/// use qrom_rs::bits::width_mask;
///
/// assert_eq!(width_mask(1), 0b1);
/// assert_eq!(width_mask(4), 0b1111);
/// ```
///
/// # Panics
///
/// Panics if `n` is not in the range `1..=63`.
pub fn width_mask(n: u32) -> u64 {
    assert!(
        (1..=MAX_WIDTH).contains(&n),
        "Bit width should be in the range 1..=63"
    );
    (1u64 << n) - 1
}

/// Split `x` into the positions of its 0-bits and 1-bits within an `n`-bit window.
///
/// Positions are counted from the least significant bit. Both lists are
/// ascending and together cover `0..n` exactly, so leading zeros up to the
/// fixed width are reported even when `x` itself is short.
///
/// ```
/// use qrom_rs::bits::bit_positions;
///
/// let (zeros, ones) = bit_positions(0b0110, 4);
/// assert_eq!(zeros, vec![0, 3]);
/// assert_eq!(ones, vec![1, 2]);
/// ```
///
/// # Panics
///
/// Panics if `n` is out of `1..=63` or `x` does not fit in `n` bits.
pub fn bit_positions(x: u64, n: u32) -> (Vec<usize>, Vec<usize>) {
    assert!(
        x <= width_mask(n),
        "Value {:#b} does not fit in {} bits",
        x,
        n
    );

    let mut zeros = Vec::new();
    let mut ones = Vec::new();
    for i in 0..n as usize {
        if (x >> i) & 1 == 1 {
            ones.push(i);
        } else {
            zeros.push(i);
        }
    }
    (zeros, ones)
}

/// Ascending positions of the 1-bits of `x` within an `n`-bit window.
///
/// Shorthand for the second half of [`bit_positions`]; this is what the gate
/// emitter consumes (flip indices and monomial controls).
///
/// # Panics
///
/// Panics if `n` is out of `1..=63` or `x` does not fit in `n` bits.
pub fn one_positions(x: u64, n: u32) -> Vec<usize> {
    assert!(
        x <= width_mask(n),
        "Value {:#b} does not fit in {} bits",
        x,
        n
    );
    (0..n as usize).filter(|&i| (x >> i) & 1 == 1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_mask() {
        assert_eq!(width_mask(1), 1);
        assert_eq!(width_mask(2), 3);
        assert_eq!(width_mask(8), 255);
        assert_eq!(width_mask(63), u64::MAX >> 1);
    }

    #[test]
    #[should_panic(expected = "Bit width should be in the range 1..=63")]
    fn test_width_mask_zero_panics() {
        width_mask(0);
    }

    #[test]
    #[should_panic(expected = "Bit width should be in the range 1..=63")]
    fn test_width_mask_too_wide_panics() {
        width_mask(64);
    }

    #[test]
    fn test_bit_positions() {
        // x        n   zeros      ones
        // ---------------------------------
        // 0b0      1   [0]        []
        // 0b1      1   []         [0]
        // 0b01     2   [1]        [0]
        // 0b0110   4   [0, 3]     [1, 2]
        // 0b1111   4   []         [0..4]
        assert_eq!(bit_positions(0b0, 1), (vec![0], vec![]));
        assert_eq!(bit_positions(0b1, 1), (vec![], vec![0]));
        assert_eq!(bit_positions(0b01, 2), (vec![1], vec![0]));
        assert_eq!(bit_positions(0b0110, 4), (vec![0, 3], vec![1, 2]));
        assert_eq!(bit_positions(0b1111, 4), (vec![], vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_bit_positions_fixed_width() {
        // The window is `n`, not the natural length of `x`.
        assert_eq!(bit_positions(1, 3), (vec![1, 2], vec![0]));
        assert_eq!(bit_positions(0, 4), (vec![0, 1, 2, 3], vec![]));
    }

    #[test]
    fn test_bit_positions_cover_window() {
        for x in 0..32 {
            let (zeros, ones) = bit_positions(x, 5);
            assert_eq!(zeros.len() + ones.len(), 5);
            let mut all: Vec<usize> = zeros.iter().chain(ones.iter()).copied().collect();
            all.sort();
            assert_eq!(all, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    #[should_panic(expected = "does not fit in 2 bits")]
    fn test_bit_positions_wide_value_panics() {
        bit_positions(0b100, 2);
    }

    #[test]
    fn test_one_positions() {
        assert_eq!(one_positions(0b0, 3), vec![]);
        assert_eq!(one_positions(0b101, 3), vec![0, 2]);
        for x in 0..16 {
            assert_eq!(one_positions(x, 4), bit_positions(x, 4).1);
        }
    }
}
