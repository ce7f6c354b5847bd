//! RoundFunction: one Speck128 mixing step.

use crate::utils::bits::{word_left_rotation, word_right_rotation};

/// Right rotation applied to `x` (Speck128 alpha).
pub(crate) const ALPHA: u32 = 8;

/// Left rotation applied to `y` (Speck128 beta).
pub(crate) const BETA: u32 = 3;

/// Applies one round to the word pair `(x, y)` under subkey `k`.
///
/// `x' = (ror(x, 8) + y) ^ k` and `y' = rol(y, 3) ^ x'`, with the addition
/// taken modulo 2^64.
///
/// # Examples
///
/// ```
/// use speckrand::speck::round;
///
/// assert_eq!(round(0, 0, 0), (0, 0));
/// assert_eq!(round(1, 2, 3), (0x0100_0000_0000_0001, 0x0100_0000_0000_0011));
/// ```
#[inline]
pub const fn round(x: u64, y: u64, k: u64) -> (u64, u64) {
    let x = word_right_rotation(x, ALPHA).wrapping_add(y) ^ k;
    let y = word_left_rotation(y, BETA) ^ x;
    (x, y)
}
