//! Circular bit rotations over 64-bit words.
//!
//! The Speck round rotates both halves of the block by fixed amounts. These
//! helpers treat the shift modulo the word width so that rotating by 0 or by
//! 64 is the identity and no shift ever overflows.

/// Width in bits of one Speck128 word.
pub(crate) const WORD_BITS: u32 = u64::BITS;

/// Rotates a 64-bit word left by `shift` bit positions (circular).
///
/// # Parameters
/// - `value`: The word to rotate.
/// - `shift`: Number of bit positions to rotate, taken modulo 64.
///
/// # Returns
/// The rotated word.
#[inline]
pub(crate) const fn word_left_rotation(value: u64, shift: u32) -> u64 {
    let shift = shift % WORD_BITS;
    if shift == 0 {
        return value;
    }
    (value << shift) | (value >> (WORD_BITS - shift))
}

/// Rotates a 64-bit word right by `shift` bit positions (circular).
///
/// # Parameters
/// - `value`: The word to rotate.
/// - `shift`: Number of bit positions to rotate, taken modulo 64.
///
/// # Returns
/// The rotated word.
#[inline]
pub(crate) const fn word_right_rotation(value: u64, shift: u32) -> u64 {
    let shift = shift % WORD_BITS;
    if shift == 0 {
        return value;
    }
    (value >> shift) | (value << (WORD_BITS - shift))
}
