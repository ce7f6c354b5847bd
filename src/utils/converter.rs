//! Block-to-word conversion utilities.
//!
//! A Speck128 block is two 64-bit words stored little-endian, `x` in bytes
//! 0..8 and `y` in bytes 8..16. The master key uses the same layout.

use crate::error::SpeckRandError;

/// Size in bytes of one block (and of the master key).
pub(crate) const BLOCK_BYTES: usize = 16;

/// Size in bytes of one word.
pub(crate) const WORD_BYTES: usize = 8;

/// Splits a 16-byte block into its `(x, y)` little-endian words.
pub(crate) fn block_to_words(block: &[u8; BLOCK_BYTES]) -> (u64, u64) {
    let mut x = [0u8; WORD_BYTES];
    let mut y = [0u8; WORD_BYTES];
    x.copy_from_slice(&block[..WORD_BYTES]);
    y.copy_from_slice(&block[WORD_BYTES..]);
    (u64::from_le_bytes(x), u64::from_le_bytes(y))
}

/// Serializes `(x, y)` back into a 16-byte block, `x` first, little-endian.
pub(crate) fn words_to_block(x: u64, y: u64) -> [u8; BLOCK_BYTES] {
    let mut block = [0u8; BLOCK_BYTES];
    block[..WORD_BYTES].copy_from_slice(&x.to_le_bytes());
    block[WORD_BYTES..].copy_from_slice(&y.to_le_bytes());
    block
}

/// Copies a caller-supplied block slice into a fixed-size array.
///
/// # Errors
/// Returns [`SpeckRandError::InvalidBlockLength`] if `input.len() != 16`.
pub(crate) fn to_block(input: &[u8]) -> Result<[u8; BLOCK_BYTES], SpeckRandError> {
    <[u8; BLOCK_BYTES]>::try_from(input).map_err(|_| SpeckRandError::InvalidBlockLength {
        expected: BLOCK_BYTES,
        actual: input.len(),
    })
}

/// Copies a caller-supplied master key slice into a fixed-size array.
///
/// # Errors
/// Returns [`SpeckRandError::InvalidKeyLength`] if `input.len() != 16`.
pub(crate) fn to_key(input: &[u8]) -> Result<[u8; BLOCK_BYTES], SpeckRandError> {
    <[u8; BLOCK_BYTES]>::try_from(input).map_err(|_| SpeckRandError::InvalidKeyLength {
        expected: BLOCK_BYTES,
        actual: input.len(),
    })
}
