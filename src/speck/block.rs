//! BlockTransform: 32 rounds of Speck128 over one 16-byte block.
//!
//! Only the forward direction exists. The generator never decrypts, and the
//! transform is not meant as a general-purpose cipher for caller data.

use super::key_schedule::{KeySchedule, KEY_BYTES};
use super::round::round;
use crate::error::SpeckRandError;
use crate::utils::converter::{self, BLOCK_BYTES};

/// Forward Speck128/128 block transform bound to one key schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTransform {
    schedule: KeySchedule,
}

impl BlockTransform {
    /// Creates a transform from an already expanded schedule.
    pub fn new(schedule: KeySchedule) -> Self {
        BlockTransform { schedule }
    }

    /// Expands `key` and creates a transform from it.
    ///
    /// # Errors
    /// Returns [`SpeckRandError::InvalidKeyLength`] if `key.len() != 16`.
    pub fn with_key(key: &[u8]) -> Result<Self, SpeckRandError> {
        Ok(Self::new(KeySchedule::new(key)?))
    }

    /// Creates a transform from a fixed-size key.
    pub fn from_key(key: &[u8; KEY_BYTES]) -> Self {
        Self::new(KeySchedule::from_key(key))
    }

    /// Returns the schedule driving this transform.
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    /// Runs all rounds over the word pair `(x, y)`.
    #[inline]
    pub fn transform_words(&self, mut x: u64, mut y: u64) -> (u64, u64) {
        for &k in self.schedule.subkeys() {
            (x, y) = round(x, y, k);
        }
        (x, y)
    }

    /// Transforms one 16-byte block.
    ///
    /// # Examples
    ///
    /// ```
    /// use speckrand::speck::BlockTransform;
    ///
    /// let transform = BlockTransform::from_key(&[0u8; 16]);
    /// let out = transform.transform(&[0u8; 16]);
    /// assert_eq!(out, transform.transform(&[0u8; 16]));
    /// ```
    #[inline]
    pub fn transform(&self, block: &[u8; BLOCK_BYTES]) -> [u8; BLOCK_BYTES] {
        let (x, y) = converter::block_to_words(block);
        let (x, y) = self.transform_words(x, y);
        converter::words_to_block(x, y)
    }

    /// Transforms a caller-supplied block slice.
    ///
    /// # Errors
    /// Returns [`SpeckRandError::InvalidBlockLength`] if `block.len() != 16`.
    pub fn transform_slice(&self, block: &[u8]) -> Result<[u8; BLOCK_BYTES], SpeckRandError> {
        let block = converter::to_block(block)?;
        Ok(self.transform(&block))
    }
}
