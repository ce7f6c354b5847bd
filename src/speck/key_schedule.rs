//! KeySchedule: expands a 128-bit master key into 32 round subkeys.
//!
//! Uses the Speck128/128 two-word recurrence. The key holds exactly two
//! words, `k[0]` (bytes 0..8) and `l[0]` (bytes 8..16), and every later
//! subkey is produced by running the round function over that pair with the
//! round index as its subkey:
//!
//! ```text
//! (l[i+1], k[i+1]) = round(l[i], k[i], i)      i = 0..30
//! ```
//!
//! No key material beyond the 16 supplied bytes is ever read.

use std::fmt;

use log::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::round::round;
use crate::error::SpeckRandError;
use crate::utils::converter::{self, BLOCK_BYTES};

/// Number of rounds, and therefore of subkeys.
pub const ROUNDS: usize = 32;

/// Size in bytes of a master key.
pub const KEY_BYTES: usize = BLOCK_BYTES;

/// Immutable sequence of 32 round subkeys derived from one master key.
///
/// The subkeys are wiped from memory when the schedule is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    subkeys: [u64; ROUNDS],
}

impl KeySchedule {
    /// Expands a master key given as a byte slice.
    ///
    /// # Errors
    /// Returns [`SpeckRandError::InvalidKeyLength`] if `key.len() != 16`.
    ///
    /// # Examples
    ///
    /// ```
    /// use speckrand::speck::KeySchedule;
    ///
    /// let schedule = KeySchedule::new(&[0u8; 16]).unwrap();
    /// assert_eq!(schedule.subkeys().len(), 32);
    ///
    /// assert!(KeySchedule::new(&[0u8; 32]).is_err());
    /// ```
    pub fn new(key: &[u8]) -> Result<Self, SpeckRandError> {
        let mut key = converter::to_key(key)?;
        let schedule = Self::from_key(&key);
        key.zeroize();
        Ok(schedule)
    }

    /// Expands a master key that is already known to be 16 bytes.
    pub fn from_key(key: &[u8; KEY_BYTES]) -> Self {
        let (mut k, mut l) = converter::block_to_words(key);
        let mut subkeys = [0u64; ROUNDS];
        subkeys[0] = k;
        for (i, slot) in subkeys.iter_mut().enumerate().skip(1) {
            (l, k) = round(l, k, (i - 1) as u64);
            *slot = k;
        }
        l.zeroize();
        k.zeroize();
        trace!("expanded key schedule ({} subkeys)", ROUNDS);
        KeySchedule { subkeys }
    }

    /// Returns the subkeys in round order.
    pub fn subkeys(&self) -> &[u64; ROUNDS] {
        &self.subkeys
    }
}

impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySchedule")
            .field("rounds", &ROUNDS)
            .finish_non_exhaustive()
    }
}
