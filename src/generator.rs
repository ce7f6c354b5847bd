//! GeneratorState: output-feedback keystream over the Speck128 transform.
//!
//! The generator owns a 16-byte state block. Every byte extraction replaces
//! the state with its own encryption under a fixed key and returns the first
//! byte of the result. There is no counter: the next block depends only on
//! the previous one, so the sequence is eventually periodic.

use std::fmt;

use log::debug;
use rand_core::{RngCore, SeedableRng};
use zeroize::Zeroize;

use crate::entropy::{self, IV_BYTES};
use crate::error::SpeckRandError;
use crate::speck::{BlockTransform, KeySchedule, KEY_BYTES};
use crate::utils::converter::{self, BLOCK_BYTES};

/// Lifecycle of a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// State still equals the initial block.
    Initialized,
    /// At least one extraction has been performed.
    Running,
}

/// Deterministic PRNG running Speck128/128 in output-feedback mode.
///
/// Two generators built from the same key and IV produce identical output.
/// Extraction mutates internal state, so an instance shared across threads
/// must be serialized by the caller.
///
/// # Examples
///
/// ```
/// use speckrand::SpeckRng;
///
/// let mut a = SpeckRng::new(&[7u8; 16], &[9u8; 16]).unwrap();
/// let mut b = SpeckRng::new(&[7u8; 16], &[9u8; 16]).unwrap();
/// assert_eq!(a.generate_word(), b.generate_word());
/// ```
#[derive(Clone)]
pub struct SpeckRng {
    transform: BlockTransform,
    state: [u8; BLOCK_BYTES],
    phase: Phase,
    extractions: u64,
}

impl SpeckRng {
    /// Creates a generator from a 16-byte master key and a 16-byte IV.
    ///
    /// # Errors
    /// - [`SpeckRandError::InvalidKeyLength`] if `key.len() != 16`.
    /// - [`SpeckRandError::InvalidBlockLength`] if `iv.len() != 16`.
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self, SpeckRandError> {
        let schedule = KeySchedule::new(key)?;
        let iv = converter::to_block(iv)?;
        Ok(Self::with_schedule(schedule, iv))
    }

    /// Creates a generator from fixed-size key and IV arrays.
    pub fn from_parts(key: &[u8; KEY_BYTES], iv: &[u8; IV_BYTES]) -> Self {
        Self::with_schedule(KeySchedule::from_key(key), *iv)
    }

    /// Creates a generator keyed and seeded from the OS entropy source.
    ///
    /// # Errors
    /// Returns [`SpeckRandError::EntropySource`] if key or IV acquisition fails.
    pub fn from_entropy() -> Result<Self, SpeckRandError> {
        let mut key = entropy::random_key()?;
        let mut iv = entropy::random_iv()?;
        let rng = Self::from_parts(&key, &iv);
        key.zeroize();
        iv.zeroize();
        Ok(rng)
    }

    fn with_schedule(schedule: KeySchedule, iv: [u8; BLOCK_BYTES]) -> Self {
        debug!("speck generator constructed");
        SpeckRng {
            transform: BlockTransform::new(schedule),
            state: iv,
            phase: Phase::Initialized,
            extractions: 0,
        }
    }

    /// Advances the state by one block transform and returns its first byte.
    #[inline]
    pub fn generate_byte(&mut self) -> u8 {
        self.state = self.transform.transform(&self.state);
        self.phase = Phase::Running;
        self.extractions = self.extractions.saturating_add(1);
        self.state[0]
    }

    /// Assembles a 32-bit word from four byte extractions, first byte most
    /// significant.
    pub fn generate_word(&mut self) -> u32 {
        let mut result: u32 = 0;
        for _ in 0..4 {
            result = (result << 8) | u32::from(self.generate_byte());
        }
        result
    }

    /// Fills `dest` with one extracted byte per element.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.generate_byte();
        }
    }

    /// Returns the current state block.
    pub fn state(&self) -> &[u8; BLOCK_BYTES] {
        &self.state
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns how many byte extractions have been performed.
    pub fn extractions(&self) -> u64 {
        self.extractions
    }
}

impl Drop for SpeckRng {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

impl fmt::Debug for SpeckRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeckRng")
            .field("phase", &self.phase)
            .field("extractions", &self.extractions)
            .finish_non_exhaustive()
    }
}

impl RngCore for SpeckRng {
    fn next_u32(&mut self) -> u32 {
        self.generate_word()
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.generate_word());
        let low = u64::from(self.generate_word());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        SpeckRng::fill_bytes(self, dest);
    }
}

impl SeedableRng for SpeckRng {
    /// Master key followed by the initial block.
    type Seed = [u8; KEY_BYTES + IV_BYTES];

    fn from_seed(seed: Self::Seed) -> Self {
        let (key, iv) = seed.split_at(KEY_BYTES);
        let mut key_arr = [0u8; KEY_BYTES];
        let mut iv_arr = [0u8; IV_BYTES];
        key_arr.copy_from_slice(key);
        iv_arr.copy_from_slice(iv);
        let rng = Self::from_parts(&key_arr, &iv_arr);
        key_arr.zeroize();
        iv_arr.zeroize();
        rng
    }
}
