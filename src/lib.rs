//! Deterministic pseudo-random number generator built on Speck128/128.
//!
//! The generator runs the Speck128/128 block transform in output-feedback
//! mode: each extraction re-encrypts the previous 16-byte state under a fixed
//! key and emits the first byte of the result. Words are assembled from four
//! such bytes, most significant first.
//!
//! # Architecture
//!
//! ```text
//! round           (x, y, k) → (x', y')  — ror 8, add, xor; rol 3, xor
//!     ↓
//! KeySchedule     16-byte key → 32 subkeys (two-word recurrence)
//!     ↓
//! BlockTransform  16-byte block → 16-byte block (32 rounds)
//!     ↓
//! SpeckRng        state ← transform(state); emit state[0]
//! ```
//!
//! Key and IV are always injected by the caller. [`entropy`] draws them from
//! the OS when reproducibility is not wanted.
//!
//! # Examples
//!
//! Reproducible stream from fixed buffers:
//!
//! ```
//! use speckrand::SpeckRng;
//!
//! let mut rng = SpeckRng::new(&[0u8; 16], &[0u8; 16]).unwrap();
//! assert_eq!(rng.generate_byte(), 0x76);
//! ```
//!
//! Unpredictable stream, usable anywhere a `rand_core::RngCore` is expected:
//!
//! ```
//! use rand_core::RngCore;
//! use speckrand::SpeckRng;
//!
//! let mut rng = SpeckRng::from_entropy().unwrap();
//! let mut buf = [0u8; 32];
//! rng.fill_bytes(&mut buf);
//! let _ = rng.next_u32();
//! ```

#![deny(clippy::all)]

pub mod entropy;
pub mod error;
pub mod speck;

mod generator;
pub(crate) mod utils;

pub use error::SpeckRandError;
pub use generator::{Phase, SpeckRng};
