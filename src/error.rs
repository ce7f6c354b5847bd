//! Error types for the speckrand library.

use thiserror::Error;

/// Errors produced by the speckrand library.
///
/// Only construction can fail. Once a [`SpeckRng`](crate::SpeckRng) exists,
/// every extraction is a total operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeckRandError {
    /// Master key buffer is not exactly 16 bytes.
    #[error("Master key must be {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// Block (or IV) buffer is not exactly 16 bytes.
    #[error("Block must be {expected} bytes, got {actual}")]
    InvalidBlockLength { expected: usize, actual: usize },

    /// The OS randomness source could not provide key or IV material.
    #[error("Entropy source failure: {0}")]
    EntropySource(String),
}
