//! OS entropy collaborator for key and IV acquisition.
//!
//! The generator core never reaches for randomness by itself; callers that
//! want an unpredictable stream fetch a key and an IV here and pass them to
//! [`SpeckRng::new`](crate::SpeckRng::new). A failure is reported once and
//! never retried.

use log::warn;

use crate::error::SpeckRandError;
use crate::speck::KEY_BYTES;

/// Size in bytes of an initial block.
pub const IV_BYTES: usize = 16;

/// Fills `buf` from the operating system CSPRNG.
///
/// # Errors
/// Returns [`SpeckRandError::EntropySource`] if the OS source fails.
pub fn fill(buf: &mut [u8]) -> Result<(), SpeckRandError> {
    getrandom::fill(buf).map_err(|e| {
        warn!("entropy source failed: {}", e);
        SpeckRandError::EntropySource(e.to_string())
    })
}

/// Draws a fresh 16-byte master key.
///
/// # Errors
/// Returns [`SpeckRandError::EntropySource`] if the OS source fails.
pub fn random_key() -> Result<[u8; KEY_BYTES], SpeckRandError> {
    let mut key = [0u8; KEY_BYTES];
    fill(&mut key)?;
    Ok(key)
}

/// Draws a fresh 16-byte initial block.
///
/// # Errors
/// Returns [`SpeckRandError::EntropySource`] if the OS source fails.
pub fn random_iv() -> Result<[u8; IV_BYTES], SpeckRandError> {
    let mut iv = [0u8; IV_BYTES];
    fill(&mut iv)?;
    Ok(iv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_key_and_iv_differ() {
        let key = random_key().unwrap();
        let iv = random_iv().unwrap();
        // 2^-128 chance of a false failure.
        assert_ne!(key, iv);
    }

    #[test]
    fn test_fill_empty() {
        assert!(fill(&mut []).is_ok());
    }
}
