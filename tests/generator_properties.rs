//! Property tests for the round function, block transform and generator.

use proptest::prelude::*;
use rand_core::{RngCore, SeedableRng};
use speckrand::speck::{round, BlockTransform};
use speckrand::{Phase, SpeckRng};

proptest! {
    /// Identical inputs always give identical outputs.
    #[test]
    fn round_is_pure(x in any::<u64>(), y in any::<u64>(), k in any::<u64>()) {
        prop_assert_eq!(round(x, y, k), round(x, y, k));
    }

    /// The round is invertible given the subkey, so distinct inputs never
    /// collide under the same subkey.
    #[test]
    fn round_is_injective(x in any::<u64>(), y in any::<u64>(), k in any::<u64>()) {
        let (x1, y1) = round(x, y, k);
        let y0 = (y1 ^ x1).rotate_right(3);
        let x0 = (x1 ^ k).wrapping_sub(y0).rotate_left(8);
        prop_assert_eq!((x0, y0), (x, y));
    }

    #[test]
    fn transform_is_deterministic(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let a = BlockTransform::from_key(&key);
        let b = BlockTransform::with_key(&key).unwrap();
        prop_assert_eq!(a.transform(&block), b.transform(&block));
    }

    /// Same key and IV, same stream.
    #[test]
    fn same_key_and_iv_same_stream(key in any::<[u8; 16]>(), iv in any::<[u8; 16]>()) {
        let mut a = SpeckRng::from_parts(&key, &iv);
        let mut b = SpeckRng::new(&key, &iv).unwrap();
        for _ in 0..64 {
            prop_assert_eq!(a.generate_byte(), b.generate_byte());
        }
    }

    /// Different IVs under one key give different streams.
    #[test]
    fn different_iv_different_stream(
        key in any::<[u8; 16]>(),
        iv_a in any::<[u8; 16]>(),
        iv_b in any::<[u8; 16]>(),
    ) {
        prop_assume!(iv_a != iv_b);
        let mut a = SpeckRng::from_parts(&key, &iv_a);
        let mut b = SpeckRng::from_parts(&key, &iv_b);
        let mut sa = [0u8; 32];
        let mut sb = [0u8; 32];
        a.fill_bytes(&mut sa);
        b.fill_bytes(&mut sb);
        prop_assert_ne!(sa, sb);
    }

    /// Each byte extraction applies exactly one transform and returns
    /// the first byte of the new state.
    #[test]
    fn byte_is_first_byte_of_new_state(key in any::<[u8; 16]>(), iv in any::<[u8; 16]>()) {
        let transform = BlockTransform::from_key(&key);
        let mut rng = SpeckRng::from_parts(&key, &iv);
        let mut expected = iv;
        for n in 1..=8u64 {
            expected = transform.transform(&expected);
            let b = rng.generate_byte();
            prop_assert_eq!(b, rng.state()[0]);
            prop_assert_eq!(rng.state(), &expected);
            prop_assert_eq!(rng.extractions(), n);
        }
    }

    /// A word is the four next bytes, most significant first.
    #[test]
    fn word_assembles_four_bytes(key in any::<[u8; 16]>(), iv in any::<[u8; 16]>()) {
        let mut bytes = SpeckRng::from_parts(&key, &iv);
        let mut words = SpeckRng::from_parts(&key, &iv);
        for _ in 0..4 {
            let b0 = u32::from(bytes.generate_byte());
            let b1 = u32::from(bytes.generate_byte());
            let b2 = u32::from(bytes.generate_byte());
            let b3 = u32::from(bytes.generate_byte());
            prop_assert_eq!(words.generate_word(), (b0 << 24) | (b1 << 16) | (b2 << 8) | b3);
        }
    }

    /// The rand_core seed is key followed by IV.
    #[test]
    fn seedable_matches_new(key in any::<[u8; 16]>(), iv in any::<[u8; 16]>()) {
        let mut seed = [0u8; 32];
        seed[..16].copy_from_slice(&key);
        seed[16..].copy_from_slice(&iv);
        let mut seeded = SpeckRng::from_seed(seed);
        let mut direct = SpeckRng::from_parts(&key, &iv);
        prop_assert_eq!(seeded.next_u32(), direct.generate_word());
    }
}

#[test]
fn phase_transitions_once() {
    let mut rng = SpeckRng::from_parts(&[1u8; 16], &[2u8; 16]);
    assert_eq!(rng.phase(), Phase::Initialized);
    rng.generate_byte();
    assert_eq!(rng.phase(), Phase::Running);
    rng.generate_word();
    assert_eq!(rng.phase(), Phase::Running);
    assert_eq!(rng.extractions(), 5);
}

#[test]
fn rng_core_fill_bytes_matches_inherent() {
    let mut a = SpeckRng::from_parts(&[3u8; 16], &[4u8; 16]);
    let mut b = SpeckRng::from_parts(&[3u8; 16], &[4u8; 16]);
    let mut via_trait = [0u8; 24];
    let mut via_inherent = [0u8; 24];
    RngCore::fill_bytes(&mut a, &mut via_trait);
    b.fill_bytes(&mut via_inherent);
    assert_eq!(via_trait, via_inherent);
}
