mod common;

use proptest::prelude::*;

use isaac::{Error, Isaac32, Isaac64, WORDS};

#[test]
fn deterministic_streams() {
    let seed = common::counting_seed32();
    let mut left = Isaac32::with_seed(&seed, &[]).unwrap();
    let mut right = Isaac32::with_seed(&seed, &[]).unwrap();
    assert_eq!(
        common::take(&mut left, 3 * WORDS + 7),
        common::take(&mut right, 3 * WORDS + 7)
    );

    let seed = common::counting_seed64();
    let regs = [1, 2, 3, 4, 5, 6, 7, 8];
    let mut left = Isaac64::with_seed(&seed, &regs).unwrap();
    let mut right = Isaac64::with_seed(&seed, &regs).unwrap();
    assert_eq!(
        common::take(&mut left, 3 * WORDS + 7),
        common::take(&mut right, 3 * WORDS + 7)
    );
}

#[test]
fn blocks_diverge() {
    let mut rng = Isaac32::new();
    let first = *rng.refill();
    let second = *rng.refill();
    assert_ne!(first[..], second[..]);

    let mut rng = Isaac64::new();
    let first = common::take(&mut rng, WORDS);
    let second = common::take(&mut rng, WORDS);
    assert_ne!(first, second);
}

#[test]
fn reseed_discards_buffer() {
    let mut rng = Isaac32::with_seed(&[1, 2, 3], &[]).unwrap();
    common::skip(&mut rng, 10);
    assert_eq!(rng.remaining(), WORDS - 10);

    rng.seed(&[4, 5, 6], &[]).unwrap();
    assert_eq!(rng.remaining(), 0);

    let mut fresh = Isaac32::with_seed(&[4, 5, 6], &[]).unwrap();
    assert_eq!(common::take(&mut rng, WORDS + 1), common::take(&mut fresh, WORDS + 1));
}

#[test]
fn register_validation() {
    assert_eq!(
        Isaac32::with_seed(&[], &[1, 2, 3]).unwrap_err(),
        Error::InvalidSeedConfiguration
    );
    assert_eq!(
        Isaac64::with_seed(&[], &[1; 9]).unwrap_err(),
        Error::InvalidSeedConfiguration
    );
    assert_eq!(
        Isaac64::with_seed(&[], &[7]).unwrap_err(),
        Error::InvalidSeedConfiguration
    );

    assert!(Isaac32::with_seed(&[], &[]).is_ok());
    assert!(Isaac32::with_seed(&[], &[0; 8]).is_ok());
    assert!(Isaac64::with_seed(&[5], &[1, 2, 3, 4, 5, 6, 7, 8]).is_ok());
}

#[test]
fn registers_change_stream() {
    let mut golden = Isaac32::new();
    let mut custom = Isaac32::with_seed(&[], &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert_ne!(common::take(&mut golden, 8), common::take(&mut custom, 8));
}

#[test]
fn short_seed_zero_filled() {
    let mut short = Isaac64::with_seed(&[11, 22], &[]).unwrap();

    let mut padded = [0_u64; WORDS];
    padded[0] = 11;
    padded[1] = 22;
    let mut full = Isaac64::with_seed(&padded, &[]).unwrap();

    assert_eq!(common::take(&mut short, 2 * WORDS), common::take(&mut full, 2 * WORDS));
}

#[test]
fn last_seed_word_matters() {
    // the second mixing pass carries the tail of the seed back to the front
    let mut seed = [0_u32; WORDS];
    let mut base = Isaac32::with_seed(&seed, &[]).unwrap();

    seed[WORDS - 1] = 1;
    let mut changed = Isaac32::with_seed(&seed, &[]).unwrap();

    assert_ne!(base.next_word(), changed.next_word());
}

#[test]
fn clone_continues_stream() {
    let mut rng = Isaac64::with_seed(&common::counting_seed64(), &[]).unwrap();
    common::skip(&mut rng, 100);

    let mut copy = rng.clone();
    assert_eq!(common::take(&mut rng, WORDS), common::take(&mut copy, WORDS));
}

proptest! {
    #[test]
    fn same_seed_same_words(seed in proptest::collection::vec(any::<u32>(), 0..=WORDS), n in 1_usize..600) {
        let mut left = Isaac32::with_seed(&seed, &[]).unwrap();
        let mut right = Isaac32::with_seed(&seed, &[]).unwrap();
        prop_assert_eq!(common::take(&mut left, n), common::take(&mut right, n));
    }

    #[test]
    fn reseed_matches_fresh(
        first in proptest::collection::vec(any::<u64>(), 0..=WORDS),
        second in proptest::collection::vec(any::<u64>(), 0..=WORDS),
        consumed in 0_usize..300,
    ) {
        let mut rng = Isaac64::with_seed(&first, &[]).unwrap();
        common::skip(&mut rng, consumed);
        rng.seed(&second, &[]).unwrap();

        let mut fresh = Isaac64::with_seed(&second, &[]).unwrap();
        prop_assert_eq!(common::take(&mut rng, 300), common::take(&mut fresh, 300));
    }

    #[test]
    fn bad_register_count_rejected(len in 1_usize..32) {
        prop_assume!(len != 8);
        let regs = vec![0_u32; len];
        prop_assert_eq!(Isaac32::with_seed(&[], &regs).unwrap_err(), Error::InvalidSeedConfiguration);
    }
}
