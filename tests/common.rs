use isaac::{Isaac, Word};

// pull the next `n` words from a generator
#[allow(dead_code)]
pub fn take<W: Word>(rng: &mut Isaac<W>, n: usize) -> Vec<W> {
    (0..n).map(|_| rng.next_word()).collect()
}

// skip ahead `n` words
#[allow(dead_code)]
pub fn skip<W: Word>(rng: &mut Isaac<W>, n: usize) {
    for _ in 0..n {
        let _ = rng.next_word();
    }
}

// a non-trivial seed: every word differs, so a shifted or dropped word shows up
#[allow(dead_code)]
pub fn counting_seed32() -> Vec<u32> {
    (0..256_u32).map(|i| i.wrapping_mul(0x9e37_79b9) ^ i).collect()
}

#[allow(dead_code)]
pub fn counting_seed64() -> Vec<u64> {
    (0..256_u64)
        .map(|i| i.wrapping_mul(0x9e37_79b9_7f4a_7c13) ^ i)
        .collect()
}
