use rand::{Error as RandError, RngCore, SeedableRng};
use rand_core::{impls, le};

use super::{Isaac32, Isaac64, WORDS};

/// Seed bytes covering the whole working memory, read as little-endian words
#[derive(Clone)]
pub struct IsaacSeed<const N: usize>(pub [u8; N]);

impl<const N: usize> Default for IsaacSeed<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> AsMut<[u8]> for IsaacSeed<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl RngCore for Isaac32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Isaac32 {
    type Seed = IsaacSeed<{ WORDS * 4 }>;

    fn from_seed(seed: Self::Seed) -> Self {
        let mut memory = [0_u32; WORDS];
        le::read_u32_into(&seed.0, &mut memory);
        Self::from_memory(&memory)
    }
}

impl RngCore for Isaac64 {
    // upper half of the word is dropped
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_word() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next_word()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Isaac64 {
    type Seed = IsaacSeed<{ WORDS * 8 }>;

    fn from_seed(seed: Self::Seed) -> Self {
        let mut memory = [0_u64; WORDS];
        le::read_u64_into(&seed.0, &mut memory);
        Self::from_memory(&memory)
    }
}
