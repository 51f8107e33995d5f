//! ISAAC (Indirection, Shift, Accumulate, Add, and Count) PRNG by Bob Jenkins:
//!
//! http://burtleburtle.net/bob/rand/isaacafa.html
//!
//! One algorithm skeleton, instantiated for 32-bit (ISAAC) and 64-bit (ISAAC-64) words.
//! Not a proven cryptographic primitive.

pub mod generator;
pub mod mix;
pub mod rng;
pub mod word;

pub use generator::Isaac;
pub use rng::IsaacSeed;
pub use word::Word;

/// Number of words in the working memory and in one output block
pub const WORDS: usize = 1 << WORDS_LOG;
pub const WORDS_LOG: u32 = 8;

/// Number of scalar registers used while seeding
pub const REGISTERS: usize = 8;

/// ISAAC PRNG over 32-bit words
pub type Isaac32 = Isaac<u32>;

/// ISAAC-64 PRNG over 64-bit words
pub type Isaac64 = Isaac<u64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Initial registers were supplied, but not exactly eight of them
    InvalidSeedConfiguration,
}
