use core::fmt;

use tracing::trace;

use super::{Error, Word, REGISTERS, WORDS, WORDS_LOG};

const HALF: usize = WORDS / 2;

/// ISAAC PRNG state, generic over the word width
///
/// Holds the working memory, the most recent output block, and the `a`, `b`, `c` registers.
/// Not synchronized: share one instance behind a lock, or use one per thread.
#[derive(Clone)]
pub struct Isaac<W: Word> {
    mem: [W; WORDS],
    rsl: [W; WORDS],
    // next unread position in `rsl`, WORDS when the block is used up
    cursor: usize,
    a: W,
    b: W,
    c: W,
}

impl<W: Word> Isaac<W> {
    /// Create a generator seeded with all-zero memory and the default registers
    pub fn new() -> Self {
        Self::from_memory(&[])
    }

    // seed memory with default registers, which cannot fail
    pub(crate) fn from_memory(memory: &[W]) -> Self {
        let mut rng = Self::blank();
        rng.init(memory, &W::GOLDEN, false);
        rng
    }

    /// Create a generator from seed memory and optional initial registers
    ///
    /// See [`seed`](Self::seed) for the meaning of the arguments.
    pub fn with_seed(memory: &[W], registers: &[W]) -> Result<Self, Error> {
        let mut rng = Self::blank();
        rng.seed(memory, registers)?;
        Ok(rng)
    }

    fn blank() -> Self {
        Self {
            mem: [W::default(); WORDS],
            rsl: [W::default(); WORDS],
            cursor: WORDS,
            a: W::default(),
            b: W::default(),
            c: W::default(),
        }
    }

    /// (Re)seed the generator
    ///
    /// `memory` is copied into working memory, missing positions are zero,
    /// and words past the first 256 are ignored.
    ///
    /// `registers` is either empty (use the default golden-ratio registers)
    /// or exactly eight starting values for the mixer.
    ///
    /// Any buffered output is discarded.
    ///
    /// errors: returns Error if `registers` is neither empty nor of length eight,
    /// leaving the generator untouched
    pub fn seed(&mut self, memory: &[W], registers: &[W]) -> Result<(), Error> {
        let regs = match registers.len() {
            0 => W::GOLDEN,
            REGISTERS => {
                let mut regs = [W::default(); REGISTERS];
                regs.copy_from_slice(registers);
                regs
            }
            _ => return Err(Error::InvalidSeedConfiguration),
        };

        self.init(memory, &regs, !registers.is_empty());
        Ok(())
    }

    fn init(&mut self, memory: &[W], registers: &[W; REGISTERS], custom_registers: bool) {
        trace!(seed_words = memory.len(), custom_registers, "seeding isaac");

        let len = core::cmp::min(memory.len(), WORDS);
        self.mem[..len].copy_from_slice(&memory[..len]);
        for word in self.mem[len..].iter_mut() {
            *word = W::default();
        }

        let mut regs = *registers;

        // second pass makes every seed word affect every memory word
        for _ in 0..2 {
            for group in self.mem.chunks_exact_mut(REGISTERS) {
                for (reg, word) in regs.iter_mut().zip(group.iter()) {
                    *reg = reg.wrapping_add(*word);
                }
                W::mix(&mut regs);
                group.copy_from_slice(&regs);
            }
        }

        self.a = W::default();
        self.b = W::default();
        self.c = W::default();
        self.cursor = WORDS;
    }

    /// Generate the next block of 256 words
    ///
    /// The new block replaces any buffered words, and
    /// [`next_word`](Self::next_word) serves it from the start.
    pub fn refill(&mut self) -> &[W; WORDS] {
        self.isaac();
        self.cursor = 0;
        &self.rsl
    }

    /// Get the next word, refilling every 256 words
    pub fn next_word(&mut self) -> W {
        if self.cursor == WORDS {
            self.isaac();
            self.cursor = 0;
        }

        let word = self.rsl[self.cursor];
        self.cursor += 1;
        word
    }

    /// Number of words left in the current block
    pub fn remaining(&self) -> usize {
        WORDS - self.cursor
    }

    /// Run the permutation over working memory, writing a new output block
    fn isaac(&mut self) {
        self.c = self.c.wrapping_add(W::ONE);
        trace!(counter = ?self.c, "refilling isaac block");

        let mut a = self.a;
        let mut b = self.b.wrapping_add(self.c);

        for &(start, offset) in [(0, HALF), (HALF, 0)].iter() {
            for i in (start..start + HALF).step_by(4) {
                for step in 0..4 {
                    let pos = i + step;
                    a = W::shuffle(a, step).wrapping_add(self.mem[offset + pos - start]);

                    let x = self.mem[pos];
                    let y = self.mem[x.index()].wrapping_add(a).wrapping_add(b);
                    self.mem[pos] = y;

                    b = self.mem[(y >> WORDS_LOG).index()].wrapping_add(x);
                    self.rsl[pos] = b;
                }
            }
        }

        self.a = a;
        self.b = b;
    }
}

impl<W: Word> Default for Isaac<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Word> fmt::Debug for Isaac<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Isaac")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("c", &self.c)
            .field("remaining", &self.remaining())
            .finish()
    }
}
