use core::fmt::Debug;
use core::ops::{BitXor, Not, Shl, Shr};

use super::mix::{mix32, mix64};
use super::{REGISTERS, WORDS};

/// Fixed-width unsigned word the generator is built over
///
/// All arithmetic wraps modulo the word width. The width-specific parts of the
/// algorithm (mixer, default registers, `a` updates, indirection scale)
/// hang off this trait, so a generator resolves its width once at the type level.
pub trait Word:
    Copy
    + Default
    + Debug
    + Eq
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// log2 of the word size in bytes
    const BYTES_LOG: u32;

    /// Default seeding registers: the golden ratio, mixed four times
    const GOLDEN: [Self; REGISTERS];

    const ONE: Self;

    fn wrapping_add(self, rhs: Self) -> Self;

    /// Apply the 8-register avalanche permutation
    fn mix(regs: &mut [Self; REGISTERS]);

    /// Value of `a` before the memory add, for position `step` (mod 4) of a group
    fn shuffle(a: Self, step: usize) -> Self;

    /// Truncate to the low bits of a usize
    fn low_bits(self) -> usize;

    /// Index into working memory selected by the byte offset `self`
    ///
    /// Masks to the byte extent of 256 words, then scales down by the word size.
    fn index(self) -> usize {
        (self >> Self::BYTES_LOG).low_bits() & (WORDS - 1)
    }
}

impl Word for u32 {
    const BYTES_LOG: u32 = 2;

    const GOLDEN: [u32; REGISTERS] = [
        0x1367_df5a,
        0x95d9_0059,
        0xc316_3e4b,
        0x0f42_1ad8,
        0xd92a_4a78,
        0xa51a_3c49,
        0xc4ef_ea1b,
        0x3060_9119,
    ];

    const ONE: u32 = 1;

    #[inline]
    fn wrapping_add(self, rhs: u32) -> u32 {
        u32::wrapping_add(self, rhs)
    }

    #[inline]
    fn mix(regs: &mut [u32; REGISTERS]) {
        mix32(regs)
    }

    #[inline]
    fn shuffle(a: u32, step: usize) -> u32 {
        match step & 3 {
            0 => a ^ (a << 13),
            1 => a ^ (a >> 6),
            2 => a ^ (a << 2),
            _ => a ^ (a >> 16),
        }
    }

    #[inline]
    fn low_bits(self) -> usize {
        self as usize
    }
}

impl Word for u64 {
    const BYTES_LOG: u32 = 3;

    const GOLDEN: [u64; REGISTERS] = [
        0x647c_4677_a288_4b7c,
        0xb9f8_b322_c73a_c862,
        0x8c0e_a505_3d47_12a0,
        0xb29b_2e82_4a59_5524,
        0x82f0_53db_8355_e0ce,
        0x48fe_4a0f_a5a0_9315,
        0xae98_5bf2_cbfc_89ed,
        0x98f5_704f_6c44_c0ab,
    ];

    const ONE: u64 = 1;

    #[inline]
    fn wrapping_add(self, rhs: u64) -> u64 {
        u64::wrapping_add(self, rhs)
    }

    #[inline]
    fn mix(regs: &mut [u64; REGISTERS]) {
        mix64(regs)
    }

    #[inline]
    fn shuffle(a: u64, step: usize) -> u64 {
        match step & 3 {
            0 => !(a ^ (a << 21)),
            1 => a ^ (a >> 5),
            2 => a ^ (a << 12),
            _ => a ^ (a >> 33),
        }
    }

    #[inline]
    fn low_bits(self) -> usize {
        // only the low byte survives the mask in `index`
        self as usize
    }
}
