#![no_std]

pub mod isaac;

pub use isaac::{Error, Isaac, Isaac32, Isaac64, IsaacSeed, Word, REGISTERS, WORDS};
