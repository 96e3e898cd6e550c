//! RNG module - randomness sources for piece generation
//!
//! The board only needs "a uniform integer in `[0, n)`", expressed by
//! [`RandomSource`]. Two sources ship with the crate:
//!
//! - [`SimpleRng`]: a tiny LCG for seeded, reproducible games (replays, tests)
//! - [`rand::rngs::StdRng`]: the default source when the caller injects nothing

use rand::rngs::StdRng;
use rand::Rng;

use crate::types::PieceKind;

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Uniform integer in `[0, max)`; `max` is always non-zero
    fn next_range(&mut self, max: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

impl RandomSource for StdRng {
    fn next_range(&mut self, max: u32) -> u32 {
        self.gen_range(0..max)
    }
}

/// Draw a uniformly random piece kind
pub fn random_kind<R: RandomSource + ?Sized>(rng: &mut R) -> PieceKind {
    let index = rng.next_range(PieceKind::COUNT as u32) as usize;
    PieceKind::from_index(index).unwrap_or(PieceKind::Square)
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current state, usable as a seed to resume the same sequence
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits have short periods.
        (self.next_u32() >> 16) % max.max(1)
    }
}
