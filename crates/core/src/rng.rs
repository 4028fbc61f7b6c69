//! RNG module - piece generation
//!
//! The session never invents pieces itself; it asks a [`PieceGenerator`] for a
//! piece carrying the next id. Two generators ship with the crate:
//!
//! - [`RandomGenerator`]: uniform choice among the four kinds, driven by a seeded LCG
//! - [`ScriptedGenerator`]: cycles through a fixed list of kinds (deterministic tests)
//!
//! Any `FnMut(u64) -> Piece` closure is also a generator.

use crate::types::{Piece, PieceKind};

/// Source of fresh pieces.
pub trait PieceGenerator {
    /// Build a piece carrying `id`.
    fn generate(&mut self, id: u64) -> Piece;
}

impl<F> PieceGenerator for F
where
    F: FnMut(u64) -> Piece,
{
    fn generate(&mut self, id: u64) -> Piece {
        self(id)
    }
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

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform random piece kinds.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    rng: SimpleRng,
    seed: u32,
}

impl RandomGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Seed the generator was created with (for replaying a run)
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceGenerator for RandomGenerator {
    fn generate(&mut self, id: u64) -> Piece {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        Piece::new(PieceKind::ALL[idx], id)
    }
}

/// Cycles through a fixed list of kinds.
#[derive(Debug, Clone)]
pub struct ScriptedGenerator {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl ScriptedGenerator {
    /// An empty script falls back to all four kinds in order.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let mut kinds = kinds.into();
        if kinds.is_empty() {
            kinds = PieceKind::ALL.to_vec();
        }
        Self { kinds, next: 0 }
    }
}

impl PieceGenerator for ScriptedGenerator {
    fn generate(&mut self, id: u64) -> Piece {
        let kind = self.kinds[self.next % self.kinds.len()];
        self.next = (self.next + 1) % self.kinds.len();
        Piece::new(kind, id)
    }
}
