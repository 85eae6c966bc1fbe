//! RNG module - 7-bag piece supply
//!
//! Two bags are kept: the one being drawn from and the next one, both already
//! shuffled. Every aligned run of seven draws is a permutation of all seven
//! kinds, and the lookahead bag lets the preview queue see past a bag boundary
//! without generating anything mid-query.
//!
//! Shuffling uses a small LCG so that a seed fully determines the sequence.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 0x9E37_79B9 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform-ish value in `[0, max)`; uses the high bits, which are the
    /// better-distributed half of an LCG.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

type Bag = ArrayVec<PieceKind, 7>;

/// Two-bag 7-bag randomizer.
#[derive(Debug, Clone)]
pub struct BagRandomizer {
    /// Remaining pieces of the current bag, stored reversed so `pop` yields the front.
    current: Bag,
    next: Bag,
    rng: SimpleRng,
}

impl BagRandomizer {
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let current = Self::fresh_bag(&mut rng);
        let next = Self::fresh_bag(&mut rng);
        Self { current, next, rng }
    }

    fn fresh_bag(rng: &mut SimpleRng) -> Bag {
        let mut kinds = PieceKind::ALL;
        rng.shuffle(&mut kinds);
        kinds.iter().rev().copied().collect()
    }

    /// Draw the next kind, promoting the lookahead bag when the current one runs out.
    pub fn next(&mut self) -> PieceKind {
        if self.current.is_empty() {
            let fresh = Self::fresh_bag(&mut self.rng);
            self.current = std::mem::replace(&mut self.next, fresh);
        }
        match self.current.pop() {
            Some(kind) => kind,
            // Unreachable: a promoted bag always holds seven kinds.
            None => PieceKind::I,
        }
    }

    /// Upcoming kinds without drawing: the rest of the current bag, then the next bag.
    pub fn peek(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.current.iter().rev().chain(self.next.iter().rev()).copied()
    }

    /// Current RNG state, usable as the seed of a follow-up session.
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for BagRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}
