//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomization used in modern falling-block games.
//! Each bag contains one of each piece (I, J, L, O, S, T, Z), shuffled.
//! Draws from the bag until empty, then shuffles a new one.
//!
//! The generator is a seeded [`StdRng`] so a game can be replayed from its seed.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceBag {
    /// Current shuffled bag
    bag: [PieceKind; 7],
    /// Index into current bag; 7 means the bag is spent
    bag_index: usize,
    /// Seed the generator was last (re)seeded with
    seed: u64,
    rng: StdRng,
}

impl PieceBag {
    /// Create a new bag generator with the given seed
    ///
    /// The first bag is shuffled lazily on the first draw.
    pub fn new(seed: u64) -> Self {
        Self {
            bag: PieceKind::ALL,
            bag_index: PieceKind::ALL.len(),
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a bag seeded from the thread-local entropy source
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Replace the generator with one seeded from the current stream and drop
    /// the rest of the current bag.
    pub fn reseed(&mut self) {
        let seed = self.rng.random::<u64>();
        self.rng = StdRng::seed_from_u64(seed);
        self.seed = seed;
        self.bag_index = self.bag.len();
    }

    /// Shuffle a fresh permutation of all seven kinds
    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.bag.shuffle(&mut self.rng);
        self.bag_index = 0;
    }

    /// Draw the next piece, refilling first if the bag is spent
    pub fn next(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    /// Pieces left before the next refill
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }

    /// Seed of the current generator (for replaying a game)
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new(1)
    }
}
