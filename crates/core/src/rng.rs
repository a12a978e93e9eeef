//! RNG module - where the next piece kind comes from
//!
//! A session draws kinds through the [`PieceSource`] trait so hosts and tests can
//! choose the randomizer:
//!
//! - [`UniformSource`]: each kind with probability 1/7 (the default)
//! - [`BagSource`]: the "7-bag" shuffle, one of each kind per bag
//! - [`SequenceSource`]: a fixed, repeating list, for scripted games and tests
//!
//! Seeded sources use `Pcg32`, so the same seed always yields the same game.

use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::types::PieceKind;

/// Supplier of piece kinds for spawning
pub trait PieceSource {
    /// Draw the next kind
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for &mut S {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Uniform random selection over the seven kinds
#[derive(Debug, Clone)]
pub struct UniformSource {
    rng: Pcg32,
}

impl UniformSource {
    /// Create a source with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from the thread-local generator
    pub fn from_entropy() -> Self {
        Self::seeded(rand::rng().random())
    }
}

impl PieceSource for UniformSource {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::LEN)]
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct BagSource {
    /// Current bag of pieces
    bag: [PieceKind; PieceKind::LEN],
    /// Index into current bag
    bag_index: usize,
    /// RNG for shuffling
    rng: Pcg32,
}

impl BagSource {
    /// Create a new bag generator with the given seed
    pub fn seeded(seed: u64) -> Self {
        let mut source = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        source.refill_bag();
        source
    }

    /// Create a bag generator seeded from the thread-local generator
    pub fn from_entropy() -> Self {
        Self::seeded(rand::rng().random())
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.bag.shuffle(&mut self.rng);
        self.bag_index = 0;
    }

    /// Pieces left in the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }
}

impl PieceSource for BagSource {
    fn next_kind(&mut self) -> PieceKind {
        if self.bag_index >= PieceKind::LEN {
            self.refill_bag();
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }
}

/// Repeats a fixed list of kinds forever
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceSource {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl SequenceSource {
    /// Create a source cycling through `kinds`; an empty list cycles every kind in order
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let mut kinds = kinds.into();
        if kinds.is_empty() {
            kinds = PieceKind::ALL.to_vec();
        }
        Self { kinds, next: 0 }
    }

    /// Source that only ever yields `kind`
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceSource for SequenceSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(source: &mut impl PieceSource, n: usize) -> Vec<PieceKind> {
        (0..n).map(|_| source.next_kind()).collect()
    }

    #[test]
    fn test_uniform_deterministic() {
        let mut a = UniformSource::seeded(12345);
        let mut b = UniformSource::seeded(12345);
        assert_eq!(draw(&mut a, 100), draw(&mut b, 100));
    }

    #[test]
    fn test_uniform_covers_every_kind() {
        let mut source = UniformSource::seeded(7);
        let drawn = draw(&mut source, 500);
        for kind in PieceKind::ALL {
            assert!(drawn.contains(&kind), "Missing piece: {:?}", kind);
        }
    }

    #[test]
    fn test_bag_draws_all_seven() {
        let mut source = BagSource::seeded(1);
        assert_eq!(source.remaining().len(), 7);

        let mut drawn = draw(&mut source, 7);
        drawn.sort();
        assert_eq!(drawn, PieceKind::ALL.to_vec());
        assert!(source.remaining().is_empty());
    }

    #[test]
    fn test_bag_auto_refill() {
        let mut source = BagSource::seeded(1);
        draw(&mut source, 7);
        source.next_kind();
        assert_eq!(source.remaining().len(), 6);
    }

    #[test]
    fn test_sequence_cycles() {
        let mut source = SequenceSource::new([PieceKind::I, PieceKind::O]);
        assert_eq!(
            draw(&mut source, 5),
            vec![
                PieceKind::I,
                PieceKind::O,
                PieceKind::I,
                PieceKind::O,
                PieceKind::I
            ]
        );
    }

    #[test]
    fn test_empty_sequence_falls_back_to_all_kinds() {
        let mut source = SequenceSource::new(Vec::new());
        assert_eq!(draw(&mut source, 7), PieceKind::ALL.to_vec());
    }

    #[test]
    fn test_boxed_source_forwards() {
        let mut boxed: Box<dyn PieceSource> = Box::new(SequenceSource::repeat(PieceKind::T));
        assert_eq!(boxed.next_kind(), PieceKind::T);
    }
}
