//! RNG module - piece sources
//!
//! The session asks a [`PieceSource`] for every new piece. The default
//! [`RandomPieces`] makes independent uniform draws over the seven kinds:
//! there is no 7-bag, so repeats and long runs of one kind are possible.
//! [`SequencePieces`] replays a fixed list, for puzzles and tests.
//!
//! Also provides a simple LCG so seeded games are reproducible.

use crate::types::PieceKind;

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
    /// Scales the full 32-bit output instead of taking a modulus, since the
    /// low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Supplier of piece kinds for a session
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Independent uniform draws over the seven kinds
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: SimpleRng,
}

impl RandomPieces {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Get the current RNG state (for resuming the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for RandomPieces {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for RandomPieces {
    fn next_kind(&mut self) -> PieceKind {
        let index = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[index]
    }
}

/// Cycles through a fixed list of kinds
#[derive(Debug, Clone)]
pub struct SequencePieces {
    kinds: Vec<PieceKind>,
    cursor: usize,
}

impl SequencePieces {
    /// Cycle through `kinds`; an empty list falls back to a run of `I` pieces
    pub fn new(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        let mut kinds: Vec<_> = kinds.into_iter().collect();
        if kinds.is_empty() {
            kinds.push(PieceKind::I);
        }
        Self { kinds, cursor: 0 }
    }

    /// Endless run of one kind
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new([kind])
    }
}

impl PieceSource for SequencePieces {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.cursor];
        self.cursor = (self.cursor + 1) % self.kinds.len();
        kind
    }
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_random_pieces_cover_every_kind() {
        let mut source = RandomPieces::new(12345);
        let mut seen = [0u32; 7];
        for _ in 0..7000 {
            let kind = source.next_kind();
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[idx] += 1;
        }
        // Roughly uniform: each kind near 1000 draws.
        for count in seen {
            assert!((700..1300).contains(&count), "skewed draw count {}", count);
        }
    }

    #[test]
    fn test_random_pieces_allow_repeats() {
        // Without a bag, two equal kinds in a row show up quickly.
        let mut source = RandomPieces::new(7);
        let mut prev = source.next_kind();
        let mut repeated = false;
        for _ in 0..200 {
            let kind = source.next_kind();
            if kind == prev {
                repeated = true;
                break;
            }
            prev = kind;
        }
        assert!(repeated);
    }

    #[test]
    fn test_sequence_pieces_cycle() {
        let mut source = SequencePieces::new([PieceKind::T, PieceKind::O]);
        assert_eq!(source.next_kind(), PieceKind::T);
        assert_eq!(source.next_kind(), PieceKind::O);
        assert_eq!(source.next_kind(), PieceKind::T);

        let mut empty = SequencePieces::new([] as [PieceKind; 0]);
        assert_eq!(empty.next_kind(), PieceKind::I);
    }
}
