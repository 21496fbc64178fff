//! Deterministic random number generation for shuffling.
//!
//! The shuffle is the only non-deterministic input to the engine. It reads
//! randomness through [`EntropySource`], so tests can substitute a scripted
//! source and replays can reuse a seed.
//!
//! ```
//! use klondike_engine::core::{EntropySource, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let mut again = GameRng::new(42);
//!
//! // Same seed, same sequence
//! assert_eq!(rng.below(52), again.below(52));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniformly distributed indices.
pub trait EntropySource {
    /// Return a value uniformly distributed in `0..bound`.
    ///
    /// `bound` is always at least 1.
    fn below(&mut self, bound: usize) -> usize;
}

/// Seeded RNG backing the shuffle.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh random seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl EntropySource for GameRng {
    fn below(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}
