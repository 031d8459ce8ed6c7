//! Random number generation for dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: same seed produces identical deals, so scripted
//!   scenarios and replays are reproducible in tests
//! - **Fair**: `shuffle` is a Fisher–Yates permutation via `rand`, no
//!   modulo bias
//! - **Entropy-seeded** for live play via `GameRng::from_entropy`

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG wrapper around ChaCha8.
///
/// Fast while keeping cryptographic-quality randomness, which is plenty for
/// fair dealing.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from OS entropy (live dealing).
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Shuffle a slice in place (uniform Fisher–Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
