//! Deterministic, injectable randomness.
//!
//! Every random decision in the engine (solution draw, deck shuffle, weapon
//! placement, computer suggestions and moves) goes through a
//! [`RandomSource`] handed to the caller explicitly. Nothing reads ambient
//! thread-local randomness, so a seed fully determines a game.
//!
//! ## Key Types
//!
//! - [`RandomSource`]: the seam, a uniform index generator
//! - [`RandomExt`]: `choose` and `shuffle` for any source, including `dyn`
//! - [`GameRng`]: ChaCha8-backed seeded source
//! - [`ScriptedRng`]: replays forced indices, then falls through to a `GameRng`
//!
//! ```
//! use rust_cluedo::core::{GameRng, RandomExt};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! let items = [1, 2, 3, 4, 5];
//! assert_eq!(a.choose(&items), b.choose(&items));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform random indices.
pub trait RandomSource {
    /// Return an index uniformly distributed in `0..upper`.
    ///
    /// `upper` is always greater than zero when called by the engine.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Convenience operations available on every [`RandomSource`].
pub trait RandomExt: RandomSource {
    /// Choose a random element from a slice. `None` if the slice is empty.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_index(items.len()))
    }

    /// Shuffle a slice in place (Fisher-Yates).
    ///
    /// Every swap draws through [`RandomSource::next_index`] rather than
    /// `rand::seq::SliceRandom`, so a [`ScriptedRng`] can force the order.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_index(i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: RandomSource + ?Sized> RandomExt for R {}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_index(&mut self, upper: usize) -> usize {
        (**self).next_index(upper)
    }
}

/// Seeded RNG built on ChaCha8.
///
/// Same seed produces the identical sequence on every platform.
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
}

impl RandomSource for GameRng {
    fn next_index(&mut self, upper: usize) -> usize {
        assert!(upper > 0, "next_index requires a non-empty range");
        self.inner.gen_range(0..upper)
    }
}

/// Replays a fixed script of indices, then defers to a seeded [`GameRng`].
///
/// Scripted values are reduced modulo the requested bound, so a script
/// written for one table size never indexes out of range.
///
/// ```
/// use rust_cluedo::core::{RandomExt, ScriptedRng};
///
/// let mut rng = ScriptedRng::new([2, 0], 1);
/// assert_eq!(rng.choose(&["a", "b", "c"]), Some(&"c"));
/// assert_eq!(rng.choose(&["a", "b", "c"]), Some(&"a"));
/// assert_eq!(rng.remaining(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    script: VecDeque<usize>,
    fallback: GameRng,
}

impl ScriptedRng {
    /// Create a scripted source; `seed` drives draws after the script runs out.
    pub fn new(script: impl IntoIterator<Item = usize>, seed: u64) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback: GameRng::new(seed),
        }
    }

    /// Number of scripted indices not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedRng {
    fn next_index(&mut self, upper: usize) -> usize {
        match self.script.pop_front() {
            Some(index) => index % upper,
            None => self.fallback.next_index(upper),
        }
    }
}
