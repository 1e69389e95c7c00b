//! Deterministic dice and decision randomness.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine rolls through the `DiceRoller` trait, so tests
//!   can script exact reveals with `ScriptedDice`
//! - **Deterministic**: same seed produces identical rolls
//! - **Forkable**: independent streams for each computer opponent
//!
//! ## Usage
//!
//! ```
//! use liars_dice::core::{DiceRoller, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let mut again = GameRng::new(42);
//! assert_eq!(rng.roll(6), again.roll(6));
//!
//! // Bots draw from their own streams so they never perturb the dice.
//! let mut bots = rng.for_context("bots");
//! let mut first = bots.fork();
//! let mut second = bots.fork();
//! assert_ne!(first.seed(), second.seed());
//! assert!(first.gen_bool(1.0));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

/// Source of die faces.
///
/// Implementations must return a value in `1..=faces`.
pub trait DiceRoller {
    /// Roll one die with `faces` sides.
    fn roll(&mut self, faces: u8) -> u8;
}

impl<R: DiceRoller + ?Sized> DiceRoller for &mut R {
    fn roll(&mut self, faces: u8) -> u8 {
        (**self).roll(faces)
    }
}

/// Seedable RNG for dice and opponent decisions.
///
/// Uses ChaCha8 for speed while keeping sequences reproducible across
/// platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

impl DiceRoller for GameRng {
    fn roll(&mut self, faces: u8) -> u8 {
        self.inner.gen_range(1..=faces.max(1))
    }
}

/// Plays back a fixed list of faces, cycling when exhausted.
///
/// Scripted values outside `1..=faces` are folded into range.
///
/// ```
/// use liars_dice::core::{DiceRoller, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([3, 3, 1]);
/// assert_eq!(dice.roll(6), 3);
/// assert_eq!(dice.roll(6), 3);
/// assert_eq!(dice.roll(6), 1);
/// assert_eq!(dice.roll(6), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    script: VecDeque<u8>,
}

impl ScriptedDice {
    /// Create a roller that yields `faces` in order.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            script: faces.into_iter().collect(),
        }
    }
}

impl DiceRoller for ScriptedDice {
    fn roll(&mut self, faces: u8) -> u8 {
        let faces = faces.max(1);
        match self.script.pop_front() {
            Some(value) => {
                self.script.push_back(value);
                (value.max(1) - 1) % faces + 1
            }
            None => 1,
        }
    }
}
