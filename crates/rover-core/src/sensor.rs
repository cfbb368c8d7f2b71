//! Obstacle detection.
//!
//! Obstacles are not mapped. Each movement attempt runs an independent
//! Bernoulli trial, so an obstacle can appear on a cell that was clear a
//! moment ago and vanish from one that was blocked.
//!
//! [`BernoulliSensor`] draws its trials from a seeded ChaCha8 RNG: the
//! same seed replays the same obstacle sequence for the same sequence of
//! movement attempts.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Source of obstacle-detection trials.
///
/// Called exactly once per movement attempt, before the move is applied.
/// Turns never consult the sensor.
pub trait ObstacleSensor: Send + fmt::Debug {
    /// Returns `true` if an obstacle blocks the next move.
    ///
    /// `probability` is the rover's obstacle probability, already
    /// constrained to `[0, 1]`.
    fn detect(&mut self, probability: f64) -> bool;
}

/// Seeded Bernoulli obstacle sensor.
pub struct BernoulliSensor {
    seed: u64,
    rng: ChaCha8Rng,
}

impl BernoulliSensor {
    /// Create a sensor whose trial sequence is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a sensor with a seed drawn from the thread-local RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this sensor was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ObstacleSensor for BernoulliSensor {
    fn detect(&mut self, probability: f64) -> bool {
        // One draw per attempt regardless of `probability`, so a seed
        // yields the same stream for any probability.
        self.rng.random::<f64>() < probability
    }
}

impl fmt::Debug for BernoulliSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BernoulliSensor")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
