//! Seeded random source shared by grid builds and the tick loop.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::cell::{Rgba8, PALETTE};

/// Inclusive upper bound of a roll. Rolls are uniform over `1..=ROLL_SIDES`.
pub const ROLL_SIDES: u8 = 6;

/// Single mutable random stream. Draw order is fixed: palette picks during a
/// build, then one roll per tick.
#[derive(Debug, Clone)]
pub struct RngService {
    rng: Pcg32,
}

impl RngService {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Non-deterministic stream seeded from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg32::from_rng(&mut rand::rng()),
        }
    }

    /// `Some(seed)` gives a reproducible stream, `None` an entropy-seeded one.
    #[must_use]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }

    /// Uniform integer in `1..=6`.
    pub fn roll(&mut self) -> u8 {
        self.rng.random_range(1..=ROLL_SIDES)
    }

    /// Uniform pick from the sand palette.
    pub fn palette_color(&mut self) -> Rgba8 {
        PALETTE[usize::from(self.roll() - 1)]
    }
}
