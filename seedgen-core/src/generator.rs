//! The contract every generator follows.
//!
//! A generation is `validate -> one SeededRng from one seed -> draw`. The
//! draw sequence may depend only on the generator's own options, never on the
//! clock or on previously produced output, so the same seed and options always
//! replay the same result.

use serde::{Deserialize, Serialize};

use crate::canonical::Param;
use crate::constants::{MAX_COUNT_DEFAULT, MAX_ITEMS_DEFAULT};
use crate::error::GenerateError;
use crate::rng::SeededRng;
use crate::seed::SeedSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    pub max_count: usize,
    pub max_items: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_count: MAX_COUNT_DEFAULT,
            max_items: MAX_ITEMS_DEFAULT,
        }
    }
}

pub trait Generator {
    type Output;

    /// Every option that shapes the output, excluding the seed.
    fn params(&self) -> Param;

    fn validate(&self, limits: &Limits) -> Result<(), GenerateError>;

    /// Drains `rng` in an order fixed by the options alone.
    fn draw(&self, rng: &mut SeededRng) -> Result<Self::Output, GenerateError>;
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Generation<T> {
    pub seed: SeedSource,
    pub output: T,
}

/// Runs `generator` against an already combined seed. Replaying a shared
/// result passes its `SeedSource::Reproducible` back in here.
pub fn generate_with<G: Generator + ?Sized>(
    generator: &G,
    seed: SeedSource,
    limits: &Limits,
) -> Result<Generation<G::Output>, GenerateError> {
    generator.validate(limits)?;
    let mut rng = seed.rng();
    let output = generator.draw(&mut rng)?;
    Ok(Generation { seed, output })
}

/// Combines `base` with the generator's params and runs it. Without a base the
/// result is ephemeral.
#[cfg(feature = "std")]
pub fn generate<G: Generator + ?Sized>(
    generator: &G,
    base: Option<&str>,
    limits: &Limits,
) -> Result<Generation<G::Output>, GenerateError> {
    let seed = crate::seed::combine_seed(base, &generator.params());
    generate_with(generator, seed, limits)
}
