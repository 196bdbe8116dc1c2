#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod canonical;
pub mod constants;
pub mod error;
pub mod generator;
pub mod generators;
pub mod hash;
pub mod rng;
pub mod seed;

pub use canonical::{canonicalize, Param};
pub use error::{GenerateError, RngError};
pub use generator::{generate_with, Generation, Generator, Limits};
pub use hash::hash_to_u32;
pub use rng::{create_prng, SeededRng};
pub use seed::{combine_reproducible, SeedSource};

#[cfg(feature = "std")]
pub use generator::generate;
#[cfg(feature = "std")]
pub use seed::combine_seed;
