use alloc::{string::String, vec::Vec};

use serde::{Deserialize, Serialize};

use crate::canonical::{Param, ParamMap};
use crate::error::GenerateError;
use crate::generator::{Generator, Limits};
use crate::rng::SeededRng;

/// Picks `count` entries from `items`, with or without repeats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPicker {
    pub items: Vec<String>,
    pub count: usize,
    pub unique: bool,
}

impl Generator for ListPicker {
    type Output = Vec<String>;

    fn params(&self) -> Param {
        ParamMap::new()
            .with("items", self.items.iter().map(String::as_str).collect::<Param>())
            .with("count", self.count)
            .with("unique", self.unique)
            .into()
    }

    fn validate(&self, limits: &Limits) -> Result<(), GenerateError> {
        if self.items.is_empty() {
            return Err(GenerateError::EmptyItems);
        }
        if self.items.len() > limits.max_items {
            return Err(GenerateError::TooManyItems {
                len: self.items.len(),
                max: limits.max_items,
            });
        }
        if self.count > limits.max_count {
            return Err(GenerateError::CountOutOfRange {
                count: self.count,
                max: limits.max_count,
            });
        }
        if self.unique && self.count > self.items.len() {
            return Err(GenerateError::NotEnoughUniqueValues {
                requested: self.count,
                available: self.items.len() as u128,
            });
        }
        Ok(())
    }

    fn draw(&self, rng: &mut SeededRng) -> Result<Vec<String>, GenerateError> {
        if self.unique {
            return Ok(rng.pick_multiple(&self.items, self.count));
        }
        (0..self.count)
            .map(|_| rng.pick(&self.items).cloned().map_err(GenerateError::from))
            .collect()
    }
}
