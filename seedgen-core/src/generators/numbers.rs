use alloc::{collections::BTreeSet, vec::Vec};

use serde::{Deserialize, Serialize};

use crate::canonical::{Param, ParamMap};
use crate::constants::MAX_SAFE_INTEGER;
use crate::error::GenerateError;
use crate::generator::{Generator, Limits};
use crate::rng::SeededRng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Integers in `[min, max]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberGenerator {
    pub count: usize,
    pub min: i64,
    pub max: i64,
    pub unique: bool,
    #[serde(default)]
    pub sort: SortOrder,
}

impl NumberGenerator {
    fn span(&self) -> u128 {
        (i128::from(self.max) - i128::from(self.min) + 1).max(0) as u128
    }
}

impl Generator for NumberGenerator {
    type Output = Vec<i64>;

    fn params(&self) -> Param {
        ParamMap::new()
            .with("count", self.count)
            .with("min", self.min)
            .with("max", self.max)
            .with("unique", self.unique)
            .with("sort", self.sort.as_str())
            .into()
    }

    fn validate(&self, limits: &Limits) -> Result<(), GenerateError> {
        if self.count > limits.max_count {
            return Err(GenerateError::CountOutOfRange {
                count: self.count,
                max: limits.max_count,
            });
        }
        for value in [self.min, self.max] {
            if !(-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&value) {
                return Err(GenerateError::BoundOutOfSafeRange { value });
            }
        }
        if self.max < self.min {
            return Err(GenerateError::InvertedRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.unique && self.span() < self.count as u128 {
            return Err(GenerateError::NotEnoughUniqueValues {
                requested: self.count,
                available: self.span(),
            });
        }
        Ok(())
    }

    fn draw(&self, rng: &mut SeededRng) -> Result<Vec<i64>, GenerateError> {
        let mut values = if self.unique {
            // Redraw until `count` distinct values; first occurrences keep their order.
            let target = (self.count as u128).min(self.span()) as usize;
            let mut seen = BTreeSet::new();
            let mut values = Vec::with_capacity(target);
            while values.len() < target {
                let value = rng.next_int(self.min, self.max);
                if seen.insert(value) {
                    values.push(value);
                }
            }
            values
        } else {
            (0..self.count)
                .map(|_| rng.next_int(self.min, self.max))
                .collect()
        };

        match self.sort {
            SortOrder::None => {}
            SortOrder::Ascending => values.sort_unstable(),
            SortOrder::Descending => values.sort_unstable_by(|a, b| b.cmp(a)),
        }
        Ok(values)
    }
}
