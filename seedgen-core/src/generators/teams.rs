use alloc::{string::String, vec, vec::Vec};

use serde::{Deserialize, Serialize};

use crate::canonical::{Param, ParamMap};
use crate::error::GenerateError;
use crate::generator::{Generator, Limits};
use crate::rng::SeededRng;

/// Shuffles `members` once and deals them round-robin into `teams` buckets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSplitter {
    pub members: Vec<String>,
    pub teams: usize,
}

impl Generator for TeamSplitter {
    type Output = Vec<Vec<String>>;

    fn params(&self) -> Param {
        ParamMap::new()
            .with("members", self.members.iter().map(String::as_str).collect::<Param>())
            .with("teams", self.teams)
            .into()
    }

    fn validate(&self, limits: &Limits) -> Result<(), GenerateError> {
        if self.members.is_empty() {
            return Err(GenerateError::EmptyItems);
        }
        if self.members.len() > limits.max_items {
            return Err(GenerateError::TooManyItems {
                len: self.members.len(),
                max: limits.max_items,
            });
        }
        if self.teams == 0 || self.teams > self.members.len() {
            return Err(GenerateError::TeamCountOutOfRange {
                teams: self.teams,
                members: self.members.len(),
            });
        }
        Ok(())
    }

    fn draw(&self, rng: &mut SeededRng) -> Result<Vec<Vec<String>>, GenerateError> {
        if self.teams == 0 {
            return Err(GenerateError::TeamCountOutOfRange {
                teams: 0,
                members: self.members.len(),
            });
        }
        let mut teams = vec![Vec::new(); self.teams];
        for (i, member) in rng.shuffle(&self.members).into_iter().enumerate() {
            teams[i % self.teams].push(member);
        }
        Ok(teams)
    }
}
