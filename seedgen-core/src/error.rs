use core::fmt;

use crate::constants::MAX_SAFE_INTEGER;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RngError {
    EmptyCollection,
}

impl fmt::Display for RngError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCollection => write!(f, "cannot draw from an empty collection"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RngError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateError {
    CountOutOfRange { count: usize, max: usize },
    InvertedRange { min: i64, max: i64 },
    BoundOutOfSafeRange { value: i64 },
    NotEnoughUniqueValues { requested: usize, available: u128 },
    EmptyItems,
    TooManyItems { len: usize, max: usize },
    TeamCountOutOfRange { teams: usize, members: usize },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountOutOfRange { count, max } => {
                write!(f, "count out of range: {count} (allowed 0..={max})")
            }
            Self::InvertedRange { min, max } => {
                write!(f, "max must be >= min: min={min}, max={max}")
            }
            Self::BoundOutOfSafeRange { value } => write!(
                f,
                "bound out of range: {value} (allowed -{MAX_SAFE_INTEGER}..={MAX_SAFE_INTEGER})"
            ),
            Self::NotEnoughUniqueValues {
                requested,
                available,
            } => write!(
                f,
                "cannot draw {requested} unique values from a range of {available}"
            ),
            Self::EmptyItems => write!(f, "item list is empty"),
            Self::TooManyItems { len, max } => {
                write!(f, "too many items: {len} (allowed up to {max})")
            }
            Self::TeamCountOutOfRange { teams, members } => write!(
                f,
                "team count out of range: {teams} (allowed 1..={members})"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GenerateError {}

impl From<RngError> for GenerateError {
    fn from(err: RngError) -> Self {
        match err {
            RngError::EmptyCollection => Self::EmptyItems,
        }
    }
}
