/// Joins the base seed and the canonical params in a combined seed.
pub const SEED_SEPARATOR: char = '|';

/// Mulberry32 state increment (Weyl sequence step).
pub const MULBERRY32_INCREMENT: u32 = 0x6D2B_79F5;
/// Divisor mapping a `u32` draw onto `[0, 1)`.
pub const U32_RANGE: f64 = 4_294_967_296.0;

/// Number of base-36 characters in the random part of an ephemeral seed.
pub const EPHEMERAL_FRAGMENT_LEN: usize = 9;

/// Largest integer an `f64` holds exactly; wider generator bounds would
/// collapse in the canonical params.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

pub const MAX_COUNT_DEFAULT: usize = 10_000;
pub const MAX_ITEMS_DEFAULT: usize = 10_000;
