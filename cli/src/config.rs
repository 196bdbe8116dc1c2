use std::env;

use seedgen_core::constants::{MAX_COUNT_DEFAULT, MAX_ITEMS_DEFAULT};
use seedgen_core::Limits;

pub const MAX_COUNT_ENV: &str = "SEEDGEN_MAX_COUNT";
pub const MAX_ITEMS_ENV: &str = "SEEDGEN_MAX_ITEMS";

pub fn limits_from_env() -> Limits {
    Limits {
        max_count: read_env_usize(MAX_COUNT_ENV, MAX_COUNT_DEFAULT),
        max_items: read_env_usize(MAX_ITEMS_ENV, MAX_ITEMS_DEFAULT),
    }
}

/// Positive `usize` from `name`, or `default` when unset. Set-but-invalid
/// values are logged and ignored.
pub fn read_env_usize(name: &str, default: usize) -> usize {
    let Ok(raw) = env::var(name) else {
        return default;
    };
    match raw.trim().parse::<usize>().ok().filter(|value| *value > 0) {
        Some(value) => value,
        None => {
            tracing::warn!(
                "{name}={raw:?} is not a positive integer. Falling back to {default}."
            );
            default
        }
    }
}
