use alloc::string::String;
use core::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::canonical::Param;
use crate::constants::{EPHEMERAL_FRAGMENT_LEN, SEED_SEPARATOR};
use crate::rng::SeededRng;

/// The seed a generation actually ran with.
///
/// `Reproducible` seeds replay the same output given the same params;
/// `Ephemeral` seeds were synthesized from the clock and cannot be replayed
/// from user input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "seed", rename_all = "snake_case")]
pub enum SeedSource {
    Reproducible(String),
    Ephemeral(String),
}

impl SeedSource {
    /// Builds `"{unix_millis}-{fragment}"` with a base-36 fragment taken from
    /// the low digits of `entropy`.
    pub fn ephemeral(unix_millis: u64, entropy: u128) -> Self {
        let mut seed = String::new();
        let _ = write!(seed, "{unix_millis}-");
        push_base36_fragment(&mut seed, entropy);
        Self::Ephemeral(seed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Reproducible(seed) | Self::Ephemeral(seed) => seed,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Reproducible(seed) | Self::Ephemeral(seed) => seed,
        }
    }

    pub fn is_reproducible(&self) -> bool {
        matches!(self, Self::Reproducible(_))
    }

    pub fn rng(&self) -> SeededRng {
        SeededRng::from_seed_str(self.as_str())
    }
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `base + "|" + canonicalize(params)`.
///
/// `params` must not contain the seed itself and should carry every option
/// that shapes the output.
pub fn combine_reproducible(base: &str, params: &Param) -> String {
    let mut combined = String::with_capacity(base.len() + 16);
    combined.push_str(base);
    combined.push(SEED_SEPARATOR);
    let _ = write!(combined, "{params}");
    combined
}

/// Combines `base` with `params`, or falls back to an ephemeral seed when no
/// base is given. An empty base counts as absent.
#[cfg(feature = "std")]
pub fn combine_seed(base: Option<&str>, params: &Param) -> SeedSource {
    match base.filter(|base| !base.is_empty()) {
        Some(base) => SeedSource::Reproducible(combine_reproducible(base, params)),
        None => ephemeral_now(),
    }
}

#[cfg(feature = "std")]
fn ephemeral_now() -> SeedSource {
    use std::time::{SystemTime, UNIX_EPOCH};

    let unix_millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0);
    SeedSource::ephemeral(unix_millis, uuid::Uuid::new_v4().as_u128())
}

fn push_base36_fragment(out: &mut String, mut entropy: u128) {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    for _ in 0..EPHEMERAL_FRAGMENT_LEN {
        out.push(DIGITS[(entropy % 36) as usize] as char);
        entropy /= 36;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::ParamMap;

    fn params(entries: &[(&str, Param)]) -> Param {
        let mut map = ParamMap::new();
        for (key, value) in entries {
            map.insert(*key, value.clone());
        }
        Param::Object(map)
    }

    #[test]
    fn combined_seed_ignores_key_order() {
        let a = params(&[("count", 5.into()), ("unique", true.into())]);
        let b = params(&[("unique", true.into()), ("count", 5.into())]);
        assert_eq!(combine_reproducible("abc", &a), "abc|{count:5,unique:true}");
        assert_eq!(combine_reproducible("abc", &a), combine_reproducible("abc", &b));
    }

    #[test]
    fn missing_params_serialize_as_undefined() {
        assert_eq!(combine_reproducible("12345", &Param::Undefined), "12345|undefined");
    }

    #[test]
    fn ephemeral_seed_has_millis_and_fragment() {
        let seed = SeedSource::ephemeral(1_700_000_000_000, 35);
        assert!(!seed.is_reproducible());
        assert_eq!(seed.as_str(), "1700000000000-z00000000");

        let (millis, fragment) = seed.as_str().split_once('-').unwrap();
        assert_eq!(millis, "1700000000000");
        assert_eq!(fragment.len(), EPHEMERAL_FRAGMENT_LEN);
    }

    #[test]
    fn seed_source_serializes_with_kind_tag() {
        let seed = SeedSource::Reproducible("abc|{}".into());
        let json = serde_json::to_string(&seed).unwrap();
        assert_eq!(json, r#"{"kind":"reproducible","seed":"abc|{}"}"#);
        assert_eq!(serde_json::from_str::<SeedSource>(&json).unwrap(), seed);
    }

    #[cfg(feature = "std")]
    #[test]
    fn combine_seed_tags_reproducible_and_ephemeral() {
        let p = params(&[("count", 1.into())]);
        let seeded = combine_seed(Some("base"), &p);
        assert_eq!(seeded, SeedSource::Reproducible("base|{count:1}".into()));

        assert!(!combine_seed(None, &p).is_reproducible());
        assert!(!combine_seed(Some(""), &p).is_reproducible());
    }

    #[test]
    fn rng_is_built_from_the_combined_string() {
        let seed = SeedSource::Reproducible("12345".into());
        assert_eq!(seed.rng(), SeededRng::from_seed_str("12345"));
    }
}
