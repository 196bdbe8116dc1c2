//! Canonical text form of generator parameters.
//!
//! The canonical form is a hashing aid, not an interchange format: strings are
//! written verbatim with no quoting, so `["a,b"]` and `["a", "b"]` share an
//! encoding. Object keys are sorted, array order is kept.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt::{self, Write};

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

/// JSON-like parameter value. `Undefined` and `Null` are distinct.
#[derive(Clone, Debug, PartialEq)]
pub enum Param {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Array(Vec<Param>),
    Object(ParamMap),
}

/// Key/value pairs in insertion order. Keys are unique.
#[derive(Clone, Debug, Default)]
pub struct ParamMap {
    entries: Vec<(String, Param)>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key`, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Param>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Param>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Param> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Param> {
        let index = self.entries.iter().position(|(existing, _)| existing == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Param)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Entries ordered by UTF-16 code units, the ordering of a default
    /// JavaScript `Array.prototype.sort` on strings.
    fn sorted(&self) -> Vec<(&str, &Param)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|(a, _), (b, _)| a.encode_utf16().cmp(b.encode_utf16()));
        sorted
    }
}

// Structural equality: same pairs, any insertion order.
impl PartialEq for ParamMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl Param {
    pub fn object() -> Self {
        Self::Object(ParamMap::new())
    }
}

/// Serializes `value` into its canonical string.
pub fn canonicalize(value: &Param) -> String {
    value.to_string()
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_canonical(f, self)
    }
}

fn write_canonical<W: Write>(out: &mut W, value: &Param) -> fmt::Result {
    match value {
        Param::Undefined => out.write_str("undefined"),
        Param::Null => out.write_str("null"),
        Param::Bool(b) => out.write_str(if *b { "true" } else { "false" }),
        Param::Number(n) => write_number(out, *n),
        Param::Str(s) => out.write_str(s),
        Param::Array(items) => {
            out.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write_canonical(out, item)?;
            }
            out.write_char(']')
        }
        Param::Object(map) => {
            out.write_char('{')?;
            for (i, (key, item)) in map.sorted().into_iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                out.write_str(key)?;
                out.write_char(':')?;
                write_canonical(out, item)?;
            }
            out.write_char('}')
        }
    }
}

/// Number-to-string coercion as done by ECMAScript `String(n)`.
fn write_number<W: Write>(out: &mut W, value: f64) -> fmt::Result {
    if value.is_nan() {
        return out.write_str("NaN");
    }
    if value.is_infinite() {
        return out.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        // Covers -0.
        return out.write_char('0');
    }

    let magnitude = if value < 0.0 { -value } else { value };
    if (1e-6..1e21).contains(&magnitude) {
        return write!(out, "{value}");
    }

    let exponent_form = alloc::format!("{value:e}");
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(out, "{mantissa}e+{exponent}")
        }
        _ => out.write_str(&exponent_form),
    }
}

impl From<bool> for Param {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

macro_rules! param_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Param {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

param_from_int!(i32, i64, u32, u64, usize);

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<ParamMap> for Param {
    fn from(value: ParamMap) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<Param>> From<Vec<T>> for Param {
    fn from(value: Vec<T>) -> Self {
        Self::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Param>> FromIterator<T> for Param {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<'de> Deserialize<'de> for Param {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ParamVisitor)
    }
}

struct ParamVisitor;

impl<'de> Visitor<'de> for ParamVisitor {
    type Value = Param;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON-like value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Param, E> {
        Ok(Param::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Param, E> {
        Ok(Param::Number(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Param, E> {
        Ok(Param::Number(value as f64))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Param, E> {
        Ok(Param::Number(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Param, E> {
        Ok(Param::Str(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Param, E> {
        Ok(Param::Str(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Param, E> {
        Ok(Param::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Param, E> {
        Ok(Param::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Param, D::Error> {
        Param::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Param, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Param::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Param, A::Error> {
        let mut map = ParamMap::new();
        while let Some((key, value)) = access.next_entry::<String, Param>()? {
            map.insert(key, value);
        }
        Ok(Param::Object(map))
    }
}
