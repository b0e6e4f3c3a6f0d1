//! Serde helpers for loosely typed backend payloads.
//!
//! Identifiers arrive as JSON strings from some endpoints and as integers from
//! others; both are normalised to `String`.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Int(n) => n.to_string(),
            RawId::Float(n) => n.to_string(),
        }
    }
}

/// Deserialize an identifier given as a string or a number.
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

/// Optional variant of [`id`]; use together with `#[serde(default)]`.
pub fn opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawId>::deserialize(deserializer).map(|raw| raw.map(String::from))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Parsed(T),
    Ignored(IgnoredAny),
}

/// Deserialize an embedded record, yielding `None` when it does not decode.
///
/// Listings that do not preload an association still carry it as a
/// zero-valued object (`"role": ""` and so on); such objects are dropped
/// instead of failing the whole listing. Use together with `#[serde(default)]`.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<Lenient<T>>::deserialize(deserializer)? {
        Some(Lenient::Parsed(value)) => Ok(Some(value)),
        Some(Lenient::Ignored(_)) | None => Ok(None),
    }
}
