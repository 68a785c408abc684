//! Epoch-second timestamps as the server sends them.
//!
//! Some server builds encode timestamps as JSON numbers, others as numeric
//! strings (`"1718000000"`). Both decode to `i64` seconds.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawTimestamp {
    fn into_seconds<E: de::Error>(self) -> Result<i64, E> {
        match self {
            RawTimestamp::Int(secs) => Ok(secs),
            RawTimestamp::Float(secs) => Ok(secs.trunc() as i64),
            RawTimestamp::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("invalid epoch timestamp: {:?}", text))),
        }
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    RawTimestamp::deserialize(deserializer)?.into_seconds()
}

pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawTimestamp>::deserialize(deserializer)? {
        Some(RawTimestamp::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(raw) => raw.into_seconds().map(Some),
        None => Ok(None),
    }
}
