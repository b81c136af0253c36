//! `#[serde(with = "wire_format::timestamp")]` for `NaiveDateTime` fields.
//!
//! Sub-second precision is dropped on output.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer, de::Error};

use crate::TIMESTAMP_FORMAT;

pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(D::Error::custom)
}
