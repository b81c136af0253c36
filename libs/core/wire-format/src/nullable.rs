//! Three-state patch fields.
//!
//! Plain serde maps both a missing field and an explicit `null` to `None`,
//! which loses the difference between "leave as is" and "clear it". Used as
//! `#[serde(default, deserialize_with = "wire_format::nullable::deserialize")]`
//! on an `Option<Option<T>>` field:
//!
//! | JSON              | Rust               |
//! |-------------------|--------------------|
//! | field omitted     | `None`             |
//! | `"field": null`   | `Some(None)`       |
//! | `"field": value`  | `Some(Some(value))`|

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "crate::nullable::deserialize")]
        status: Option<Option<String>>,
    }

    #[test]
    fn test_missing_field_is_none() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.status, None);
    }

    #[test]
    fn test_explicit_null_is_some_none() {
        let patch: Patch = serde_json::from_str(r#"{"status":null}"#).unwrap();
        assert_eq!(patch.status, Some(None));
    }

    #[test]
    fn test_value_is_some_some() {
        let patch: Patch = serde_json::from_str(r#"{"status":"active"}"#).unwrap();
        assert_eq!(patch.status, Some(Some("active".to_string())));
    }
}
