//! `#[serde(with = "wire_format::date")]` for `Option<NaiveDate>` fields.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer, de::Error};

use crate::DATE_FORMAT;

pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.collect_str(&date.format(DATE_FORMAT)),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(D::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Due {
        #[serde(default, with = "crate::date")]
        due: Option<NaiveDate>,
    }

    #[test]
    fn test_date_round_trip() {
        let due = Due {
            due: NaiveDate::from_ymd_opt(2024, 3, 1),
        };
        let json = serde_json::to_string(&due).unwrap();
        assert_eq!(json, r#"{"due":"2024-03-01"}"#);
        assert_eq!(serde_json::from_str::<Due>(&json).unwrap(), due);
    }

    #[test]
    fn test_null_and_missing_are_none() {
        assert_eq!(serde_json::to_string(&Due { due: None }).unwrap(), r#"{"due":null}"#);
        assert_eq!(serde_json::from_str::<Due>(r#"{"due":null}"#).unwrap().due, None);
        assert_eq!(serde_json::from_str::<Due>("{}").unwrap().due, None);
    }

    #[test]
    fn test_time_of_day_is_rejected() {
        assert!(serde_json::from_str::<Due>(r#"{"due":"2024-03-01T10:00:00Z"}"#).is_err());
    }
}
