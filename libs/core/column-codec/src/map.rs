use std::collections::BTreeMap;

use crate::{
    CodecError, CodecResult, KEY_VALUE_SEPARATOR, PAIR_TERMINATOR, check_capacity,
    contains_reserved,
};

/// Encode a string map into a single column value.
///
/// Pairs are written in key order, so equal maps always produce equal
/// column values. The empty map encodes to the empty string.
pub fn encode_map(map: &BTreeMap<String, String>, capacity: usize) -> CodecResult<String> {
    let mut encoded = String::new();

    for (key, value) in map {
        if contains_reserved(key) || contains_reserved(value) {
            return Err(CodecError::ReservedDelimiter);
        }
        encoded.push_str(key);
        encoded.push(KEY_VALUE_SEPARATOR);
        encoded.push_str(value);
        encoded.push(PAIR_TERMINATOR);
    }

    check_capacity(&encoded, capacity)?;
    Ok(encoded)
}

/// Decode a column value produced by [`encode_map`].
pub fn decode_map(raw: &str) -> CodecResult<BTreeMap<String, String>> {
    raw.split_terminator(PAIR_TERMINATOR)
        .map(|pair| {
            pair.split_once(KEY_VALUE_SEPARATOR)
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .ok_or_else(|| {
                    tracing::warn!(pair, "Malformed map pair in stored column");
                    CodecError::MalformedPair(pair.to_string())
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_round_trip_keeps_every_pair() {
        let socials = map(&[
            ("x", "acme"),
            ("linkedin", "https://linkedin.com/company/acme"),
            ("instagram", ""),
        ]);
        let encoded = encode_map(&socials, 1000).unwrap();
        assert_eq!(decode_map(&encoded).unwrap(), socials);
    }

    #[test]
    fn test_empty_map_encodes_to_empty_string() {
        let encoded = encode_map(&BTreeMap::new(), 1000).unwrap();
        assert_eq!(encoded, "");
        assert!(decode_map("").unwrap().is_empty());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let a = map(&[("b", "2"), ("a", "1")]);
        let b = map(&[("a", "1"), ("b", "2")]);
        assert_eq!(encode_map(&a, 100).unwrap(), encode_map(&b, 100).unwrap());
    }

    #[test]
    fn test_urls_with_separators_survive() {
        let socials = map(&[("site", "https://acme.io/?a=1&b=2:3,4")]);
        let encoded = encode_map(&socials, 1000).unwrap();
        assert_eq!(decode_map(&encoded).unwrap(), socials);
    }

    #[test]
    fn test_capacity_exceeded() {
        let socials = map(&[("x", &"a".repeat(1000))]);
        let result = encode_map(&socials, 1000);
        assert_eq!(
            result,
            Err(CodecError::CapacityExceeded {
                length: 1003,
                capacity: 1000
            })
        );
    }

    #[test]
    fn test_reserved_delimiter_in_key_or_value() {
        let bad_key = map(&[("x\u{1f}", "acme")]);
        assert_eq!(encode_map(&bad_key, 1000), Err(CodecError::ReservedDelimiter));

        let bad_value = map(&[("x", "ac\u{1e}me")]);
        assert_eq!(encode_map(&bad_value, 1000), Err(CodecError::ReservedDelimiter));
    }

    #[test]
    fn test_malformed_pair_is_reported() {
        let raw = format!("x{}acme{}broken{}", KEY_VALUE_SEPARATOR, PAIR_TERMINATOR, PAIR_TERMINATOR);
        assert_eq!(
            decode_map(&raw),
            Err(CodecError::MalformedPair("broken".to_string()))
        );
    }
}
