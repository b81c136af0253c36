use crate::{CodecError, CodecResult, LIST_DELIMITER, check_capacity, contains_reserved};

/// Encode an ordered list into a single column value.
///
/// The empty list encodes to the empty string. Element order is preserved and
/// empty elements survive the round trip.
pub fn encode_list<S: AsRef<str>>(items: &[S], capacity: usize) -> CodecResult<String> {
    let mut encoded = String::new();

    for item in items {
        let item = item.as_ref();
        if contains_reserved(item) {
            return Err(CodecError::ReservedDelimiter);
        }
        encoded.push_str(item);
        encoded.push(LIST_DELIMITER);
    }

    check_capacity(&encoded, capacity)?;
    Ok(encoded)
}

/// Decode a column value produced by [`encode_list`].
///
/// A trailing element without its terminator is still returned, so values
/// written by hand (`"web"`) decode as a one-element list.
pub fn decode_list(raw: &str) -> Vec<String> {
    raw.split_terminator(LIST_DELIMITER)
        .map(str::to_string)
        .collect()
}
