//! Column Codec
//!
//! Packs structured values into a single delimited string so they fit a
//! fixed-width relational column, and unpacks them again on the way out.
//!
//! - Ordered string lists: every element is terminated by [`LIST_DELIMITER`].
//! - String maps: every pair is written as `key` [`KEY_VALUE_SEPARATOR`]
//!   `value` [`PAIR_TERMINATOR`].
//!
//! Both delimiters are ASCII control characters (unit/record separator) that
//! never appear in ordinary user input. Values containing them are rejected
//! rather than escaped, and encodings wider than the column capacity are
//! rejected rather than truncated.
//!
//! # Example
//!
//! ```
//! use column_codec::{decode_list, encode_list};
//!
//! let tags = vec!["web".to_string(), "design".to_string()];
//! let stored = encode_list(&tags, 1000).unwrap();
//! assert_eq!(decode_list(&stored), tags);
//! ```

mod error;
mod list;
mod map;

pub use error::{CodecError, CodecResult};
pub use list::{decode_list, encode_list};
pub use map::{decode_map, encode_map};

/// Terminates each element of an encoded list.
pub const LIST_DELIMITER: char = '\u{1f}';

/// Separates a key from its value inside an encoded map pair.
pub const KEY_VALUE_SEPARATOR: char = '\u{1f}';

/// Terminates each pair of an encoded map.
pub const PAIR_TERMINATOR: char = '\u{1e}';

fn contains_reserved(value: &str) -> bool {
    value.contains([LIST_DELIMITER, PAIR_TERMINATOR])
}

/// Column widths are measured in characters, matching `VARCHAR(n)`.
fn check_capacity(encoded: &str, capacity: usize) -> CodecResult<()> {
    let length = encoded.chars().count();
    if length > capacity {
        return Err(CodecError::CapacityExceeded { length, capacity });
    }
    Ok(())
}
