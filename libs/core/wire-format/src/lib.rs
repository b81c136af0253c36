//! Wire Format
//!
//! Serde helpers shared by the JSON DTOs of every domain:
//!
//! - [`timestamp`]: `yyyy-MM-ddTHH:mm:ssZ` rendering of lifecycle timestamps
//! - [`date`]: `yyyy-MM-dd` rendering of optional calendar dates
//! - [`nullable`]: three-state patch fields (omitted / `null` / value)

pub mod date;
pub mod nullable;
pub mod timestamp;

/// Timestamp layout on the wire. The trailing `Z` is a literal; values are
/// the server's local wall-clock time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Calendar date layout on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
