use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Encoded value is {length} characters, column capacity is {capacity}")]
    CapacityExceeded { length: usize, capacity: usize },

    #[error("Value contains a reserved delimiter character")]
    ReservedDelimiter,

    #[error("Stored pair is missing its key/value separator: {0:?}")]
    MalformedPair(String),
}

pub type CodecResult<T> = Result<T, CodecError>;
