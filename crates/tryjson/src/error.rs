use thiserror::Error;

/// Failure kinds produced by navigation, decoding, filtering and parsing.
///
/// The string payloads describe the offending value or key for humans. They
/// are diagnostic only and carry no structure worth matching on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// The value's variant does not match the requested type or navigation.
    #[error("invalid type: {0}")]
    InvalidType(String),

    /// The object lacks the requested key.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// A decoded value was rejected by a [`filter`](crate::filter) predicate.
    #[error("filtered: {0}")]
    Filtered(String),

    /// The input bytes are not a JSON document.
    #[error("parse failed")]
    ParseFailed,

    /// Failure reported by a caller-supplied conversion.
    #[error("{0}")]
    Other(String),
}

pub type Result<T, E = JsonError> = std::result::Result<T, E>;
