//! Error types for builder input validation.

use thiserror::Error;

/// Errors raised while validating builder inputs.
///
/// Builders themselves are infallible; these only surface from
/// [`crate::parse_props`] and [`crate::Validate`].
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A required field was missing or blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The payload did not have the expected shape.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

/// Result type for schema input validation.
pub type SchemaResult<T> = Result<T, SchemaError>;
