use thiserror::Error;

/// Errors raised while rendering or reading JSON-LD text.
#[derive(Debug, Error)]
pub enum JsonLdError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid schema node: {0}")]
    Node(#[from] kitseo_types::Error),
}

pub type JsonLdResult<T> = Result<T, JsonLdError>;
