use thiserror::Error;

#[derive(Debug, Error)]
pub enum BreadcrumbError {
    /// The CMS component payload did not have the expected shape.
    #[error("invalid breadcrumb payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// The active page location is not an absolute url.
    #[error("invalid page location {href:?}: {source}")]
    InvalidLocation {
        href: String,
        #[source]
        source: url::ParseError,
    },
}

pub type BreadcrumbResult<T> = Result<T, BreadcrumbError>;
