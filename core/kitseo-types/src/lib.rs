//! Core value types for kitseo.
//!
//! This crate defines the transient, immutable values shared by every
//! structured-data component:
//! - [`SchemaNode`]: a schema.org JSON-LD mapping
//! - [`BreadcrumbEntry`]: one `(name, url, position)` step in a trail
//! - [`FaqEntry`] and [`FaqSet`]: question/answer pairs and their bounded set
//!
//! Nothing here performs I/O. Values are built, serialized and dropped within
//! a single call.

mod breadcrumb;
mod faq;
mod node;

pub use breadcrumb::BreadcrumbEntry;
pub use faq::{FaqEntry, FaqSet, FAQ_MAX, FAQ_MIN};
pub use node::{SchemaNode, SCHEMA_CONTEXT};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing core values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("schema node has no @type")]
    MissingType,

    #[error("field must not be empty: {0}")]
    EmptyField(&'static str),
}

/// Returns the string only if it is present and non-empty.
///
/// CMS payloads routinely carry `""` for unset fields; every builder treats
/// those the same as a missing value.
#[must_use]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
