use serde::{Deserialize, Serialize};

/// One step of a breadcrumb trail.
///
/// Positions are 1-based and contiguous within a trail. `url` may be empty
/// when the step has no resolvable location (e.g. the current page rendered
/// without an active request).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
    pub name: String,
    pub url: String,
    pub position: u32,
}

impl BreadcrumbEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>, position: u32) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            position,
        }
    }

    /// Numbers `(name, url)` pairs in order, starting at position 1.
    pub fn numbered<I, N, U>(steps: I) -> Vec<Self>
    where
        I: IntoIterator<Item = (N, U)>,
        N: Into<String>,
        U: Into<String>,
    {
        steps
            .into_iter()
            .zip(1u32..)
            .map(|((name, url), position)| Self::new(name, url, position))
            .collect()
    }
}
