//! schema.org structured-data builders.
//!
//! One pure builder per schema.org type:
//! - site-level: [`organization`], [`website`], [`webpage`]
//! - content: [`article`], [`person`]
//! - commerce: [`product`], [`review`], [`place`]
//! - lists: [`breadcrumb_list`], [`faq_page`]
//!
//! Builders never fail. A missing optional input omits its key; a missing
//! sub-object name omits the sub-object; an empty list input yields `None`.
//! Loosely-typed CMS content is validated once, at the boundary, through
//! [`parse_props`].
//!
//! [`SiteProfile`] carries the per-kit defaults (site name, url, locale) that
//! the site-wide schemas are derived from.

mod article;
mod commerce;
mod error;
mod lists;
mod place;
mod profile;
mod site;

pub use article::{article, person, ArticleProps, AuthorRef, ImageInput, PersonProps, PublisherRef};
pub use commerce::{
    normalize_price, product, review, ProductProps, ReviewProps, DEFAULT_BEST_RATING,
    DEFAULT_CURRENCY, IN_STOCK,
};
pub use error::{SchemaError, SchemaResult};
pub use lists::{breadcrumb_list, faq_page};
pub use place::{place, PlaceKind, PlaceProps, DEFAULT_COUNTRY};
pub use profile::{SiteProfile, DEFAULT_LOCALE, FALLBACK_BASE_URL};
pub use site::{
    organization, webpage, website, ContactPointProps, OrganizationProps, SiteRef,
    WebPageProps, WebSiteProps, SEARCH_QUERY_INPUT,
};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Required-field checks for builder inputs.
pub trait Validate {
    /// Return `Err(SchemaError::MissingField)` when a required field is blank.
    fn validate(&self) -> SchemaResult<()>;
}

/// Reads and validates a builder input from loosely-typed CMS content.
///
/// Keys are camelCase, as delivered by the CMS. Unknown keys are ignored.
pub fn parse_props<P>(content: &Value) -> SchemaResult<P>
where
    P: DeserializeOwned + Validate,
{
    let props = P::deserialize(content).map_err(|e| {
        warn!("Rejected structured-data payload: {}", e);
        SchemaError::InvalidPayload(e.to_string())
    })?;
    props.validate()?;
    Ok(props)
}

pub(crate) fn require(field: &'static str, value: &str) -> SchemaResult<()> {
    if value.trim().is_empty() {
        return Err(SchemaError::MissingField(field));
    }
    Ok(())
}

/// JSON number for a finite float; integral values are emitted without a
/// fractional part. Non-finite values have no JSON form and yield `None`.
pub(crate) fn number(value: f64) -> Option<Value> {
    if !value.is_finite() {
        return None;
    }
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        return Some(Value::from(value as i64));
    }
    serde_json::Number::from_f64(value).map(Value::Number)
}
