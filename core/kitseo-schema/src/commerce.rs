//! Commerce schemas: Product (with Offer) and Review.

use kitseo_types::{non_empty, SchemaNode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{number, require, SchemaResult, Validate};

/// Currency assumed when a price carries none.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Availability emitted on every offer.
pub const IN_STOCK: &str = "https://schema.org/InStock";

/// Scale top assumed when a rating carries none.
pub const DEFAULT_BEST_RATING: u32 = 5;

/// Input for [`product`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductProps {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    /// Display price, possibly with currency symbols ("$1,299.00").
    pub price: Option<String>,
    pub price_currency: Option<String>,
}

impl Validate for ProductProps {
    fn validate(&self) -> SchemaResult<()> {
        require("name", &self.name)
    }
}

/// Input for [`review`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewProps {
    pub author_name: String,
    pub review_body: Option<String>,
    pub rating_value: Option<f64>,
    pub best_rating: Option<f64>,
}

impl Validate for ReviewProps {
    fn validate(&self) -> SchemaResult<()> {
        require("authorName", &self.author_name)
    }
}

/// Keeps only ASCII digits and `.`; "$1,299.00" becomes "1299.00".
pub fn normalize_price(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}

pub fn product(props: &ProductProps) -> SchemaNode {
    let offers = non_empty(props.price.as_deref()).map(|raw| {
        let price = normalize_price(raw);
        if price.is_empty() {
            debug!("Price {:?} has no numeric part, omitting price", raw);
        }
        SchemaNode::nested("Offer")
            .with_text("price", Some(price.as_str()))
            .with(
                "priceCurrency",
                non_empty(props.price_currency.as_deref()).unwrap_or(DEFAULT_CURRENCY),
            )
            .with("availability", IN_STOCK)
    });

    SchemaNode::new("Product")
        .with("name", props.name.as_str())
        .with_text("description", props.description.as_deref())
        .with_text("image", props.image.as_deref())
        .with_text("url", props.url.as_deref())
        .with_node("offers", offers)
}

pub fn review(props: &ReviewProps) -> SchemaNode {
    let rating = props.rating_value.and_then(number).map(|value| {
        let best = props
            .best_rating
            .and_then(number)
            .unwrap_or_else(|| Value::from(DEFAULT_BEST_RATING));
        SchemaNode::nested("Rating")
            .with("ratingValue", value)
            .with("bestRating", best)
    });

    SchemaNode::new("Review")
        .with(
            "author",
            SchemaNode::nested("Person").with("name", props.author_name.as_str()),
        )
        .with_text("reviewBody", props.review_body.as_deref())
        .with_node("reviewRating", rating)
}
