use kitseo_schema::{
    normalize_price, product, review, ProductProps, ReviewProps, DEFAULT_CURRENCY, IN_STOCK,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn named(name: &str) -> ProductProps {
    ProductProps {
        name: name.into(),
        ..ProductProps::default()
    }
}

// ── Price normalization ──────────────────────────────────────────

#[test]
fn strips_currency_symbols_and_separators() {
    assert_eq!(normalize_price("$1,299.00"), "1299.00");
    assert_eq!(normalize_price("€ 49"), "49");
    assert_eq!(normalize_price("USD 10.5"), "10.5");
    assert_eq!(normalize_price("call us"), "");
}

// ── Product ──────────────────────────────────────────────────────

#[test]
fn product_without_price_has_no_offers() {
    let node = product(&named("Headphones"));
    assert!(!node.contains_key("offers"));
    assert_eq!(node.len(), 3);
}

#[test]
fn product_price_builds_offer() {
    let mut props = named("Headphones");
    props.price = Some("$199.99".into());
    let node = product(&props);
    assert_eq!(
        node.get("offers"),
        Some(&json!({
            "@type": "Offer",
            "price": "199.99",
            "priceCurrency": DEFAULT_CURRENCY,
            "availability": IN_STOCK
        }))
    );
}

#[test]
fn product_explicit_currency() {
    let mut props = named("Headphones");
    props.price = Some("149".into());
    props.price_currency = Some("CAD".into());
    let node = product(&props);
    assert_eq!(node.get_str("/offers/priceCurrency"), Some("CAD"));
}

#[test]
fn non_numeric_price_omits_price_key() {
    let mut props = named("Headphones");
    props.price = Some("TBD".into());
    let node = product(&props);
    assert!(node.get_str("/offers/price").is_none());
    assert_eq!(node.get_str("/offers/availability"), Some(IN_STOCK));
}

#[test]
fn product_text_fields() {
    let node = product(&ProductProps {
        name: "Headphones".into(),
        description: Some("Closed-back".into()),
        image: Some("https://cdn.test/h.jpg".into()),
        url: Some("https://shop.test/h".into()),
        ..ProductProps::default()
    });
    assert_eq!(node.get_str("/description"), Some("Closed-back"));
    assert_eq!(node.get_str("/image"), Some("https://cdn.test/h.jpg"));
    assert_eq!(node.get_str("/url"), Some("https://shop.test/h"));
}

// ── Review ───────────────────────────────────────────────────────

#[test]
fn review_without_rating() {
    let node = review(&ReviewProps {
        author_name: "Ada".into(),
        review_body: Some("Great".into()),
        ..ReviewProps::default()
    });
    assert_eq!(node.get("author"), Some(&json!({"@type": "Person", "name": "Ada"})));
    assert_eq!(node.get_str("/reviewBody"), Some("Great"));
    assert!(!node.contains_key("reviewRating"));
}

#[test]
fn review_rating_defaults_best_to_five() {
    let node = review(&ReviewProps {
        author_name: "Ada".into(),
        rating_value: Some(4.0),
        ..ReviewProps::default()
    });
    assert_eq!(
        node.get("reviewRating"),
        Some(&json!({"@type": "Rating", "ratingValue": 4, "bestRating": 5}))
    );
}

#[test]
fn review_zero_rating_is_kept() {
    let node = review(&ReviewProps {
        author_name: "Ada".into(),
        rating_value: Some(0.0),
        best_rating: Some(10.0),
        ..ReviewProps::default()
    });
    assert_eq!(node.pointer("/reviewRating/ratingValue"), Some(&json!(0)));
    assert_eq!(node.pointer("/reviewRating/bestRating"), Some(&json!(10)));
}

#[test]
fn review_fractional_rating() {
    let node = review(&ReviewProps {
        author_name: "Ada".into(),
        rating_value: Some(4.5),
        ..ReviewProps::default()
    });
    assert_eq!(node.pointer("/reviewRating/ratingValue"), Some(&json!(4.5)));
}

#[test]
fn review_nan_rating_is_omitted() {
    let node = review(&ReviewProps {
        author_name: "Ada".into(),
        rating_value: Some(f64::NAN),
        ..ReviewProps::default()
    });
    assert!(!node.contains_key("reviewRating"));
}
