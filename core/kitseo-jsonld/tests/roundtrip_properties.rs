//! Property-based tests for JSON-LD rendering.
//!
//! Whatever text a field holds, rendered output must:
//! - parse back to the same node
//! - never contain a raw `<`, so no closing tag can escape the element
//!
//! Numeric fields (coordinates, ratings) must come back without precision
//! loss.

use kitseo_jsonld::{from_json_ld, to_json_ld, Format};
use kitseo_schema::{
    article, place, review, ArticleProps, AuthorRef, ImageInput, PlaceProps, ReviewProps,
};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{1,40}",
        "[<>&/\"'\\\\a-z\u{2028}\u{2029}]{1,40}",
        Just("</script><script>".to_string()),
    ]
}

fn format() -> impl Strategy<Value = Format> {
    prop_oneof![Just(Format::Pretty), Just(Format::Compact)]
}

proptest! {
    #[test]
    fn render_then_parse_is_identity(
        headline in text(),
        author in text(),
        images in prop::collection::vec(text(), 0..4),
        format in format(),
    ) {
        let node = article(&ArticleProps {
            headline,
            author: Some(AuthorRef { name: Some(author), url: None }),
            image: Some(ImageInput::Many(images)),
            ..ArticleProps::default()
        });
        let text = to_json_ld(Some(&node), format).unwrap().unwrap();
        prop_assert!(!text.contains('<'));
        prop_assert_eq!(from_json_ld(&text).unwrap(), node);
    }

    #[test]
    fn coordinates_survive_render_then_parse(
        latitude in -90.0f64..90.0,
        longitude in -180.0f64..180.0,
        format in format(),
    ) {
        let node = place(&PlaceProps {
            name: "Riverside Bowl".into(),
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..PlaceProps::default()
        });
        let text = to_json_ld(Some(&node), format).unwrap().unwrap();
        let parsed = from_json_ld(&text).unwrap();
        prop_assert_eq!(
            parsed.pointer("/geo/latitude").and_then(|v| v.as_f64()),
            Some(latitude)
        );
        prop_assert_eq!(
            parsed.pointer("/geo/longitude").and_then(|v| v.as_f64()),
            Some(longitude)
        );
        prop_assert_eq!(parsed, node);
    }

    #[test]
    fn ratings_survive_render_then_parse(
        rating in 0.0f64..5.0,
        best in prop::option::of(1.0f64..10.0),
        format in format(),
    ) {
        let node = review(&ReviewProps {
            author_name: "Dana".into(),
            rating_value: Some(rating),
            best_rating: best,
            ..ReviewProps::default()
        });
        let text = to_json_ld(Some(&node), format).unwrap().unwrap();
        let parsed = from_json_ld(&text).unwrap();
        prop_assert_eq!(
            parsed.pointer("/reviewRating/ratingValue").and_then(|v| v.as_f64()),
            Some(rating)
        );
        prop_assert_eq!(parsed, node);
    }
}
