//! Property-based tests for trail assembly.
//!
//! For any chain and page name:
//! - positions run 1..=n with no gaps
//! - schema items, entries and visible links agree one-to-one
//! - truncated titles never exceed 27 characters

use kitseo_breadcrumb::{assemble, truncate_title, Ancestor, BreadcrumbSource, TITLE_LIMIT};
use kitseo_jsonld::{from_json_ld, to_json_ld, Format};
use proptest::prelude::*;
use serde_json::Value;

fn ancestor() -> impl Strategy<Value = Ancestor> {
    ("[a-z]{1,10}", "[A-Za-z ]{0,40}", "/[a-z/]{0,20}").prop_map(|(name, title, url)| {
        Ancestor::new(name).with_title(title).with_url(url)
    })
}

proptest! {
    #[test]
    fn positions_are_contiguous(
        chain in prop::collection::vec(ancestor(), 0..12),
        name in "[A-Za-z ]{1,60}",
    ) {
        let expected = chain.len() + 1;
        let trail = assemble(&BreadcrumbSource::new(Some(chain), name), None);
        prop_assert_eq!(trail.entries().len(), expected);
        prop_assert_eq!(trail.links().len(), expected);
        for (i, entry) in trail.entries().iter().enumerate() {
            prop_assert_eq!(entry.position as usize, i + 1);
            prop_assert_eq!(&entry.name, &trail.links()[i].label);
        }

        let schema = trail.schema().unwrap();
        let items = schema.get("itemListElement").and_then(Value::as_array).unwrap();
        prop_assert_eq!(items.len(), expected);
    }

    #[test]
    fn truncation_is_bounded(title in "\\PC{0,80}") {
        let out = truncate_title(&title);
        let len = title.chars().count();
        if len <= TITLE_LIMIT {
            prop_assert_eq!(out, title);
        } else {
            prop_assert!(out.ends_with("..."));
            prop_assert!(out.chars().count() <= 27);
        }
    }

    #[test]
    fn schema_roundtrips(chain in prop::collection::vec(ancestor(), 0..6)) {
        let trail = assemble(&BreadcrumbSource::new(Some(chain), "Page"), None);
        let schema = trail.schema().unwrap();
        let text = to_json_ld(Some(&schema), Format::Compact).unwrap().unwrap();
        prop_assert_eq!(from_json_ld(&text).unwrap(), schema);
    }
}
