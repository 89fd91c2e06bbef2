use kitseo_schema::{
    organization, webpage, website, ContactPointProps, OrganizationProps, SiteRef, WebPageProps,
    WebSiteProps, SEARCH_QUERY_INPUT,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

// ── Organization ─────────────────────────────────────────────────

#[test]
fn organization_name_only_has_exact_shape() {
    let node = organization(&OrganizationProps::named("Acme"));
    assert_eq!(
        Value::from(node),
        json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "name": "Acme"
        })
    );
}

#[test]
fn organization_all_fields() {
    let node = organization(&OrganizationProps {
        name: "Acme".into(),
        url: Some("https://acme.test".into()),
        logo: Some("https://acme.test/logo.png".into()),
        description: Some("Anvils".into()),
        same_as: vec!["https://social.test/acme".into()],
        contact_point: Some(ContactPointProps {
            telephone: Some("+1-555-0100".into()),
            contact_type: Some("customer service".into()),
            email: None,
        }),
    });
    assert_eq!(
        Value::from(node),
        json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "name": "Acme",
            "url": "https://acme.test",
            "logo": "https://acme.test/logo.png",
            "description": "Anvils",
            "sameAs": ["https://social.test/acme"],
            "contactPoint": {
                "@type": "ContactPoint",
                "telephone": "+1-555-0100",
                "contactType": "customer service"
            }
        })
    );
}

#[test]
fn organization_empty_same_as_is_omitted() {
    let mut props = OrganizationProps::named("Acme");
    props.same_as = vec![];
    assert!(!organization(&props).contains_key("sameAs"));
}

#[test]
fn organization_blank_contact_point_is_omitted() {
    let mut props = OrganizationProps::named("Acme");
    props.contact_point = Some(ContactPointProps::default());
    assert!(!organization(&props).contains_key("contactPoint"));
}

// ── WebSite ──────────────────────────────────────────────────────

#[test]
fn website_without_search() {
    let node = website(&WebSiteProps {
        name: "Docs".into(),
        url: "https://docs.test".into(),
        ..WebSiteProps::default()
    });
    assert_eq!(node.schema_type(), Some("WebSite"));
    assert_eq!(node.get_str("/url"), Some("https://docs.test"));
    assert!(!node.contains_key("potentialAction"));
    assert!(!node.contains_key("description"));
}

#[test]
fn website_search_template_adds_action() {
    let node = website(&WebSiteProps {
        name: "Docs".into(),
        url: "https://docs.test".into(),
        search_url_template: Some("https://docs.test/search?q={search_term_string}".into()),
        ..WebSiteProps::default()
    });
    assert_eq!(
        node.get("potentialAction"),
        Some(&json!({
            "@type": "SearchAction",
            "target": {
                "@type": "EntryPoint",
                "urlTemplate": "https://docs.test/search?q={search_term_string}"
            },
            "query-input": SEARCH_QUERY_INPUT
        }))
    );
}

// ── WebPage ──────────────────────────────────────────────────────

#[test]
fn webpage_minimal() {
    let node = webpage(&WebPageProps {
        name: "About".into(),
        ..WebPageProps::default()
    });
    assert_eq!(node.len(), 3);
    assert_eq!(node.get_str("/name"), Some("About"));
}

#[test]
fn webpage_is_part_of_site() {
    let node = webpage(&WebPageProps {
        name: "About".into(),
        url: Some("https://acme.test/about".into()),
        in_language: Some("en-CA".into()),
        is_part_of: Some(SiteRef {
            name: "Acme".into(),
            url: "https://acme.test".into(),
        }),
        ..WebPageProps::default()
    });
    assert_eq!(node.get_str("/inLanguage"), Some("en-CA"));
    assert_eq!(
        node.get("isPartOf"),
        Some(&json!({"@type": "WebSite", "name": "Acme", "url": "https://acme.test"}))
    );
}

#[test]
fn webpage_unnamed_site_is_omitted() {
    let node = webpage(&WebPageProps {
        name: "About".into(),
        is_part_of: Some(SiteRef::default()),
        ..WebPageProps::default()
    });
    assert!(!node.contains_key("isPartOf"));
}
