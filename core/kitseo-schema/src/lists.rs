//! List-shaped schemas: BreadcrumbList and FAQPage.
//!
//! Both return `None` for an empty input. Callers must skip rendering in that
//! case rather than emit an empty list.

use kitseo_types::{BreadcrumbEntry, FaqEntry, SchemaNode};
use tracing::debug;

pub fn breadcrumb_list(entries: &[BreadcrumbEntry]) -> Option<SchemaNode> {
    if entries.is_empty() {
        debug!("No breadcrumb entries, no BreadcrumbList");
        return None;
    }

    let items = entries
        .iter()
        .map(|entry| {
            SchemaNode::nested("ListItem")
                .with("position", entry.position)
                .with("name", entry.name.as_str())
                .with_text("item", Some(entry.url.as_str()))
        })
        .collect();

    Some(SchemaNode::new("BreadcrumbList").with_nodes("itemListElement", items))
}

pub fn faq_page(entries: &[FaqEntry]) -> Option<SchemaNode> {
    if entries.is_empty() {
        debug!("No FAQ entries, no FAQPage");
        return None;
    }

    let questions = entries
        .iter()
        .map(|entry| {
            SchemaNode::nested("Question")
                .with("name", entry.question.as_str())
                .with(
                    "acceptedAnswer",
                    SchemaNode::nested("Answer").with("text", entry.answer.as_str()),
                )
        })
        .collect();

    Some(SchemaNode::new("FAQPage").with_nodes("mainEntity", questions))
}
