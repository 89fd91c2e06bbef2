//! Site-level schemas: Organization, WebSite, WebPage.

use kitseo_types::{non_empty, SchemaNode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{require, SchemaResult, Validate};

/// Fixed `query-input` literal paired with a search template.
pub const SEARCH_QUERY_INPUT: &str = "required name=search_term_string";

/// Input for [`organization`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrganizationProps {
    pub name: String,
    pub url: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub same_as: Vec<String>,
    pub contact_point: Option<ContactPointProps>,
}

impl OrganizationProps {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Validate for OrganizationProps {
    fn validate(&self) -> SchemaResult<()> {
        require("name", &self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactPointProps {
    pub telephone: Option<String>,
    pub contact_type: Option<String>,
    pub email: Option<String>,
}

/// Input for [`website`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebSiteProps {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    /// Search URL with a `{search_term_string}` placeholder.
    pub search_url_template: Option<String>,
}

impl Validate for WebSiteProps {
    fn validate(&self) -> SchemaResult<()> {
        require("name", &self.name)?;
        require("url", &self.url)
    }
}

/// Input for [`webpage`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebPageProps {
    pub name: String,
    pub url: Option<String>,
    pub description: Option<String>,
    pub in_language: Option<String>,
    pub is_part_of: Option<SiteRef>,
}

impl Validate for WebPageProps {
    fn validate(&self) -> SchemaResult<()> {
        require("name", &self.name)
    }
}

/// Reference to the enclosing WebSite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteRef {
    pub name: String,
    pub url: String,
}

pub fn organization(props: &OrganizationProps) -> SchemaNode {
    SchemaNode::new("Organization")
        .with("name", props.name.as_str())
        .with_text("url", props.url.as_deref())
        .with_text("logo", props.logo.as_deref())
        .with_text("description", props.description.as_deref())
        .with_list("sameAs", &props.same_as)
        .with_node(
            "contactPoint",
            props.contact_point.as_ref().and_then(contact_point),
        )
}

fn contact_point(props: &ContactPointProps) -> Option<SchemaNode> {
    let node = SchemaNode::nested("ContactPoint")
        .with_text("telephone", props.telephone.as_deref())
        .with_text("contactType", props.contact_type.as_deref())
        .with_text("email", props.email.as_deref());
    // Only "@type" means nothing was supplied.
    if node.len() == 1 {
        debug!("Contact point has no fields, omitting");
        return None;
    }
    Some(node)
}

pub fn website(props: &WebSiteProps) -> SchemaNode {
    let action = non_empty(props.search_url_template.as_deref()).map(|template| {
        SchemaNode::nested("SearchAction")
            .with(
                "target",
                SchemaNode::nested("EntryPoint").with("urlTemplate", template),
            )
            .with("query-input", SEARCH_QUERY_INPUT)
    });

    SchemaNode::new("WebSite")
        .with("name", props.name.as_str())
        .with("url", props.url.as_str())
        .with_text("description", props.description.as_deref())
        .with_node("potentialAction", action)
}

pub fn webpage(props: &WebPageProps) -> SchemaNode {
    let part_of = props
        .is_part_of
        .as_ref()
        .filter(|site| !site.name.is_empty())
        .map(|site| {
            SchemaNode::nested("WebSite")
                .with("name", site.name.as_str())
                .with_text("url", Some(site.url.as_str()))
        });

    SchemaNode::new("WebPage")
        .with("name", props.name.as_str())
        .with_text("description", props.description.as_deref())
        .with_text("url", props.url.as_deref())
        .with_text("inLanguage", props.in_language.as_deref())
        .with_node("isPartOf", part_of)
}
