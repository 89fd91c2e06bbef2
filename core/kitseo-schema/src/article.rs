//! Content schemas: Article and Person.

use kitseo_types::{non_empty, SchemaNode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{require, SchemaResult, Validate};

/// An image given either as one url or as a list of urls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageInput {
    One(String),
    Many(Vec<String>),
}

impl ImageInput {
    /// Normalizes to a list; a single url becomes a one-element list.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Self::One(url) => vec![url.clone()],
            Self::Many(urls) => urls.clone(),
        }
    }
}

impl From<&str> for ImageInput {
    fn from(url: &str) -> Self {
        Self::One(url.to_string())
    }
}

impl From<Vec<String>> for ImageInput {
    fn from(urls: Vec<String>) -> Self {
        Self::Many(urls)
    }
}

/// Article author. Emitted only when `name` is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorRef {
    pub name: Option<String>,
    pub url: Option<String>,
}

/// Article publisher. Emitted only when `name` is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherRef {
    pub name: Option<String>,
    pub logo: Option<String>,
}

/// Input for [`article`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArticleProps {
    pub headline: String,
    pub description: Option<String>,
    pub image: Option<ImageInput>,
    pub date_published: Option<String>,
    pub date_modified: Option<String>,
    pub author: Option<AuthorRef>,
    pub publisher: Option<PublisherRef>,
    pub url: Option<String>,
}

impl Validate for ArticleProps {
    fn validate(&self) -> SchemaResult<()> {
        require("headline", &self.headline)
    }
}

/// Input for [`person`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonProps {
    pub name: String,
    pub job_title: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub same_as: Vec<String>,
}

impl Validate for PersonProps {
    fn validate(&self) -> SchemaResult<()> {
        require("name", &self.name)
    }
}

pub fn article(props: &ArticleProps) -> SchemaNode {
    let images = props.image.as_ref().map(ImageInput::to_list).unwrap_or_default();

    let author = props.author.as_ref().and_then(|author| {
        let Some(name) = non_empty(author.name.as_deref()) else {
            debug!("Article author has no name, omitting");
            return None;
        };
        Some(
            SchemaNode::nested("Person")
                .with("name", name)
                .with_text("url", author.url.as_deref()),
        )
    });

    let publisher = props.publisher.as_ref().and_then(|publisher| {
        let Some(name) = non_empty(publisher.name.as_deref()) else {
            debug!("Article publisher has no name, omitting");
            return None;
        };
        let logo = non_empty(publisher.logo.as_deref())
            .map(|url| SchemaNode::nested("ImageObject").with("url", url));
        Some(
            SchemaNode::nested("Organization")
                .with("name", name)
                .with_node("logo", logo),
        )
    });

    let url = non_empty(props.url.as_deref());
    let main_entity = url.map(|url| SchemaNode::nested("WebPage").with("@id", url));

    SchemaNode::new("Article")
        .with("headline", props.headline.as_str())
        .with_text("description", props.description.as_deref())
        .with_list("image", &images)
        .with_text("datePublished", props.date_published.as_deref())
        .with_text("dateModified", props.date_modified.as_deref())
        .with_node("author", author)
        .with_node("publisher", publisher)
        .with_text("url", url)
        .with_node("mainEntityOfPage", main_entity)
}

pub fn person(props: &PersonProps) -> SchemaNode {
    SchemaNode::new("Person")
        .with("name", props.name.as_str())
        .with_text("jobTitle", props.job_title.as_deref())
        .with_text("image", props.image.as_deref())
        .with_text("url", props.url.as_deref())
        .with_list("sameAs", &props.same_as)
}
