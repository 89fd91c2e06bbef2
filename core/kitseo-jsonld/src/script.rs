//! `<script type="application/ld+json">` emission.

use kitseo_types::SchemaNode;
use serde::{Deserialize, Serialize};

use crate::{to_json_ld, Format, JsonLdResult};

/// MIME type of the script element.
pub const JSON_LD_MIME: &str = "application/ld+json";

/// When the page's loader should inject the element.
///
/// Carried through as a `data-strategy` hint; the serializer itself does not
/// act on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadStrategy {
    #[default]
    BeforeInteractive,
    AfterInteractive,
    LazyOnload,
    Worker,
}

impl LoadStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BeforeInteractive => "beforeInteractive",
            Self::AfterInteractive => "afterInteractive",
            Self::LazyOnload => "lazyOnload",
            Self::Worker => "worker",
        }
    }
}

/// Settings for one JSON-LD script element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptTag {
    id: Option<String>,
    strategy: LoadStrategy,
    format: Format,
}

impl ScriptTag {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn strategy(mut self, strategy: LoadStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Renders the element, or `None` when there is no schema to embed.
    pub fn render(&self, node: Option<&SchemaNode>) -> JsonLdResult<Option<String>> {
        let Some(body) = to_json_ld(node, self.format)? else {
            return Ok(None);
        };

        let mut tag = String::from("<script");
        if let Some(id) = self.id.as_deref().filter(|id| !id.is_empty()) {
            tag.push_str(" id=\"");
            tag.push_str(&escape_attr(id));
            tag.push('"');
        }
        tag.push_str(" type=\"");
        tag.push_str(JSON_LD_MIME);
        tag.push_str("\" data-strategy=\"");
        tag.push_str(self.strategy.as_str());
        tag.push_str("\">");
        tag.push_str(&body);
        tag.push_str("</script>");
        Ok(Some(tag))
    }
}

/// Renders several elements in order, one per line, skipping absent schemas.
pub fn render_all<'a, I>(tags: I) -> JsonLdResult<String>
where
    I: IntoIterator<Item = (&'a ScriptTag, Option<&'a SchemaNode>)>,
{
    let mut rendered = Vec::new();
    for (tag, node) in tags {
        if let Some(html) = tag.render(node)? {
            rendered.push(html);
        }
    }
    Ok(rendered.join("\n"))
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}
