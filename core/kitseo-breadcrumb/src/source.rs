//! Breadcrumb input, validated from the CMS component payload.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::BreadcrumbResult;

/// A parent page in the chain from the site root down to the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ancestor {
    pub name: String,
    pub title: Option<String>,
    pub navigation_title: Option<String>,
    pub url: Option<String>,
}

impl Ancestor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_navigation_title(mut self, title: impl Into<String>) -> Self {
        self.navigation_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Navigation title if set, else title, else empty.
    pub fn display_title(&self) -> &str {
        [&self.navigation_title, &self.title]
            .into_iter()
            .filter_map(|t| t.as_deref())
            .find(|t| !t.is_empty())
            .unwrap_or("")
    }

    /// Link target, empty when the page has none.
    pub fn href(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}

/// Everything needed to assemble a trail for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreadcrumbSource {
    /// `None` when the CMS supplied no chain at all. An empty list is a chain
    /// with no parents and still yields a current-page step.
    pub ancestors: Option<Vec<Ancestor>>,
    /// Name of the current page.
    pub name: String,
}

impl BreadcrumbSource {
    pub fn new(ancestors: Option<Vec<Ancestor>>, name: impl Into<String>) -> Self {
        Self {
            ancestors,
            name: name.into(),
        }
    }

    /// Reads the breadcrumb component payload
    /// (`fields.data.datasource.{ancestors, name}`).
    ///
    /// Returns `Ok(None)` when the payload has no `fields`, i.e. the component
    /// has no data and renders its fallback. Wrongly-typed fields are
    /// rejected.
    pub fn from_component_props(props: &Value) -> BreadcrumbResult<Option<Self>> {
        let payload = ComponentPayload::deserialize(props).map_err(|e| {
            warn!("Rejected breadcrumb payload: {}", e);
            e
        })?;

        let Some(fields) = payload.fields else {
            debug!("Breadcrumb component has no fields");
            return Ok(None);
        };

        let datasource = fields
            .data
            .and_then(|data| data.datasource)
            .unwrap_or_default();

        let ancestors = datasource
            .ancestors
            .map(|chain| chain.into_iter().map(Ancestor::from).collect());

        Ok(Some(Self {
            ancestors,
            name: datasource.name.unwrap_or_default(),
        }))
    }
}

// Wire shape of the CMS component payload.

#[derive(Deserialize)]
struct ComponentPayload {
    fields: Option<Fields>,
}

#[derive(Deserialize)]
struct Fields {
    data: Option<Data>,
}

#[derive(Deserialize)]
struct Data {
    datasource: Option<Datasource>,
}

#[derive(Deserialize, Default)]
struct Datasource {
    ancestors: Option<Vec<RawAncestor>>,
    name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAncestor {
    #[serde(default)]
    name: String,
    title: Option<TextField>,
    navigation_title: Option<TextField>,
    url: Option<LinkField>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextField {
    json_value: Option<TextValue>,
}

#[derive(Deserialize)]
struct TextValue {
    value: Option<String>,
}

#[derive(Deserialize)]
struct LinkField {
    href: Option<String>,
}

impl TextField {
    fn into_text(self) -> Option<String> {
        self.json_value.and_then(|v| v.value)
    }
}

impl From<RawAncestor> for Ancestor {
    fn from(raw: RawAncestor) -> Self {
        Self {
            name: raw.name,
            title: raw.title.and_then(TextField::into_text),
            navigation_title: raw.navigation_title.and_then(TextField::into_text),
            url: raw.url.and_then(|link| link.href),
        }
    }
}
