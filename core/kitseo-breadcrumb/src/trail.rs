use kitseo_schema::breadcrumb_list;
use kitseo_types::{BreadcrumbEntry, SchemaNode};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::{BreadcrumbError, BreadcrumbResult, BreadcrumbSource};

/// Titles longer than this many characters are truncated.
pub const TITLE_LIMIT: usize = 25;

/// Characters kept from a truncated title, before the ellipsis.
const TRUNCATED_LEN: usize = 24;

const ELLIPSIS: &str = "...";

/// Label of the synthetic step used when a page has no ancestor chain.
pub const HOME_LABEL: &str = "Home";

/// Site root, linked from the synthetic Home step.
pub const SITE_ROOT: &str = "/";

/// Absolute location of the page being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    pub fn parse(href: &str) -> BreadcrumbResult<Self> {
        let url = Url::parse(href).map_err(|source| BreadcrumbError::InvalidLocation {
            href: href.to_string(),
            source,
        })?;
        Ok(Self { url })
    }

    /// Full url of the page.
    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    /// `scheme://host[:port]` of the page.
    pub fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }
}

/// One visible step of the trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrailLink {
    pub label: String,
    /// Link target; `None` for the current page, which is not a link.
    pub href: Option<String>,
}

impl TrailLink {
    pub fn is_current(&self) -> bool {
        self.href.is_none()
    }
}

/// Schema entries and visible links for one page, built in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbTrail {
    entries: Vec<BreadcrumbEntry>,
    links: Vec<TrailLink>,
}

impl BreadcrumbTrail {
    pub fn entries(&self) -> &[BreadcrumbEntry] {
        &self.entries
    }

    pub fn links(&self) -> &[TrailLink] {
        &self.links
    }

    /// BreadcrumbList for the trail.
    pub fn schema(&self) -> Option<SchemaNode> {
        breadcrumb_list(&self.entries)
    }
}

/// Shortens a title longer than [`TITLE_LIMIT`] characters to its first 24
/// characters, trimmed, followed by `...`.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() <= TITLE_LIMIT {
        return title.to_string();
    }
    let head: String = title.chars().take(TRUNCATED_LEN).collect();
    format!("{}{ELLIPSIS}", head.trim())
}

/// Builds the trail for a page.
///
/// With an ancestor chain: one step per ancestor in chain order, then the
/// current page, whose url is the active location when known. Without one: a
/// single Home step pointing at the site root.
pub fn assemble(source: &BreadcrumbSource, location: Option<&PageLocation>) -> BreadcrumbTrail {
    let Some(ancestors) = source.ancestors.as_deref() else {
        debug!("No ancestor chain, using Home step");
        let url = location.map_or_else(|| SITE_ROOT.to_string(), PageLocation::origin);
        return BreadcrumbTrail {
            entries: vec![BreadcrumbEntry::new(HOME_LABEL, url, 1)],
            links: vec![TrailLink {
                label: HOME_LABEL.to_string(),
                href: Some(SITE_ROOT.to_string()),
            }],
        };
    };

    let current = truncate_title(&source.name);
    let current_url = location.map(PageLocation::href).unwrap_or("");

    let entries = BreadcrumbEntry::numbered(
        ancestors
            .iter()
            .map(|a| (a.display_title(), a.href()))
            .chain(std::iter::once((current.as_str(), current_url))),
    );

    let links = ancestors
        .iter()
        .map(|a| TrailLink {
            label: a.display_title().to_string(),
            href: Some(a.href().to_string()),
        })
        .chain(std::iter::once(TrailLink {
            label: current.clone(),
            href: None,
        }))
        .collect();

    BreadcrumbTrail { entries, links }
}
