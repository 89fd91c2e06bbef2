//! Per-kit site configuration and the site-wide schemas derived from it.

use kitseo_types::{non_empty, SchemaNode};
use serde::{Deserialize, Serialize};

use crate::site::{
    organization, webpage, website, OrganizationProps, SiteRef, WebPageProps, WebSiteProps,
};

/// Page language assumed when the profile carries no locale.
pub const DEFAULT_LOCALE: &str = "en";

/// Base url used when neither a request host nor a site url is known.
pub const FALLBACK_BASE_URL: &str = "http://localhost:3000";

/// Site-wide defaults for one starter kit.
///
/// Each kit injects its own profile instead of hard-coding names and urls
/// into every schema call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteProfile {
    pub name: String,
    /// Absolute site root without a trailing slash, e.g. `https://example.com`.
    pub url: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub locale: Option<String>,
    /// Search page path, e.g. `/search`. Enables the WebSite SearchAction.
    pub search_path: Option<String>,
}

impl SiteProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_search_path(mut self, path: impl Into<String>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    fn site_url(&self) -> Option<&str> {
        non_empty(self.url.as_deref()).map(|url| url.trim_end_matches('/'))
    }

    /// Organization schema; `url` and `logo` only when configured.
    pub fn organization(&self) -> SchemaNode {
        organization(&OrganizationProps {
            name: self.name.clone(),
            url: self.site_url().map(str::to_string),
            logo: self.logo.clone(),
            description: self.description.clone(),
            ..OrganizationProps::default()
        })
    }

    /// WebSite schema, or `None` when the site has no url.
    pub fn website(&self) -> Option<SchemaNode> {
        let url = self.site_url()?;
        let search_url_template = non_empty(self.search_path.as_deref())
            .map(|path| format!("{url}{}?q={{search_term_string}}", leading_slash(path)));
        Some(website(&WebSiteProps {
            name: self.name.clone(),
            url: url.to_string(),
            description: self.description.clone(),
            search_url_template,
        }))
    }

    /// The schemas injected once per page: Organization, then WebSite.
    pub fn site_schemas(&self) -> Vec<SchemaNode> {
        std::iter::once(self.organization())
            .chain(self.website())
            .collect()
    }

    /// WebPage schema for a page of this site.
    pub fn webpage(&self, name: &str, path: &str, description: Option<&str>) -> SchemaNode {
        let is_part_of = self.site_url().map(|url| SiteRef {
            name: self.name.clone(),
            url: url.to_string(),
        });
        webpage(&WebPageProps {
            name: name.to_string(),
            url: Some(self.full_url(path, None, true)),
            description: description.map(str::to_string),
            in_language: Some(
                non_empty(self.locale.as_deref())
                    .unwrap_or(DEFAULT_LOCALE)
                    .to_string(),
            ),
            is_part_of,
        })
    }

    /// Origin for absolute urls.
    ///
    /// A request host wins (`https` unless `secure` is false, as on a local
    /// dev server), then the configured site url, then [`FALLBACK_BASE_URL`].
    pub fn base_url(&self, host: Option<&str>, secure: bool) -> String {
        if let Some(host) = non_empty(host) {
            let scheme = if secure { "https" } else { "http" };
            return format!("{scheme}://{host}");
        }
        self.site_url().unwrap_or(FALLBACK_BASE_URL).to_string()
    }

    /// Absolute url for a site path; the path always gains a leading `/`.
    pub fn full_url(&self, path: &str, host: Option<&str>, secure: bool) -> String {
        format!("{}{}", self.base_url(host, secure), leading_slash(path))
    }
}

fn leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
