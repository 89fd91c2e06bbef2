//! Breadcrumb trail assembly.
//!
//! A page's ancestor chain and its own name become one [`BreadcrumbTrail`],
//! which feeds both outputs from the same pass:
//! - the schema.org BreadcrumbList ([`BreadcrumbTrail::schema`])
//! - the visual trail ([`BreadcrumbTrail::links`])
//!
//! Both therefore agree on ordering and on the truncated current-page title.

mod error;
mod source;
mod trail;

pub use error::{BreadcrumbError, BreadcrumbResult};
pub use source::{Ancestor, BreadcrumbSource};
pub use trail::{
    assemble, truncate_title, BreadcrumbTrail, PageLocation, TrailLink, HOME_LABEL, SITE_ROOT,
    TITLE_LIMIT,
};
