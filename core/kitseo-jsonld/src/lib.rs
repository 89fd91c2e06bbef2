//! JSON-LD rendering.
//!
//! Turns a [`SchemaNode`](kitseo_types::SchemaNode) into text that can be
//! placed verbatim inside `<script type="application/ld+json">`:
//! - [`to_json_ld`] renders pretty or compact JSON, or nothing for an absent
//!   or empty node
//! - [`ScriptTag`] wraps that text in the script element
//!
//! Output never contains `<`, `>` or `&` literally, so no `</script>` or
//! `<!--` sequence can close the element early. The escapes are plain JSON
//! `\uXXXX` sequences; parsing the output yields the original node.

mod error;
mod script;
mod serialize;

pub use error::{JsonLdError, JsonLdResult};
pub use script::{render_all, LoadStrategy, ScriptTag, JSON_LD_MIME};
pub use serialize::{escape_for_script, from_json_ld, to_json_ld, Format};
