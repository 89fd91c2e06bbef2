use kitseo_types::SchemaNode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::JsonLdResult;

/// Output layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Format {
    /// Multi-line, two-space indentation.
    #[default]
    Pretty,
    /// Single line, no insignificant whitespace.
    Compact,
}

/// Renders a node as script-safe JSON text.
///
/// Returns `Ok(None)` for an absent or empty node; callers skip embedding.
pub fn to_json_ld(node: Option<&SchemaNode>, format: Format) -> JsonLdResult<Option<String>> {
    let Some(node) = node.filter(|node| !node.is_empty()) else {
        debug!("No schema to render");
        return Ok(None);
    };

    let json = match format {
        Format::Pretty => serde_json::to_string_pretty(node)?,
        Format::Compact => serde_json::to_string(node)?,
    };
    Ok(Some(escape_for_script(&json)))
}

/// Parses JSON-LD text (escaped or not) back into a node.
pub fn from_json_ld(text: &str) -> JsonLdResult<SchemaNode> {
    let value: Value = serde_json::from_str(text)?;
    Ok(SchemaNode::from_value(value)?)
}

/// Replaces HTML-significant characters in serialized JSON with `\uXXXX`.
///
/// Serialized JSON only contains these characters inside string literals, so
/// the substitution changes no value. U+2028/U+2029 are escaped as well since
/// some script parsers treat them as line terminators.
pub fn escape_for_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_for_script;

    #[test]
    fn escapes_closing_tag() {
        assert_eq!(
            escape_for_script(r#"{"a":"</script>"}"#),
            r#"{"a":"\u003c/script\u003e"}"#
        );
    }

    #[test]
    fn leaves_plain_text_alone() {
        let json = r#"{"name":"Acme"}"#;
        assert_eq!(escape_for_script(json), json);
    }
}
