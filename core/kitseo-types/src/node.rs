//! schema.org JSON-LD mapping.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{non_empty, Error, Result};

/// The `@context` carried by every top-level node.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

const CONTEXT_KEY: &str = "@context";
const TYPE_KEY: &str = "@type";

/// A schema.org object: string keys mapped to JSON values.
///
/// Top-level nodes carry `@context` and `@type`; nested sub-objects carry only
/// `@type`. Optional fields are added through the `with_*` helpers, which skip
/// absent and empty values so that omission (never `null`) marks a missing
/// field.
///
/// Key order is not part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaNode(Map<String, Value>);

impl SchemaNode {
    /// Creates a top-level node of the given schema.org type.
    #[must_use]
    pub fn new(schema_type: &str) -> Self {
        let mut map = Map::new();
        map.insert(CONTEXT_KEY.into(), Value::from(SCHEMA_CONTEXT));
        map.insert(TYPE_KEY.into(), Value::from(schema_type));
        Self(map)
    }

    /// Creates a nested sub-object (no `@context`).
    #[must_use]
    pub fn nested(schema_type: &str) -> Self {
        let mut map = Map::new();
        map.insert(TYPE_KEY.into(), Value::from(schema_type));
        Self(map)
    }

    /// Wraps an arbitrary JSON object, requiring an `@type` tag.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => {
                if !map.get(TYPE_KEY).is_some_and(Value::is_string) {
                    return Err(Error::MissingType);
                }
                Ok(Self(map))
            }
            other => Err(Error::NotAnObject(kind_of(&other))),
        }
    }

    /// The node's `@type`.
    pub fn schema_type(&self) -> Option<&str> {
        self.0.get(TYPE_KEY).and_then(Value::as_str)
    }

    /// Whether this is a top-level node (carries `@context`).
    pub fn is_top_level(&self) -> bool {
        self.0.contains_key(CONTEXT_KEY)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Extract a string value using a JSON pointer (e.g., "/author/name").
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.pointer(pointer).and_then(Value::as_str)
    }

    /// Resolve a JSON pointer against this node. Array steps are indices.
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        let mut segments = pointer.strip_prefix('/')?.split('/');
        let mut current = self.0.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Keys of this node, in map order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sets a field unconditionally.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Sets a required field.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a text field when it is present and non-empty.
    #[must_use]
    pub fn with_text(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(text) = non_empty(value) {
            self.set(key, text);
        }
        self
    }

    /// Sets a list of strings when at least one non-empty entry remains.
    #[must_use]
    pub fn with_list(mut self, key: &str, values: &[String]) -> Self {
        let items: Vec<Value> = values
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| Value::from(s.as_str()))
            .collect();
        if !items.is_empty() {
            self.set(key, Value::Array(items));
        }
        self
    }

    /// Sets a nested node when one was produced.
    #[must_use]
    pub fn with_node(mut self, key: &str, node: Option<SchemaNode>) -> Self {
        if let Some(node) = node {
            self.set(key, node);
        }
        self
    }

    /// Sets an ordered sequence of nested nodes.
    #[must_use]
    pub fn with_nodes(mut self, key: &str, nodes: Vec<SchemaNode>) -> Self {
        self.set(key, Value::Array(nodes.into_iter().map(Value::from).collect()));
        self
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<SchemaNode> for Value {
    fn from(node: SchemaNode) -> Self {
        node.into_value()
    }
}

impl TryFrom<Value> for SchemaNode {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
