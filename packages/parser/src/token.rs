use crate::error::TokenParseError;
use crate::grammar;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Attribute key carried by shorthand tokens (`core/echo="hi"`).
pub const VALUE_ATTRIBUTE: &str = "value";

/// A dynamic token parsed out of a document.
///
/// Tokens are immutable: the parser builds them, replacers only ever see a
/// shared reference. `namespace` and `name` are never empty.
///
/// Serializes as `{"namespace", "name", "attributes", "fallback"}`, with
/// `attributes` always a JSON object (an empty one serializes as `{}`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    namespace: String,
    name: String,
    attributes: Map<String, Value>,
    fallback: String,
}

impl Token {
    /// Build a token from a namespace and name, validated the same way a
    /// structured token's `"name"` field is.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Result<Self, TokenParseError> {
        let namespace = namespace.into();
        let name = name.into();
        let qualified = format!("{}/{}", namespace, name);

        match grammar::split_qualified_name(&qualified) {
            Some((ns, n)) if ns == namespace && n == name => Ok(Self::from_parts(namespace, name)),
            _ => Err(TokenParseError::invalid_name(qualified)),
        }
    }

    pub(crate) fn from_parts(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            attributes: Map::new(),
            fallback: String::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Map<String, Value>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set the single `value` attribute used by the shorthand syntax.
    pub fn with_value(mut self, value: Value) -> Self {
        self.attributes.insert(VALUE_ATTRIBUTE.to_string(), value);
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// The `value` attribute, if present.
    pub fn value(&self) -> Option<&Value> {
        self.attributes.get(VALUE_ATTRIBUTE)
    }

    /// `namespace/name`, as written in the document.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.namespace, self.name)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}
