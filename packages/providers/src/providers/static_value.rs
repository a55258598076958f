use crate::error::{ProviderError, ProviderResult};
use crate::providers::TokenProvider;
use tokenswap_parser::grammar::split_qualified_name;
use tokenswap_parser::Token;

/// Renders a fixed string for one `namespace/name`
#[derive(Debug, Clone)]
pub struct StaticProvider {
    key: String,
    value: String,
}

impl StaticProvider {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> ProviderResult<Self> {
        let key = key.into();
        if split_qualified_name(&key).is_none() {
            return Err(ProviderError::invalid_key(key));
        }

        Ok(Self {
            key,
            value: value.into(),
        })
    }

    /// Parse a `namespace/name=value` assignment
    pub fn from_assignment(assignment: &str) -> ProviderResult<Self> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| ProviderError::invalid_assignment(assignment))?;
        Self::new(key.trim(), value)
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TokenProvider for StaticProvider {
    fn key(&self) -> &str {
        &self.key
    }

    fn description(&self) -> &str {
        "Render a configured value"
    }

    fn render(&self, _token: &Token) -> Option<String> {
        Some(self.value.clone())
    }
}
