use crate::providers::TokenProvider;
use serde_json::Value;
use tokenswap_parser::Token;

/// Renders the token's own `value` attribute: `core/echo="<b>"` becomes `<b>`
pub struct EchoProvider;

impl TokenProvider for EchoProvider {
    fn key(&self) -> &str {
        "core/echo"
    }

    fn description(&self) -> &str {
        "Render the token's value attribute as-is"
    }

    fn render(&self, token: &Token) -> Option<String> {
        match token.value()? {
            Value::Null => None,
            Value::String(value) => Some(value.clone()),
            other => Some(other.to_string()),
        }
    }
}
