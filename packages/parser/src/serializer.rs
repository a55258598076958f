use crate::grammar::is_shorthand_name;
use crate::token::Token;
use serde_json::{Map, Value};

/// Serialize a token back into its embedded form, `<prefix>#token{...}#`.
///
/// The shorthand syntax is used whenever it can express the token exactly;
/// everything else goes through the structured syntax.
pub fn serialize_token(url_prefix: &str, token: &Token) -> String {
    format!("{}#token{{{}}}#", url_prefix, serialize_token_contents(token))
}

/// Serialize only the token body (the part between `#token{` and `}#`).
pub fn serialize_token_contents(token: &Token) -> String {
    if let Some(shorthand) = shorthand(token) {
        return shorthand;
    }

    let mut data = Map::new();
    data.insert("name".to_string(), Value::String(token.qualified_name()));
    data.insert(
        "attributes".to_string(),
        Value::Object(token.attributes().clone()),
    );
    if !token.fallback().is_empty() {
        data.insert(
            "fallback".to_string(),
            Value::String(token.fallback().to_string()),
        );
    }

    let object = escape_hash(&Value::Object(data).to_string());
    // Outer braces are implied by the structured syntax
    object[1..object.len() - 1].to_string()
}

fn shorthand(token: &Token) -> Option<String> {
    if !token.fallback().is_empty() || !is_shorthand_name(token.namespace(), token.name()) {
        return None;
    }

    let attributes = token.attributes();
    if attributes.is_empty() {
        return Some(token.qualified_name());
    }

    match token.value() {
        Some(value) if attributes.len() == 1 && !value.is_null() => Some(format!(
            "{}={}",
            token.qualified_name(),
            escape_hash(&value.to_string())
        )),
        _ => None,
    }
}

/// A `#` would end the token early; JSON lets us spell it `\u0023`.
fn escape_hash(json: &str) -> String {
    json.replace('#', "\\u0023")
}
