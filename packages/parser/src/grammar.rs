//! Token body grammar.
//!
//! A token body is the text between `#token{` and `}#`. Two surface syntaxes
//! are accepted, tried in order:
//!
//! 1. Shorthand: `namespace/name` or `namespace/name=<json>`
//!    e.g. `core/identity`, `core/echo="<test>"`
//! 2. Structured: the fields of a JSON object with its outer braces left off
//!    e.g. `"name":"query/published-date","attributes":{"format":"%A"}`
//!
//! A body matching neither is not a token and the caller leaves it alone.

use crate::error::TokenParseError;
use crate::token::Token;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static SHORTHAND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9-]*)/([A-Za-z0-9-]+)(?:=(.+))?$")
        .expect("shorthand token pattern is valid")
});

// Unlike shorthand, structured names may contain underscores (`my_plugin/widget`).
static QUALIFIED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9_-]*)/([A-Za-z0-9_-]+)$")
        .expect("qualified token name pattern is valid")
});

/// Parse a token body, returning `None` if it is malformed.
pub fn parse_token_contents(contents: &str) -> Option<Token> {
    try_parse_token_contents(contents).ok()
}

/// Alias of [`parse_token_contents`].
pub fn parse_token_body(body: &str) -> Option<Token> {
    parse_token_contents(body)
}

/// Parse a token body, reporting why it was rejected.
pub fn try_parse_token_contents(contents: &str) -> Result<Token, TokenParseError> {
    if let Some(token) = parse_shorthand(contents) {
        return Ok(token);
    }

    parse_structured(contents)
}

/// Split a structured `"name"` field into namespace and name.
pub fn split_qualified_name(qualified: &str) -> Option<(&str, &str)> {
    let captures = QUALIFIED_NAME.captures(qualified)?;
    let namespace = captures.get(1)?.as_str();
    let name = captures.get(2)?.as_str();
    Some((namespace, name))
}

/// Whether `namespace/name` can be written in shorthand form.
pub fn is_shorthand_name(namespace: &str, name: &str) -> bool {
    SHORTHAND
        .captures(&format!("{}/{}", namespace, name))
        .map(|c| c.get(3).is_none())
        .unwrap_or(false)
}

fn parse_shorthand(contents: &str) -> Option<Token> {
    let captures = SHORTHAND.captures(contents)?;
    let token = Token::from_parts(&captures[1], &captures[2]);

    // A value that doesn't decode, or decodes to null, counts as no value.
    let value = captures
        .get(3)
        .and_then(|raw| serde_json::from_str::<Value>(raw.as_str()).ok())
        .filter(|value| !value.is_null());

    Some(match value {
        Some(value) => token.with_value(value),
        None => token,
    })
}

fn parse_structured(contents: &str) -> Result<Token, TokenParseError> {
    let mut data = decode_object(contents)?;

    let qualified = match data.get("name") {
        Some(Value::String(name)) => name.clone(),
        _ => return Err(TokenParseError::MissingName),
    };

    let (namespace, name) = split_qualified_name(&qualified)
        .ok_or_else(|| TokenParseError::invalid_name(qualified.as_str()))?;

    let attributes = match data.remove("attributes") {
        Some(Value::Object(attributes)) => attributes,
        _ => Map::new(),
    };

    let fallback = match data.remove("fallback") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(fallback)) => fallback,
        Some(scalar @ (Value::Number(_) | Value::Bool(_))) => scalar.to_string(),
        Some(_) => return Err(TokenParseError::InvalidFallback),
    };

    Ok(Token::from_parts(namespace, name)
        .with_attributes(attributes)
        .with_fallback(fallback))
}

/// Decode `{contents}`; failing that, accept `contents` if it is already a
/// whole object (documents written as `#token{{"name":...}}#`).
fn decode_object(contents: &str) -> Result<Map<String, Value>, TokenParseError> {
    match serde_json::from_str::<Map<String, Value>>(&format!("{{{}}}", contents)) {
        Ok(data) => Ok(data),
        Err(err) => serde_json::from_str::<Map<String, Value>>(contents)
            .map_err(|_| TokenParseError::invalid_json(err.to_string())),
    }
}
