//! End-to-end behaviour of parsing and swapping tokens in documents
//!
//! Validates:
//! - Both body syntaxes parse to the same token record
//! - Declined tokens render their fallback
//! - Every occurrence is replaced, once, left to right
//! - The URL prefix is matched literally
//! - Empty attributes serialize as an object

use serde_json::json;
use tokenswap_parser::{parse_token_contents, swap_tokens, Token};

const PREFIX: &str = "https://token.wordpress.org/";

fn record(token: &Token) -> serde_json::Value {
    serde_json::to_value(token).unwrap()
}

#[test]
fn test_shorthand_without_value() {
    let token = parse_token_contents("core/identity").unwrap();
    assert_eq!(
        record(&token),
        json!({ "namespace": "core", "name": "identity", "attributes": {}, "fallback": "" })
    );
}

#[test]
fn test_shorthand_with_scalar_value() {
    let token = parse_token_contents("core/echo=\"<\"").unwrap();
    assert_eq!(
        record(&token),
        json!({ "namespace": "core", "name": "echo", "attributes": { "value": "<" }, "fallback": "" })
    );

    let token = parse_token_contents(r#"core/echo="<""#).unwrap();
    assert_eq!(token.value(), Some(&json!("<")));
}

#[test]
fn test_structured_syntax_full_fields() {
    let token = parse_token_contents(
        "{\"name\":\"my_plugin/widget\",\"attributes\":{\"name\":\"sprocket\"},\"fallback\":\"just a sprocket\"}",
    )
    .unwrap();

    assert_eq!(
        record(&token),
        json!({
            "namespace": "my_plugin",
            "name": "widget",
            "attributes": { "name": "sprocket" },
            "fallback": "just a sprocket",
        })
    );
}

#[test]
fn test_malformed_bodies_are_left_verbatim() {
    for body in [
        r#""name":"core/identity""#.trim_end_matches('"'),
        r#""attributes":{"a":1}"#,
        r#""name":"not-namespaced""#,
        "just words",
    ] {
        assert!(parse_token_contents(body).is_none(), "{:?} should not parse", body);

        let input = format!("before {}#token{{{}}}# after", PREFIX, body);
        let output = swap_tokens(PREFIX, |_: &Token| Some("X".to_string()), &input).unwrap();
        assert_eq!(output, input);
    }
}

#[test]
fn test_substitution_with_and_without_opinion() {
    let input = "prefix#token{core/identity}#";

    let output = swap_tokens(
        "prefix",
        |token: &Token| match (token.namespace(), token.name()) {
            ("core", "identity") => Some("Alice".to_string()),
            _ => None,
        },
        input,
    )
    .unwrap();
    assert_eq!(output, "Alice");

    let output = swap_tokens("prefix", |_: &Token| None, input).unwrap();
    assert_eq!(output, "");

    let output = swap_tokens(
        "prefix",
        |_: &Token| None,
        r#"prefix#token{"name":"core/identity","fallback":"Anonymous"}#"#,
    )
    .unwrap();
    assert_eq!(output, "Anonymous");
}

#[test]
fn test_all_occurrences_are_replaced_in_order() {
    let input = format!(
        "<a href=\"{0}#token{{core/home-url}}#\">{0}#token{{core/echo=\"one\"}}#</a>{0}#token{{core/echo=\"two\"}}#",
        PREFIX
    );

    let mut seen = Vec::new();
    let output = swap_tokens(
        PREFIX,
        |token: &Token| {
            seen.push(token.qualified_name());
            match token.value() {
                Some(value) => value.as_str().map(str::to_string),
                None => Some("/home".to_string()),
            }
        },
        &input,
    )
    .unwrap();

    assert_eq!(output, "<a href=\"/home\">one</a>two");
    assert_eq!(seen, vec!["core/home-url", "core/echo", "core/echo"]);
}

#[test]
fn test_replacement_text_is_not_rescanned() {
    let input = format!("{}#token{{core/echo}}#", PREFIX);
    let nested = format!("{}#token{{core/identity}}#", PREFIX);

    let mut calls = 0;
    let output = swap_tokens(
        PREFIX,
        |_: &Token| {
            calls += 1;
            Some(nested.clone())
        },
        &input,
    )
    .unwrap();

    assert_eq!(output, nested);
    assert_eq!(calls, 1);
}

#[test]
fn test_prefix_is_literal() {
    let prefix = "http://a.b/(x)*+?[y]|^$\\";
    let input = format!(
        "{0}#token{{core/one}}# http://aXb/(x)*+?[y]|^$\\#token{{core/two}}# {0}#token{{core/three}}#",
        prefix
    );

    let output = swap_tokens(prefix, |token: &Token| Some(token.name().to_uppercase()), &input).unwrap();

    assert_eq!(
        output,
        "ONE http://aXb/(x)*+?[y]|^$\\#token{core/two}# THREE"
    );
}

#[test]
fn test_empty_attributes_serialize_as_object() {
    let token = parse_token_contents(r#""name":"core/identity","attributes":{}"#).unwrap();
    let encoded = serde_json::to_string(&token).unwrap();
    assert!(encoded.contains(r#""attributes":{}"#));
    assert!(!encoded.contains(r#""attributes":[]"#));

    let decoded: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert!(decoded["attributes"].is_object());
}
