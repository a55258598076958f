use js_sys::{Function, JSON};
use serde::Deserialize;
use serde_json::{Map, Value};
use tokenswap_parser::{
    extract_tokens, parse_token_contents, serialize_token, SwapError, Token, TokenParseError,
    TokenSwapper,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Replace every token in `input`, calling `replacer(token)` for each one.
///
/// `replacer` receives `{namespace, name, attributes, fallback}` and returns
/// the replacement, or `null`/`undefined` to render the token's fallback.
/// Anything it throws is rethrown to the caller.
#[wasm_bindgen(js_name = swapTokens)]
pub fn swap_tokens_js(url_prefix: JsValue, replacer: JsValue, input: JsValue) -> Result<String, JsValue> {
    let url_prefix = url_prefix
        .as_string()
        .ok_or_else(|| swap_error(SwapError::InvalidPrefix))?;
    let swapper = TokenSwapper::new(url_prefix).map_err(swap_error)?;

    let replacer: Function = replacer
        .dyn_into()
        .map_err(|_| swap_error(SwapError::InvalidReplacer))?;

    let input = input
        .as_string()
        .ok_or_else(|| swap_error(SwapError::invalid_document("expected a string")))?;

    swapper.try_swap(
        |token: &Token| {
            let output = replacer.call1(&JsValue::NULL, &token_to_js(token)?)?;
            if output.is_null() || output.is_undefined() {
                return Ok(None);
            }

            Ok(Some(match output.as_string() {
                Some(output) => output,
                None => String::from(js_sys::Object::from(output).to_string()),
            }))
        },
        &input,
    )
}

/// Parse a token body, returning the token object or `null`.
#[wasm_bindgen(js_name = parseTokenContents)]
pub fn parse_token_contents_js(contents: &str) -> Result<JsValue, JsValue> {
    match parse_token_contents(contents) {
        Some(token) => token_to_js(&token),
        None => Ok(JsValue::NULL),
    }
}

/// Return `{tokens, output}` with each token replaced by `{{TOKEN_n}}`.
#[wasm_bindgen(js_name = extractTokens)]
pub fn extract_tokens_js(url_prefix: &str, input: &str) -> Result<JsValue, JsValue> {
    let extraction = extract_tokens(url_prefix, input).map_err(swap_error)?;
    to_js(&extraction)
}

/// Embed a token object back into text as `<prefix>#token{...}#`.
#[wasm_bindgen(js_name = serializeToken)]
pub fn serialize_token_js(url_prefix: &str, token: JsValue) -> Result<String, JsValue> {
    let json = JSON::stringify(&token)?
        .as_string()
        .ok_or_else(|| js_error("TypeError", "Invalid token: expected an object"))?;
    let record: TokenRecord = serde_json::from_str(&json)
        .map_err(|e| js_error("TypeError", &format!("Invalid token: {}", e)))?;
    let token = record
        .into_token()
        .map_err(|e| js_error("TypeError", &e.to_string()))?;

    Ok(serialize_token(url_prefix, &token))
}

/// A token as JavaScript hands it to us
#[derive(Debug, Deserialize)]
struct TokenRecord {
    namespace: String,
    name: String,
    #[serde(default)]
    attributes: Map<String, Value>,
    #[serde(default)]
    fallback: String,
}

impl TokenRecord {
    fn into_token(self) -> Result<Token, TokenParseError> {
        Ok(Token::new(self.namespace, self.name)?
            .with_attributes(self.attributes)
            .with_fallback(self.fallback))
    }
}

fn error_name(err: &SwapError) -> &'static str {
    match err {
        SwapError::InvalidPrefix => "InvalidPrefix",
        SwapError::InvalidReplacer => "InvalidReplacer",
        SwapError::InvalidDocument { .. } => "InvalidDocument",
    }
}

fn swap_error(err: SwapError) -> JsValue {
    js_error(error_name(&err), &err.to_string())
}

fn js_error(name: &str, message: &str) -> JsValue {
    let error = js_sys::Error::new(message);
    error.set_name(name);
    error.into()
}

fn token_to_js(token: &Token) -> Result<JsValue, JsValue> {
    to_js(token)
}

// Round-trip through JSON so empty attributes arrive as `{}`
fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value)
        .map_err(|e| js_error("Error", &format!("Serialization error: {}", e)))?;
    JSON::parse(&json)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn replacer(body: &str) -> JsValue {
        Function::new_with_args("token", body).into()
    }

    #[wasm_bindgen_test]
    fn test_swap_with_js_replacer() {
        let output = swap_tokens_js(
            "p".into(),
            replacer("return token.name === 'identity' ? 'Alice' : null;"),
            r#"p#token{core/identity}# p#token{"name":"core/x","fallback":"fb"}#"#.into(),
        )
        .unwrap();
        assert_eq!(output, "Alice fb");
    }

    #[wasm_bindgen_test]
    fn test_empty_attributes_are_an_object() {
        let output = swap_tokens_js(
            "p".into(),
            replacer("return Array.isArray(token.attributes) ? 'array' : typeof token.attributes;"),
            "p#token{core/identity}#".into(),
        )
        .unwrap();
        assert_eq!(output, "object");
    }

    #[wasm_bindgen_test]
    fn test_preconditions() {
        let name = |err: JsValue| String::from(err.unchecked_into::<js_sys::Error>().name());

        let err = swap_tokens_js("".into(), replacer("return null;"), "x".into()).unwrap_err();
        assert_eq!(name(err), "InvalidPrefix");

        let err = swap_tokens_js("p".into(), JsValue::from_str("nope"), "x".into()).unwrap_err();
        assert_eq!(name(err), "InvalidReplacer");

        let err = swap_tokens_js("p".into(), replacer("return null;"), JsValue::from(3)).unwrap_err();
        assert_eq!(name(err), "InvalidDocument");
    }

    #[wasm_bindgen_test]
    fn test_replacer_errors_propagate() {
        let err = swap_tokens_js(
            "p".into(),
            replacer("throw new Error('lookup failed');"),
            "p#token{core/identity}#".into(),
        )
        .unwrap_err();
        let message = String::from(err.unchecked_into::<js_sys::Error>().message());
        assert_eq!(message, "lookup failed");
    }

    #[wasm_bindgen_test]
    fn test_serialize_undefined_is_type_error() {
        let err = serialize_token_js("p", JsValue::UNDEFINED).unwrap_err();
        let name = String::from(err.unchecked_into::<js_sys::Error>().name());
        assert_eq!(name, "TypeError");
    }

    #[wasm_bindgen_test]
    fn test_parse_malformed_is_null() {
        assert!(parse_token_contents_js("not a token").unwrap().is_null());
    }
}
