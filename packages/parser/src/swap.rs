//! Document scanning and substitution.
//!
//! Tokens are embedded in a host document as
//!
//! ```text
//! <url_prefix>#token{<BODY>}#
//! ```
//!
//! where `BODY` never contains `#`. Every occurrence is visited left to
//! right; parsed tokens are handed to a replacer, malformed ones are left
//! verbatim. Replacement text is never rescanned.

use crate::error::{SwapError, SwapResult};
use crate::grammar::parse_token_contents;
use crate::token::Token;
use regex::{Captures, Regex};
use std::convert::Infallible;
use tracing::debug;

/// Produces the replacement text for a token.
///
/// Returning `None` means "no opinion" and the token's fallback is used.
pub trait TokenReplacer {
    fn replace(&mut self, token: &Token) -> Option<String>;
}

impl<F> TokenReplacer for F
where
    F: FnMut(&Token) -> Option<String>,
{
    fn replace(&mut self, token: &Token) -> Option<String> {
        self(token)
    }
}

/// A matcher compiled for one URL prefix, reusable across documents.
#[derive(Debug, Clone)]
pub struct TokenSwapper {
    url_prefix: String,
    pattern: Regex,
}

impl TokenSwapper {
    pub fn new(url_prefix: impl Into<String>) -> SwapResult<Self> {
        let url_prefix = url_prefix.into();
        if url_prefix.is_empty() {
            return Err(SwapError::InvalidPrefix);
        }

        let source = format!(
            r"{}#token\{{(?P<contents>[^#]*)\}}#",
            regex::escape(&url_prefix)
        );
        let pattern = Regex::new(&source).map_err(|_| SwapError::InvalidPrefix)?;

        Ok(Self { url_prefix, pattern })
    }

    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    pub(crate) fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Replace every token in `input`.
    pub fn swap<R: TokenReplacer>(&self, mut replacer: R, input: &str) -> String {
        let result: Result<String, Infallible> =
            self.try_swap(|token: &Token| Ok(replacer.replace(token)), input);

        match result {
            Ok(output) => output,
            Err(never) => match never {},
        }
    }

    /// Replace every token in `input` with a fallible replacer.
    ///
    /// The first error stops the pass and is returned as-is.
    pub fn try_swap<F, E>(&self, mut replacer: F, input: &str) -> Result<String, E>
    where
        F: FnMut(&Token) -> Result<Option<String>, E>,
    {
        let mut output = String::with_capacity(input.len());
        let mut last = 0;

        for captures in self.pattern.captures_iter(input) {
            let Some(full) = captures.get(0) else {
                continue;
            };

            output.push_str(&input[last..full.start()]);
            last = full.end();

            match parse_captured(&captures) {
                Some(token) => match replacer(&token)? {
                    Some(replacement) => {
                        debug!(token = %token, "Replacing token");
                        output.push_str(&replacement);
                    }
                    None => {
                        debug!(token = %token, fallback = %token.fallback(), "Using token fallback");
                        output.push_str(token.fallback());
                    }
                },
                None => {
                    debug!(span = ?full.range(), "Skipping malformed token");
                    output.push_str(full.as_str());
                }
            }
        }

        output.push_str(&input[last..]);
        Ok(output)
    }

    /// Replace every token in a byte document, which must be UTF-8.
    pub fn swap_bytes<R: TokenReplacer>(&self, replacer: R, input: &[u8]) -> SwapResult<String> {
        Ok(self.swap(replacer, decode_document(input)?))
    }
}

/// View a byte document as text; tokens can only be found in UTF-8.
pub fn decode_document(input: &[u8]) -> SwapResult<&str> {
    std::str::from_utf8(input).map_err(|err| {
        SwapError::invalid_document(format!(
            "not valid UTF-8 after byte {}",
            err.valid_up_to()
        ))
    })
}

fn parse_captured(captures: &Captures<'_>) -> Option<Token> {
    parse_token_contents(captures.name("contents")?.as_str())
}

/// Replace every token in `input` that follows `url_prefix`.
///
/// Tokens the replacer declines render their fallback. Malformed tokens are
/// left as they were.
pub fn swap_tokens<R: TokenReplacer>(url_prefix: &str, replacer: R, input: &str) -> SwapResult<String> {
    Ok(TokenSwapper::new(url_prefix)?.swap(replacer, input))
}

/// [`swap_tokens`] with a replacer that can fail; its error propagates.
pub fn try_swap_tokens<F, E>(url_prefix: &str, replacer: F, input: &str) -> Result<String, E>
where
    F: FnMut(&Token) -> Result<Option<String>, E>,
    E: From<SwapError>,
{
    TokenSwapper::new(url_prefix)?.try_swap(replacer, input)
}

/// [`swap_tokens`] over raw bytes.
pub fn swap_token_bytes<R: TokenReplacer>(
    url_prefix: &str,
    replacer: R,
    input: &[u8],
) -> SwapResult<String> {
    TokenSwapper::new(url_prefix)?.swap_bytes(replacer, input)
}
