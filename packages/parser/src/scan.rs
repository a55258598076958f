use crate::error::{SwapResult, TokenParseError};
use crate::grammar::try_parse_token_contents;
use crate::swap::TokenSwapper;
use crate::token::Token;
use serde::Serialize;

/// Byte range of a token occurrence in its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// One `#token{...}#` occurrence and what its body parsed to.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMatch {
    pub span: Span,
    pub contents: String,
    pub result: Result<Token, TokenParseError>,
}

impl TokenMatch {
    pub fn is_malformed(&self) -> bool {
        self.result.is_err()
    }

    pub fn token(&self) -> Option<&Token> {
        self.result.as_ref().ok()
    }
}

impl TokenSwapper {
    /// List every occurrence in `input` without replacing anything.
    pub fn scan(&self, input: &str) -> Vec<TokenMatch> {
        self.pattern()
            .captures_iter(input)
            .filter_map(|captures| {
                let full = captures.get(0)?;
                let contents = captures.name("contents")?.as_str();

                Some(TokenMatch {
                    span: Span::new(full.start(), full.end()),
                    contents: contents.to_string(),
                    result: try_parse_token_contents(contents),
                })
            })
            .collect()
    }
}

/// List every token occurrence following `url_prefix`, malformed ones included.
pub fn scan_tokens(url_prefix: &str, input: &str) -> SwapResult<Vec<TokenMatch>> {
    Ok(TokenSwapper::new(url_prefix)?.scan(input))
}
