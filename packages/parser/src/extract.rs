use crate::error::SwapResult;
use crate::swap::TokenSwapper;
use crate::token::Token;
use serde::Serialize;

/// Tokens pulled out of a document, with numbered placeholders left behind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    pub tokens: Vec<Token>,
    pub output: String,
}

/// Placeholder written in place of the `n`th (1-based) extracted token.
pub fn placeholder(n: usize) -> String {
    format!("{{{{TOKEN_{}}}}}", n)
}

impl TokenSwapper {
    /// Replace each parsed token with `{{TOKEN_n}}` and collect it.
    pub fn extract(&self, input: &str) -> Extraction {
        let mut tokens = Vec::new();
        let output = self.swap(
            |token: &Token| {
                tokens.push(token.clone());
                Some(placeholder(tokens.len()))
            },
            input,
        );

        Extraction { tokens, output }
    }
}

pub fn extract_tokens(url_prefix: &str, input: &str) -> SwapResult<Extraction> {
    Ok(TokenSwapper::new(url_prefix)?.extract(input))
}
