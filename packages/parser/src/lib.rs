//! Dynamic token grammar and document substitution.
//!
//! ```text
//! https://token.wordpress.org/#token{core/identity}#
//! https://token.wordpress.org/#token{core/echo="<test>"}#
//! https://token.wordpress.org/#token{"name":"query/published-date","attributes":{"format":"%A"}}#
//! ```

pub mod error;
pub mod extract;
pub mod grammar;
pub mod scan;
pub mod serializer;
pub mod swap;
pub mod token;

#[cfg(feature = "pretty-errors")]
pub mod diagnostics;

pub use error::{SwapError, SwapResult, TokenParseError};
pub use extract::{extract_tokens, Extraction};
pub use grammar::{parse_token_body, parse_token_contents, try_parse_token_contents};
pub use scan::{scan_tokens, Span, TokenMatch};
pub use serializer::{serialize_token, serialize_token_contents};
pub use swap::{decode_document, swap_token_bytes, swap_tokens, try_swap_tokens, TokenReplacer, TokenSwapper};
pub use token::Token;

#[cfg(feature = "pretty-errors")]
pub use diagnostics::format_diagnostics;
