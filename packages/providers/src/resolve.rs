use crate::providers::ProviderRegistry;
use serde::Serialize;
use tokenswap_parser::{SwapResult, Token, TokenSwapper};
use tracing::debug;

/// Options for resolving a document
#[derive(Debug, Default)]
pub struct ResolveOptions {
    /// Custom provider registry (uses built-ins if None)
    pub registry: Option<ProviderRegistry>,
}

/// What happened to the tokens of one document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolveStats {
    /// Tokens rendered by a provider
    pub resolved: usize,

    /// Tokens with no provider, or whose provider declined
    pub fallbacks: usize,

    /// Occurrences left untouched because they did not parse
    pub malformed: usize,
}

impl ResolveStats {
    pub fn total(&self) -> usize {
        self.resolved + self.fallbacks + self.malformed
    }
}

impl std::ops::AddAssign for ResolveStats {
    fn add_assign(&mut self, other: Self) {
        self.resolved += other.resolved;
        self.fallbacks += other.fallbacks;
        self.malformed += other.malformed;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub output: String,
    pub stats: ResolveStats,
}

/// Swap every token in a document through a provider registry
pub fn resolve_document(swapper: &TokenSwapper, input: &str, options: ResolveOptions) -> Resolution {
    let registry = options.registry.unwrap_or_default();
    let mut stats = ResolveStats {
        malformed: swapper.scan(input).iter().filter(|m| m.is_malformed()).count(),
        ..ResolveStats::default()
    };

    let output = swapper.swap(
        |token: &Token| {
            let rendered = registry.resolve(token);
            match rendered {
                Some(_) => stats.resolved += 1,
                None => {
                    debug!(token = %token, "No provider rendered token");
                    stats.fallbacks += 1;
                }
            }
            rendered
        },
        input,
    );

    Resolution { output, stats }
}

/// [`resolve_document`] for a one-off prefix
pub fn resolve_tokens(url_prefix: &str, input: &str, options: ResolveOptions) -> SwapResult<Resolution> {
    let swapper = TokenSwapper::new(url_prefix)?;
    Ok(resolve_document(&swapper, input, options))
}
