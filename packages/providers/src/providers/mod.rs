mod echo;
mod static_value;

pub use echo::EchoProvider;
pub use static_value::StaticProvider;

use tokenswap_parser::{Token, TokenReplacer};

/// Trait for implementing token providers
pub trait TokenProvider {
    /// The `namespace/name` this provider renders, matched case-insensitively
    fn key(&self) -> &str;

    /// Human-readable description
    fn description(&self) -> &str;

    /// Render a token, or `None` to let its fallback through
    fn render(&self, token: &Token) -> Option<String>;
}

/// Registry of token providers, keyed by `namespace/name`
pub struct ProviderRegistry {
    providers: Vec<Box<dyn TokenProvider>>,
}

impl ProviderRegistry {
    /// Create a new registry with all built-in providers
    pub fn new() -> Self {
        Self {
            providers: vec![Box::new(EchoProvider)],
        }
    }

    /// Get all registered providers
    pub fn providers(&self) -> &[Box<dyn TokenProvider>] {
        &self.providers
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a provider, replacing any already registered under the same key
    pub fn add_provider(&mut self, provider: Box<dyn TokenProvider>) {
        self.providers
            .retain(|existing| !existing.key().eq_ignore_ascii_case(provider.key()));
        self.providers.push(provider);
    }

    /// Find the provider registered for a token
    pub fn find(&self, token: &Token) -> Option<&dyn TokenProvider> {
        let key = token.qualified_name();
        self.providers
            .iter()
            .find(|provider| provider.key().eq_ignore_ascii_case(&key))
            .map(|provider| provider.as_ref())
    }

    /// Render a token with its provider; `None` if unregistered or declined
    pub fn resolve(&self, token: &Token) -> Option<String> {
        self.find(token)?.render(token)
    }

    /// Borrow the registry as a replacer for a swap pass
    pub fn replacer(&self) -> impl TokenReplacer + '_ {
        move |token: &Token| self.resolve(token)
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &format!("{} providers", self.providers.len()))
            .finish()
    }
}
