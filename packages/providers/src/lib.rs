mod error;
mod providers;
mod resolve;

pub use error::{ProviderError, ProviderResult};
pub use providers::{EchoProvider, ProviderRegistry, StaticProvider, TokenProvider};
pub use resolve::{resolve_document, resolve_tokens, Resolution, ResolveOptions, ResolveStats};
