use tokenswap_parser::SwapError;
use tokenswap_providers::{
    resolve_tokens, ProviderRegistry, ResolveOptions, ResolveStats, StaticProvider,
};

const PREFIX: &str = "https://token.wordpress.org/";

fn registry() -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    registry.add_provider(Box::new(StaticProvider::new("core/site-title", "My Site").unwrap()));
    registry
}

#[test]
fn test_resolves_with_builtins_and_static_values() {
    let input = format!(
        r#"<title>{0}#token{{core/site-title}}#</title><p>{0}#token{{core/echo="hello"}}#</p>"#,
        PREFIX
    );

    let resolution = resolve_tokens(
        PREFIX,
        &input,
        ResolveOptions {
            registry: Some(registry()),
        },
    )
    .unwrap();

    assert_eq!(resolution.output, "<title>My Site</title><p>hello</p>");
    assert_eq!(
        resolution.stats,
        ResolveStats {
            resolved: 2,
            fallbacks: 0,
            malformed: 0,
        }
    );
}

#[test]
fn test_counts_fallbacks_and_malformed() {
    let input = format!(
        r#"{0}#token{{"name":"core/avatar","fallback":"(no avatar)"}}# {0}#token{{core/echo}}# {0}#token{{oops}}#"#,
        PREFIX
    );

    let resolution = resolve_tokens(PREFIX, &input, ResolveOptions::default()).unwrap();

    assert_eq!(
        resolution.output,
        format!("(no avatar)  {}#token{{oops}}#", PREFIX)
    );
    assert_eq!(resolution.stats.fallbacks, 2);
    assert_eq!(resolution.stats.malformed, 1);
    assert_eq!(resolution.stats.total(), 3);
}

#[test]
fn test_unregistered_tokens_fall_back_with_empty_registry() {
    let resolution = resolve_tokens(
        "p",
        r#"p#token{core/echo="x"}#"#,
        ResolveOptions {
            registry: Some(ProviderRegistry::empty()),
        },
    )
    .unwrap();

    assert_eq!(resolution.output, "");
    assert_eq!(resolution.stats.fallbacks, 1);
}

#[test]
fn test_empty_prefix_is_rejected() {
    assert_eq!(
        resolve_tokens("", "anything", ResolveOptions::default()),
        Err(SwapError::InvalidPrefix)
    );
}
