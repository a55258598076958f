use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tokenswap_providers::ProviderRegistry;

#[derive(Debug, Args)]
pub struct ProvidersArgs {
    /// Extra fixed value to include, e.g. --set core/site-title="My Site"
    #[arg(short, long, value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}

pub fn list_providers(args: ProvidersArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let registry = config.registry(&args.set)?;

    println!("📦 {} token providers", registry.providers().len().to_string().bold());
    for (key, description) in describe(&registry) {
        println!("   {}  {}", key.cyan(), description.dimmed());
    }

    Ok(())
}

/// `(key, description)` for each registered provider, sorted by key
fn describe(registry: &ProviderRegistry) -> Vec<(String, String)> {
    let mut rows: Vec<_> = registry
        .providers()
        .iter()
        .map(|provider| (provider.key().to_string(), provider.description().to_string()))
        .collect();
    rows.sort();
    rows
}
