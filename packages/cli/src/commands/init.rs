use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Token URL prefix to write into the config
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    write_config(&config_path, args.prefix)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("Next steps:");
    println!("  1. Add fixed values under \"values\", e.g. \"core/site-title\": \"My Site\"");
    println!("  2. Run: tokenswap check <file-or-dir>");
    println!("  3. Run: tokenswap swap <file> --out <file>");

    Ok(())
}

fn write_config(path: &Path, prefix: Option<String>) -> Result<Config> {
    let mut config = Config::default();
    if let Some(prefix) = prefix {
        config.url_prefix = prefix;
    }
    config
        .values
        .insert("core/site-title".to_string(), "My Site".to_string());

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(path, config_json)?;
    Ok(config)
}
