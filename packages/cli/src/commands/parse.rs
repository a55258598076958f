use super::read_document;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use std::path::PathBuf;
use tokenswap_parser::{Extraction, TokenSwapper};

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Input file
    pub input: PathBuf,

    /// Token URL prefix (overrides config)
    #[arg(short, long)]
    pub prefix: Option<String>,
}

/// Print the tokens found in a file and the file with placeholders, as JSON
pub fn parse(args: ParseArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let extraction = parse_file(&args, &config)?;

    println!("{}", serde_json::to_string_pretty(&extraction)?);
    Ok(())
}

fn parse_file(args: &ParseArgs, config: &Config) -> Result<Extraction> {
    if !args.input.is_file() {
        return Err(anyhow!("Input is not a file: {}", args.input.display()));
    }

    let swapper = TokenSwapper::new(config.url_prefix(args.prefix.as_deref()))?;
    let source = read_document(&args.input)?;
    Ok(swapper.extract(&source))
}
