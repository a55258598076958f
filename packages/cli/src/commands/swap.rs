use super::{collect_inputs, read_document};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tokenswap_parser::TokenSwapper;
use tokenswap_providers::{resolve_document, Resolution, ResolveOptions, ResolveStats};
use tracing::info;

#[derive(Debug, Args)]
pub struct SwapArgs {
    /// Input file or directory
    pub input: PathBuf,

    /// Token URL prefix (overrides config)
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Fixed token value, e.g. --set core/site-title="My Site"
    #[arg(short, long, value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Output file for a single input (defaults to stdout)
    #[arg(short, long, conflicts_with = "out_dir")]
    pub out: Option<PathBuf>,

    /// Output directory, required when the input is a directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

pub fn swap(args: SwapArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let swapper = TokenSwapper::new(config.url_prefix(args.prefix.as_deref()))?;

    if args.input.is_dir() {
        let out_dir = args
            .out_dir
            .as_deref()
            .ok_or_else(|| anyhow!("--out-dir is required when swapping a directory"))?;

        let (files, stats) = swap_directory(&args.input, out_dir, &swapper, &config, &args.set)?;
        print_summary(files, stats);
        return Ok(());
    }

    let inputs = collect_inputs(&args.input, &config)?;
    let mut stats = ResolveStats::default();

    for input in &inputs {
        let resolution = swap_file(input, &swapper, &config, &args.set)?;
        stats += resolution.stats;

        match &args.out {
            Some(out) => fs::write(out, &resolution.output)?,
            None => print!("{}", resolution.output),
        }
    }

    print_summary(inputs.len(), stats);
    Ok(())
}

/// Swap one file through the configured providers
pub fn swap_file(
    path: &Path,
    swapper: &TokenSwapper,
    config: &Config,
    assignments: &[String],
) -> Result<Resolution> {
    let source = read_document(path)?;
    let options = ResolveOptions {
        registry: Some(config.registry(assignments)?),
    };

    let resolution = resolve_document(swapper, &source, options);
    info!(
        file = %path.display(),
        resolved = resolution.stats.resolved,
        fallbacks = resolution.stats.fallbacks,
        malformed = resolution.stats.malformed,
        "Swapped tokens"
    );

    Ok(resolution)
}

/// Swap every accepted file under `input`, mirroring the tree into `out_dir`
pub fn swap_directory(
    input: &Path,
    out_dir: &Path,
    swapper: &TokenSwapper,
    config: &Config,
    assignments: &[String],
) -> Result<(usize, ResolveStats)> {
    let files = collect_inputs(input, config)?;
    let mut stats = ResolveStats::default();

    for file in &files {
        let resolution = swap_file(file, swapper, config, assignments)?;
        stats += resolution.stats;

        let destination = out_dir.join(file.strip_prefix(input)?);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&destination, &resolution.output)?;
    }

    Ok((files.len(), stats))
}

// Output may be going to stdout, so the summary goes to stderr
fn print_summary(files: usize, stats: ResolveStats) {
    eprintln!();
    eprintln!("✨ {} Swapped {} file(s)", "Done".green().bold(), files);
    eprintln!("   Resolved:  {}", stats.resolved);
    eprintln!("   Fallbacks: {}", stats.fallbacks);

    if stats.malformed > 0 {
        eprintln!(
            "   {} {} (left unchanged, run `tokenswap check` for details)",
            "Malformed:".yellow(),
            stats.malformed
        );
    }
}
