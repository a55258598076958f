use super::{collect_inputs, read_document};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tokenswap_parser::{format_diagnostics, TokenSwapper};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Input file or directory to check
    pub input: PathBuf,

    /// Token URL prefix (overrides config)
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// List files without problems too
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn check(args: CheckArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let swapper = TokenSwapper::new(config.url_prefix(args.prefix.as_deref()))?;

    println!("🔍 {} Token check", "Starting".green().bold());
    println!("   Input: {}", args.input.display());
    println!();

    let files = collect_inputs(&args.input, &config)?;
    let mut total_tokens = 0;
    let mut total_malformed = 0;

    for file in &files {
        let report = check_file(file, &swapper)?;
        total_tokens += report.tokens;
        total_malformed += report.malformed;

        if report.malformed > 0 {
            eprint!("{}", report.diagnostics);
        } else if args.verbose {
            println!("{} {}", "✓".green(), file.display());
        }
    }

    println!();
    println!(
        "✨ {} Check complete!",
        if total_malformed > 0 {
            "Done".red().bold()
        } else {
            "Done".green().bold()
        }
    );
    println!("   Files checked: {}", files.len());
    println!("   Tokens found: {}", total_tokens);

    if total_malformed > 0 {
        println!("   {} {}", "Malformed:".red(), total_malformed);
        std::process::exit(1);
    }

    println!("   {} No malformed tokens!", "✓".green());
    Ok(())
}

struct FileReport {
    tokens: usize,
    malformed: usize,
    diagnostics: String,
}

fn check_file(path: &Path, swapper: &TokenSwapper) -> Result<FileReport> {
    let source = read_document(path)?;
    let matches = swapper.scan(&source);

    Ok(FileReport {
        tokens: matches.len(),
        malformed: matches.iter().filter(|m| m.is_malformed()).count(),
        diagnostics: format_diagnostics(&source, &path.display().to_string(), &matches),
    })
}
