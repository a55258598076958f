mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    check, init, list_providers, parse, swap, CheckArgs, InitArgs, ParseArgs, ProvidersArgs,
    SwapArgs,
};

/// Tokenswap CLI - replace dynamic tokens embedded in documents
#[derive(Parser, Debug)]
#[command(name = "tokenswap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a tokenswap.config.json in the current directory
    Init(InitArgs),

    /// Replace tokens in a file or directory
    Swap(SwapArgs),

    /// Print the tokens found in a file as JSON
    Parse(ParseArgs),

    /// Report malformed tokens
    Check(CheckArgs),

    /// List the providers that can render tokens
    Providers(ProvidersArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Swap(args) => swap(args, &cwd),
        Command::Parse(args) => parse(args, &cwd),
        Command::Check(args) => check(args, &cwd),
        Command::Providers(args) => list_providers(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
