pub mod check;
pub mod init;
pub mod parse;
pub mod providers;
pub mod swap;

pub use check::{check, CheckArgs};
pub use init::{init, InitArgs};
pub use parse::{parse, ParseArgs};
pub use providers::{list_providers, ProvidersArgs};
pub use swap::{swap, SwapArgs};

use crate::config::Config;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tokenswap_parser::decode_document;
use walkdir::WalkDir;

/// Read a document, which must be UTF-8
fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_document(&bytes)?.to_string())
}

/// Files under `dir` whose extension the config accepts, in a stable order
fn find_documents(dir: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && config.accepts(path) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// A single file, or every accepted file under a directory
fn collect_inputs(input: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        Ok(vec![input.to_path_buf()])
    } else if input.is_dir() {
        find_documents(input, config)
    } else {
        Err(anyhow::anyhow!(
            "Input path does not exist: {}",
            input.display()
        ))
    }
}
