//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Docblock generation engine
#[derive(Parser, Debug)]
#[command(name = "docblock-engine")]
#[command(about = "Generates column-aligned docblock snippets from a symbol description")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON generation request (language, anchor, symbols,
    /// optional source text and settings overrides)
    #[arg(value_name = "REQUEST")]
    pub request: PathBuf,

    /// Override the request's language identifier
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Use the compact tag layout regardless of the request settings
    #[arg(long)]
    pub compact: bool,

    /// Show verbose output about symbol selection
    #[arg(short, long)]
    pub verbose: bool,
}
