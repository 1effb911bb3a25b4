//! Docblock-engine CLI entry point

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use docblock_engine::{
    Cli, DocblockError, GenerationRequest, Generator, Lang, SourceText, TagLayout,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> docblock_engine::Result<String> {
    let cli = Cli::parse();

    if !cli.request.exists() {
        return Err(DocblockError::FileNotFound {
            path: cli.request.display().to_string(),
        });
    }

    let raw = fs::read_to_string(&cli.request)?;
    let mut request: GenerationRequest =
        serde_json::from_str(&raw).map_err(|e| DocblockError::InvalidRequest {
            message: e.to_string(),
        })?;

    let lang = Lang::from_id(cli.lang.as_deref().unwrap_or(&request.language))?;

    if cli.verbose {
        eprintln!(
            "Language: {} ({} symbols, anchor line {})",
            lang.name(),
            request.symbols.len(),
            request.anchor.start.line
        );
    }

    let mut settings = request.settings.take().unwrap_or_default();
    if cli.compact {
        settings.tag_layout = TagLayout::Compact;
    }

    let text = SourceText::new(request.source.as_deref().unwrap_or(""));
    let generator = Generator::new(lang, settings);

    Ok(generator.generate(&request.symbols, &request.anchor, &text))
}
