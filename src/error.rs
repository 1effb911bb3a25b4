//! Error types for docblock generation

use std::process::ExitCode;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, DocblockError>;

/// Errors produced while turning a symbol description into a docblock
///
/// None of these are fatal to the end-to-end entry point: the generator
/// catches every variant and substitutes the empty block (see
/// [`crate::generate::Generator::generate`]). They surface directly only
/// through the CLI, where `exit_code` maps them to process status codes.
#[derive(Debug, Error)]
pub enum DocblockError {
    /// The symbol provider returned nothing usable at or after the anchor
    #[error("no documentable symbol at or after line {line}")]
    NoSymbol { line: u32 },

    /// The symbol's kind is outside every classification whitelist
    #[error("unrecognized construct kind: {kind}")]
    UnrecognizedConstruct { kind: String },

    /// The requested language id has no profile
    #[error("unsupported language: {id}")]
    UnsupportedLanguage { id: String },

    /// The generation request file could not be parsed
    #[error("invalid generation request: {message}")]
    InvalidRequest { message: String },

    /// The generation request file does not exist
    #[error("request file not found: {path}")]
    FileNotFound { path: String },

    /// Underlying I/O failure while reading the request
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocblockError {
    /// Map the error to a process exit code for the CLI
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::NoSymbol { .. } => ExitCode::from(2),
            Self::UnrecognizedConstruct { .. } => ExitCode::from(3),
            Self::UnsupportedLanguage { .. } => ExitCode::from(4),
            Self::InvalidRequest { .. } => ExitCode::from(5),
            Self::FileNotFound { .. } => ExitCode::from(6),
            Self::Io(_) => ExitCode::from(7),
        }
    }
}
