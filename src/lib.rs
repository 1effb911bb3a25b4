//! Docblock generation engine
//!
//! Turns a structural description of a piece of source code (its kind, name,
//! source range and child symbols) into a correctly aligned comment block
//! with `${n:...}` tab-stop placeholders for interactive completion. The
//! pipeline is classify -> extract -> render: a symbol kind maps into a
//! closed set of constructs, function parameters (and, where a language
//! profile allows, their type annotations) are recovered, and the renderer
//! computes column alignment instead of hard-coding spacing.
//!
//! The host editor supplies the symbol tree and the raw document text;
//! inserting the result and persisting configuration stay on the host's
//! side.
//!
//! # Example
//!
//! ```
//! use docblock_engine::{
//!     Generator, Lang, Position, Settings, SourceRange, SourceText, Symbol, SymbolKind,
//! };
//!
//! let function = Symbol::new(
//!     SymbolKind::Function,
//!     "greet",
//!     SourceRange::new(Position::new(1, 0), Position::new(3, 1)),
//! );
//!
//! let generator = Generator::new(Lang::TypeScript, Settings::default());
//! let block = generator.generate(&[function], &SourceRange::line(1), &SourceText::new(""));
//!
//! assert!(block.starts_with("/**"));
//! assert!(block.contains("${1:[greet description]}"));
//! ```

pub mod classify;
pub mod cli;
pub mod error;
pub mod extract;
pub mod generate;
pub mod lang;
pub mod render;
pub mod settings;
pub mod symbol;
pub mod tokens;

// Re-export commonly used types
pub use classify::classify;
pub use cli::Cli;
pub use error::{DocblockError, Result};
pub use extract::{extract_params, recover_signature, Signature, SourceText, TextSource};
pub use generate::{select_symbol, GenerationRequest, Generator};
pub use lang::{Lang, LangProfile};
pub use render::{render, render_empty};
pub use settings::{Settings, TagLayout};
pub use symbol::{Position, SourceRange, Symbol, SymbolKind};
pub use tokens::{Category, Param, ReturnToken, Tokens};
