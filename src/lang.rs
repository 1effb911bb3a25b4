//! Target languages and their documentation profiles
//!
//! Each language supplies a [`LangProfile`]: the three classification
//! whitelists plus an optional signature pattern for parameter type
//! recovery. Profiles are plain data selected by a match, not an
//! inheritance chain; this is the crate's only polymorphism point.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{DocblockError, Result};
use crate::symbol::SymbolKind;

/// Supported target languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    TypeScript,
    JavaScript,
    Php,
    Cpp,
}

/// Per-language classification whitelists and type-recovery pattern
///
/// The whitelists are disjoint: a kind appears in at most one of them.
#[derive(Debug, Clone, Copy)]
pub struct LangProfile {
    /// Kinds documented as classes
    pub class_kinds: &'static [SymbolKind],
    /// Kinds documented as functions
    pub function_kinds: &'static [SymbolKind],
    /// Kinds documented as variables
    pub variable_kinds: &'static [SymbolKind],
    /// Pattern matching `name(params): return {` in raw source, used to
    /// recover parameter and return type annotations. `None` disables
    /// recovery for the language.
    pub signature_pattern: Option<&'static Regex>,
}

const CLASS_KINDS: &[SymbolKind] = &[SymbolKind::Class, SymbolKind::Namespace, SymbolKind::Object];

const FUNCTION_KINDS: &[SymbolKind] = &[
    SymbolKind::Function,
    SymbolKind::Method,
    SymbolKind::Constructor,
];

const VARIABLE_KINDS: &[SymbolKind] = &[
    SymbolKind::Variable,
    SymbolKind::Property,
    SymbolKind::Constant,
];

// PHP reclassifies constants: a top-level define() is documented like a
// class-level declaration rather than a local variable.
const PHP_CLASS_KINDS: &[SymbolKind] = &[
    SymbolKind::Class,
    SymbolKind::Namespace,
    SymbolKind::Object,
    SymbolKind::Constant,
];

const PHP_VARIABLE_KINDS: &[SymbolKind] = &[SymbolKind::Variable, SymbolKind::Property];

/// Matches `name(param: Type, ...)` optionally followed by `: ReturnType`,
/// up to the opening body brace. Group 2 is the parameter list, group 3 the
/// return annotation.
static TS_SIGNATURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)([A-Za-z0-9$_]+)\(([A-Za-z0-9$_:,\s]*)\)(?::\s*([A-Za-z0-9$_]+))?\s*\{")
        .expect("typescript signature pattern is valid")
});

impl Lang {
    /// Look up a language from its identifier string
    pub fn from_id(id: &str) -> Result<Self> {
        match id.to_lowercase().as_str() {
            "ts" | "typescript" => Ok(Self::TypeScript),
            "js" | "javascript" => Ok(Self::JavaScript),
            "php" => Ok(Self::Php),
            "cpp" | "c++" | "cc" => Ok(Self::Cpp),
            _ => Err(DocblockError::UnsupportedLanguage { id: id.to_string() }),
        }
    }

    /// Get the canonical name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
            Self::Php => "php",
            Self::Cpp => "cpp",
        }
    }

    /// Get the documentation profile for this language
    pub fn profile(&self) -> LangProfile {
        match self {
            // JavaScript shares the TS pattern: untyped signatures simply
            // match with an empty annotation group.
            Self::TypeScript | Self::JavaScript => LangProfile {
                class_kinds: CLASS_KINDS,
                function_kinds: FUNCTION_KINDS,
                variable_kinds: VARIABLE_KINDS,
                signature_pattern: Some(&*TS_SIGNATURE),
            },
            Self::Php => LangProfile {
                class_kinds: PHP_CLASS_KINDS,
                function_kinds: FUNCTION_KINDS,
                variable_kinds: PHP_VARIABLE_KINDS,
                signature_pattern: None,
            },
            Self::Cpp => LangProfile {
                class_kinds: CLASS_KINDS,
                function_kinds: FUNCTION_KINDS,
                variable_kinds: VARIABLE_KINDS,
                signature_pattern: None,
            },
        }
    }
}
