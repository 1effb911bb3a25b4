//! Symbol shapes supplied by the host editor's symbol provider
//!
//! These mirror the document-symbol tree a language server hands back: each
//! symbol carries a kind, a name, a half-open source range and nested child
//! symbols. The engine only consumes this shape; it never parses source
//! itself.

use serde::{Deserialize, Serialize};

/// A line/column position in a document (both zero-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub col: u32,
}

impl Position {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// A half-open `[start, end)` range in line/column coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRange {
    pub start: Position,
    pub end: Position,
}

impl SourceRange {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Range covering one whole line
    pub fn line(line: u32) -> Self {
        Self {
            start: Position::new(line, 0),
            end: Position::new(line + 1, 0),
        }
    }

    /// Check whether a position falls inside the range (end exclusive)
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position < self.end
    }

    /// Check whether `other` lies entirely within this range
    pub fn contains_range(&self, other: &SourceRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// The construct kinds a symbol provider can report
///
/// This is the full document-symbol kind vocabulary; classification decides
/// which of these are documentable for a given language (see
/// [`crate::classify`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SymbolKind {
    File,
    Module,
    Namespace,
    Package,
    Class,
    Method,
    Property,
    Field,
    Constructor,
    Enum,
    Interface,
    Function,
    Variable,
    Constant,
    String,
    Number,
    Boolean,
    Array,
    Object,
    Key,
    Null,
    EnumMember,
    Struct,
    Event,
    Operator,
    TypeParameter,
    Label,
}

impl SymbolKind {
    /// Get the canonical name of the kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Module => "module",
            Self::Namespace => "namespace",
            Self::Package => "package",
            Self::Class => "class",
            Self::Method => "method",
            Self::Property => "property",
            Self::Field => "field",
            Self::Constructor => "constructor",
            Self::Enum => "enum",
            Self::Interface => "interface",
            Self::Function => "function",
            Self::Variable => "variable",
            Self::Constant => "constant",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Key => "key",
            Self::Null => "null",
            Self::EnumMember => "enum_member",
            Self::Struct => "struct",
            Self::Event => "event",
            Self::Operator => "operator",
            Self::TypeParameter => "type_parameter",
            Self::Label => "label",
        }
    }
}

/// One entry of the document symbol tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub name: String,
    pub range: SourceRange,
    #[serde(default)]
    pub children: Vec<Symbol>,
}

impl Symbol {
    pub fn new(kind: SymbolKind, name: impl Into<String>, range: SourceRange) -> Self {
        Self {
            kind,
            name: name.into(),
            range,
            children: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(sl: u32, sc: u32, el: u32, ec: u32) -> SourceRange {
        SourceRange::new(Position::new(sl, sc), Position::new(el, ec))
    }

    #[test]
    fn test_contains_position() {
        let r = range(1, 4, 3, 0);
        assert!(r.contains(Position::new(1, 4)));
        assert!(r.contains(Position::new(2, 80)));
        assert!(!r.contains(Position::new(3, 0))); // end is exclusive
        assert!(!r.contains(Position::new(1, 3)));
    }

    #[test]
    fn test_contains_range() {
        let outer = range(0, 0, 10, 0);
        assert!(outer.contains_range(&range(2, 1, 2, 9)));
        assert!(outer.contains_range(&outer));
        assert!(!outer.contains_range(&range(9, 0, 11, 0)));
    }

    #[test]
    fn test_line_range() {
        let r = SourceRange::line(5);
        assert!(r.contains(Position::new(5, 0)));
        assert!(r.contains(Position::new(5, 120)));
        assert!(!r.contains(Position::new(6, 0)));
    }

    #[test]
    fn test_kind_round_trip() {
        let json = serde_json::to_string(&SymbolKind::TypeParameter).unwrap();
        assert_eq!(json, "\"typeParameter\"");
        let kind: SymbolKind = serde_json::from_str("\"enumMember\"").unwrap();
        assert_eq!(kind, SymbolKind::EnumMember);
    }

    #[test]
    fn test_symbol_deserialize_without_children() {
        let json = r#"{
            "kind": "function",
            "name": "foo",
            "range": {"start": {"line": 1, "col": 0}, "end": {"line": 3, "col": 1}}
        }"#;
        let symbol: Symbol = serde_json::from_str(json).unwrap();
        assert_eq!(symbol.kind, SymbolKind::Function);
        assert!(symbol.children.is_empty());
    }
}
