//! Parameter extraction
//!
//! Given a function-like symbol, find the children that constitute its
//! declared parameters and, where the language profile supplies a signature
//! pattern, recover textual type annotations from the raw source. Recovery
//! is strictly best-effort: a pattern mismatch degrades to type-less
//! parameters, never to an error.

use regex::Regex;

use crate::lang::LangProfile;
use crate::symbol::{SourceRange, Symbol};
use crate::tokens::Param;

/// Supplies the literal text underlying a source range
///
/// Implemented by the host over its open document; only the type-recovery
/// stage consumes it.
pub trait TextSource {
    fn text_of(&self, range: &SourceRange) -> Option<String>;
}

/// An in-memory document implementing [`TextSource`]
#[derive(Debug, Clone)]
pub struct SourceText {
    lines: Vec<String>,
}

impl SourceText {
    pub fn new(document: &str) -> Self {
        Self {
            lines: document.lines().map(String::from).collect(),
        }
    }
}

impl TextSource for SourceText {
    fn text_of(&self, range: &SourceRange) -> Option<String> {
        let start_line = range.start.line as usize;
        let end_line = range.end.line as usize;
        if start_line >= self.lines.len() || end_line < start_line {
            return None;
        }

        let slice = |line: &str, from: usize, to: usize| -> String {
            line.chars().skip(from).take(to.saturating_sub(from)).collect()
        };

        if start_line == end_line {
            let line = &self.lines[start_line];
            return Some(slice(line, range.start.col as usize, range.end.col as usize));
        }

        let mut out = Vec::new();
        out.push(slice(
            &self.lines[start_line],
            range.start.col as usize,
            usize::MAX,
        ));
        for line in self
            .lines
            .iter()
            .take(end_line.min(self.lines.len()))
            .skip(start_line + 1)
        {
            out.push(line.clone());
        }
        if end_line < self.lines.len() {
            out.push(slice(&self.lines[end_line], 0, range.end.col as usize));
        }
        Some(out.join("\n"))
    }
}

/// A signature recovered from raw source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub params: Vec<Param>,
    pub return_type: Option<String>,
}

/// Extract the declared parameters of a function symbol
///
/// A function's children may mix true parameters with nested declarations
/// (locals of a one-line body); only children whose range falls inside the
/// anchor range qualify. Declaration order is preserved and shadowed names
/// are kept as separate entries.
pub fn extract_params(symbol: &Symbol, anchor: &SourceRange) -> Vec<Param> {
    symbol
        .children
        .iter()
        .filter(|child| anchor.contains_range(&child.range))
        .map(|child| Param::new(child.name.clone()))
        .collect()
}

/// Recover parameter and return types from a signature snippet
///
/// Returns `None` when the pattern does not match; callers keep their
/// type-less result in that case.
pub fn recover_signature(snippet: &str, pattern: &Regex) -> Option<Signature> {
    let caps = pattern.captures(snippet)?;

    let list = caps.get(2).map(|m| m.as_str()).unwrap_or("");
    let return_type = caps
        .get(3)
        .map(|m| m.as_str().trim())
        .filter(|t| !t.is_empty())
        .map(String::from);

    let mut params = Vec::new();
    for piece in split_top_level(list, ',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        match piece.split_once(':') {
            Some((name, ty)) => params.push(Param::typed(name.trim(), ty.trim())),
            None => params.push(Param::new(piece)),
        }
    }

    Some(Signature {
        params,
        return_type,
    })
}

/// Full extraction: anchored children plus optional type recovery
///
/// Returns the parameter list and, when the signature pattern captured one,
/// the return type annotation.
pub fn extract(
    symbol: &Symbol,
    anchor: &SourceRange,
    text: &dyn TextSource,
    profile: &LangProfile,
) -> (Vec<Param>, Option<String>) {
    let mut params = extract_params(symbol, anchor);
    let mut return_type = None;

    if let Some(pattern) = profile.signature_pattern {
        if let Some(snippet) = text.text_of(&symbol.range) {
            if let Some(signature) = recover_signature(&snippet, pattern) {
                tracing::trace!(
                    recovered = signature.params.len(),
                    base = params.len(),
                    "signature recovery matched"
                );
                if params.is_empty() {
                    params = signature.params;
                } else {
                    annotate(&mut params, &signature.params);
                }
                return_type = signature.return_type;
            }
        }
    }

    (params, return_type)
}

/// Copy recovered types onto the anchored parameter list, matched by name
fn annotate(params: &mut [Param], recovered: &[Param]) {
    for param in params.iter_mut() {
        if let Some(found) = recovered.iter().find(|r| r.name == param.name) {
            param.ty = found.ty.clone();
        }
    }
}

/// Split on a separator, ignoring occurrences nested in brackets
fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        match c {
            '(' | '[' | '{' | '<' => depth += 1,
            ')' | ']' | '}' | '>' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                pieces.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    pieces.push(&text[start..]);
    pieces
}
