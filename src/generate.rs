//! End-to-end docblock generation
//!
//! Orchestrates the pipeline: select the symbol below the anchor, classify
//! it, extract parameters for functions, render. Every failure along the
//! chain (no symbol, unrecognized kind) falls back to the empty block, so
//! the entry point is total: it always returns a string.

use serde::Deserialize;

use crate::classify::classify;
use crate::error::{DocblockError, Result};
use crate::extract::{extract, TextSource};
use crate::lang::Lang;
use crate::render::{render, render_empty};
use crate::settings::Settings;
use crate::symbol::{SourceRange, Symbol};
use crate::tokens::{Category, Tokens};

/// A docblock generation request as the CLI consumes it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Language identifier (see [`Lang::from_id`])
    pub language: String,
    /// The line of code immediately following the insertion point
    pub anchor: SourceRange,
    /// Document symbol tree from the host's symbol provider
    #[serde(default)]
    pub symbols: Vec<Symbol>,
    /// Raw document text, needed only for type recovery
    #[serde(default)]
    pub source: Option<String>,
    /// Style overrides, merged over the defaults
    #[serde(default)]
    pub settings: Option<Settings>,
}

/// Generates docblocks for one language/style combination
///
/// Collaborators are passed explicitly per call; the generator holds no
/// mutable state, so concurrent requests need no coordination.
#[derive(Debug, Clone)]
pub struct Generator {
    lang: Lang,
    settings: Settings,
}

impl Generator {
    pub fn new(lang: Lang, settings: Settings) -> Self {
        Self { lang, settings }
    }

    /// Generate a docblock for the symbol below the anchor
    ///
    /// Total: classification rejects and missing symbols degrade to the
    /// empty block instead of propagating.
    pub fn generate(
        &self,
        symbols: &[Symbol],
        anchor: &SourceRange,
        text: &dyn TextSource,
    ) -> String {
        match self.try_generate(symbols, anchor, text) {
            Ok(block) => block,
            Err(err) => {
                tracing::debug!(error = %err, "falling back to empty block");
                render_empty(&self.settings)
            }
        }
    }

    fn try_generate(
        &self,
        symbols: &[Symbol],
        anchor: &SourceRange,
        text: &dyn TextSource,
    ) -> Result<String> {
        let symbol = select_symbol(symbols, anchor).ok_or(DocblockError::NoSymbol {
            line: anchor.start.line,
        })?;

        let profile = self.lang.profile();
        let category = classify(symbol.kind, &profile).ok_or_else(|| {
            DocblockError::UnrecognizedConstruct {
                kind: symbol.kind.name().to_string(),
            }
        })?;

        tracing::debug!(
            symbol = %symbol.name,
            kind = symbol.kind.name(),
            category = category.name(),
            "classified symbol"
        );

        let mut tokens = Tokens::new(symbol.name.clone(), category);
        if category == Category::Function {
            let (params, return_type) = extract(symbol, anchor, text, &profile);
            tokens.params = params;
            tokens.ret.ty = return_type;
        }

        Ok(render(&tokens, &self.settings))
    }
}

/// Pick the symbol the anchor points at
///
/// The first level of child symbols is flattened for greater filtering
/// depth. The closest symbol starting at or after the anchor wins; among
/// equal starts the first in provider order is kept (providers list
/// declarations in document order). When nothing starts below the anchor,
/// the innermost symbol whose range contains it is the fallback, so a
/// method body resolves to the method rather than its class.
pub fn select_symbol<'a>(symbols: &'a [Symbol], anchor: &SourceRange) -> Option<&'a Symbol> {
    let mut flat: Vec<&Symbol> = Vec::new();
    for symbol in symbols {
        flat.push(symbol);
        flat.extend(symbol.children.iter());
    }

    let following = flat
        .iter()
        .copied()
        .filter(|s| s.range.start >= anchor.start)
        .min_by_key(|s| s.range.start);

    following.or_else(|| {
        flat.into_iter()
            .filter(|s| s.range.contains_range(anchor))
            .max_by_key(|s| s.range.start)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::SourceText;
    use crate::symbol::{Position, SymbolKind};

    fn range(sl: u32, sc: u32, el: u32, ec: u32) -> SourceRange {
        SourceRange::new(Position::new(sl, sc), Position::new(el, ec))
    }

    #[test]
    fn test_select_closest_following_symbol() {
        let symbols = vec![
            Symbol::new(SymbolKind::Function, "earlier", range(0, 0, 0, 20)),
            Symbol::new(SymbolKind::Function, "target", range(4, 0, 8, 1)),
            Symbol::new(SymbolKind::Function, "later", range(10, 0, 12, 1)),
        ];
        let selected = select_symbol(&symbols, &SourceRange::line(4)).unwrap();
        assert_eq!(selected.name, "target");
    }

    #[test]
    fn test_select_containing_symbol() {
        // Anchor inside a symbol that started earlier still resolves to it.
        let symbols = vec![Symbol::new(SymbolKind::Class, "Widget", range(0, 0, 20, 1))];
        let selected = select_symbol(&symbols, &SourceRange::line(5)).unwrap();
        assert_eq!(selected.name, "Widget");
    }

    #[test]
    fn test_select_flattens_one_child_level() {
        let mut class = Symbol::new(SymbolKind::Class, "Widget", range(0, 0, 20, 1));
        class
            .children
            .push(Symbol::new(SymbolKind::Method, "render", range(5, 2, 9, 3)));
        let symbols = vec![class];

        let selected = select_symbol(&symbols, &SourceRange::line(5)).unwrap();
        assert_eq!(selected.name, "render");
    }

    #[test]
    fn test_select_tie_break_keeps_provider_order() {
        let symbols = vec![
            Symbol::new(SymbolKind::Function, "first", range(3, 0, 3, 10)),
            Symbol::new(SymbolKind::Function, "second", range(3, 0, 3, 20)),
        ];
        let selected = select_symbol(&symbols, &SourceRange::line(2)).unwrap();
        assert_eq!(selected.name, "first");
    }

    #[test]
    fn test_select_nothing_after_anchor() {
        let symbols = vec![Symbol::new(SymbolKind::Function, "above", range(0, 0, 1, 1))];
        assert!(select_symbol(&symbols, &SourceRange::line(5)).is_none());
    }

    #[test]
    fn test_generate_function_end_to_end() {
        let mut function = Symbol::new(SymbolKind::Function, "foo", range(1, 2, 3, 3));
        function.children = vec![
            Symbol::new(SymbolKind::Variable, "a", range(1, 6, 1, 7)),
            Symbol::new(SymbolKind::Variable, "b", range(1, 17, 1, 18)),
        ];
        let source = "class X {\n  foo(a: number, b: string): boolean {\n    return true;\n  }\n}";
        let generator = Generator::new(Lang::TypeScript, Settings::default());

        let block = generator.generate(
            &[function],
            &SourceRange::line(1),
            &SourceText::new(source),
        );

        assert!(block.contains("${1:[foo description]}"));
        assert!(block.contains("number"));
        assert!(block.contains("string"));
        assert!(block.contains("@return  ${6:boolean}"));
    }

    #[test]
    fn test_generate_unrecognized_kind_falls_back() {
        let symbols = vec![Symbol::new(SymbolKind::Label, "loop", range(2, 0, 2, 5))];
        let generator = Generator::new(Lang::TypeScript, Settings::default());
        let block = generator.generate(&symbols, &SourceRange::line(2), &SourceText::new(""));
        assert_eq!(block, "/**\n *\n */");
    }

    #[test]
    fn test_generate_no_symbol_falls_back() {
        let generator = Generator::new(Lang::TypeScript, Settings::default());
        let block = generator.generate(&[], &SourceRange::line(0), &SourceText::new(""));
        assert_eq!(block, "/**\n *\n */");
    }

    #[test]
    fn test_request_deserialization() {
        let json = r#"{
            "language": "typescript",
            "anchor": {"start": {"line": 4, "col": 0}, "end": {"line": 5, "col": 0}},
            "symbols": [{
                "kind": "function",
                "name": "foo",
                "range": {"start": {"line": 4, "col": 0}, "end": {"line": 6, "col": 1}}
            }]
        }"#;
        let request: GenerationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.language, "typescript");
        assert_eq!(request.symbols.len(), 1);
        assert!(request.source.is_none());
        assert!(request.settings.is_none());
    }
}
