//! Symbol classification
//!
//! The admission gate of the pipeline: a symbol kind either maps to one of
//! the closed construct categories or the symbol is not documentable at all.

use crate::lang::LangProfile;
use crate::symbol::SymbolKind;
use crate::tokens::Category;

/// Classify a symbol kind against a language profile
///
/// Returns `None` for kinds outside every whitelist; callers must treat
/// that as "nothing to document" and fall back to the empty block. Pure
/// function of the kind.
pub fn classify(kind: SymbolKind, profile: &LangProfile) -> Option<Category> {
    if profile.class_kinds.contains(&kind) {
        Some(Category::Class)
    } else if profile.function_kinds.contains(&kind) {
        Some(Category::Function)
    } else if profile.variable_kinds.contains(&kind) {
        Some(Category::Variable)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Lang;

    #[test]
    fn test_whitelisted_kinds_classify() {
        let profile = Lang::TypeScript.profile();

        assert_eq!(classify(SymbolKind::Class, &profile), Some(Category::Class));
        assert_eq!(
            classify(SymbolKind::Namespace, &profile),
            Some(Category::Class)
        );
        assert_eq!(
            classify(SymbolKind::Object, &profile),
            Some(Category::Class)
        );
        assert_eq!(
            classify(SymbolKind::Function, &profile),
            Some(Category::Function)
        );
        assert_eq!(
            classify(SymbolKind::Method, &profile),
            Some(Category::Function)
        );
        assert_eq!(
            classify(SymbolKind::Constructor, &profile),
            Some(Category::Function)
        );
        assert_eq!(
            classify(SymbolKind::Variable, &profile),
            Some(Category::Variable)
        );
        assert_eq!(
            classify(SymbolKind::Property, &profile),
            Some(Category::Variable)
        );
        assert_eq!(
            classify(SymbolKind::Constant, &profile),
            Some(Category::Variable)
        );
    }

    #[test]
    fn test_unlisted_kinds_are_rejected() {
        let profile = Lang::TypeScript.profile();
        for kind in [
            SymbolKind::File,
            SymbolKind::Interface,
            SymbolKind::Enum,
            SymbolKind::String,
            SymbolKind::Label,
            SymbolKind::TypeParameter,
        ] {
            assert_eq!(classify(kind, &profile), None, "{:?}", kind);
        }
    }

    #[test]
    fn test_per_language_override() {
        // The PHP profile moves constants into the class whitelist.
        assert_eq!(
            classify(SymbolKind::Constant, &Lang::Php.profile()),
            Some(Category::Class)
        );
        assert_eq!(
            classify(SymbolKind::Constant, &Lang::Cpp.profile()),
            Some(Category::Variable)
        );
    }
}
