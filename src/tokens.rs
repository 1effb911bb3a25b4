//! Token model produced by classification and extraction
//!
//! `Tokens` is the intermediate representation between the symbol tree and
//! the renderer: pure data, one fresh instance per generation request,
//! populated in classify -> extract order and consumed exactly once.

/// The closed set of documentable constructs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Class,
    Function,
    Variable,
}

impl Category {
    /// Get the canonical name of the category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Function => "function",
            Self::Variable => "variable",
        }
    }
}

/// One declared function parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name, always present
    pub name: String,
    /// Default value, empty when the declaration carries none
    pub value: String,
    /// Recovered type annotation. `None` means recovery could not resolve
    /// one (the renderer substitutes the type placeholder); this is distinct
    /// from an empty string.
    pub ty: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            ty: None,
        }
    }

    pub fn typed(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            ty: Some(ty.into()),
        }
    }
}

/// Whether and what the construct returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnToken {
    /// `false` when the construct syntactically cannot return (a class)
    pub present: bool,
    /// Recovered return type; `None` for "may return, type unknown"
    pub ty: Option<String>,
}

/// Aggregate token model for one generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    pub name: String,
    pub category: Category,
    /// Only meaningful when `category` is `Variable`
    pub var_type: Option<String>,
    pub ret: ReturnToken,
    /// Only populated when `category` is `Function`
    pub params: Vec<Param>,
}

impl Tokens {
    /// Create a fresh token model for a classified symbol
    ///
    /// `ret.present` defaults to `true` except for classes, which cannot
    /// return a value.
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            var_type: None,
            ret: ReturnToken {
                present: category != Category::Class,
                ty: None,
            },
            params: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_forces_return_absent() {
        let tokens = Tokens::new("Widget", Category::Class);
        assert!(!tokens.ret.present);
        assert!(tokens.params.is_empty());
    }

    #[test]
    fn test_function_defaults() {
        let tokens = Tokens::new("run", Category::Function);
        assert!(tokens.ret.present);
        assert_eq!(tokens.ret.ty, None);
        assert_eq!(tokens.var_type, None);
    }

    #[test]
    fn test_param_type_absence_is_not_empty_string() {
        let untyped = Param::new("a");
        let typed = Param::typed("a", "");
        assert_ne!(untyped, typed);
    }
}
