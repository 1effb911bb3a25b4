//! Style settings for rendered docblocks
//!
//! A small value object: delimiter strings, tag layout variant and column
//! spacing. The surrounding application persists these; here they only need
//! defaults and a serde shape so a generation request can override fields.

use serde::Deserialize;

/// Tag layout variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagLayout {
    /// Single-line tags with computed column alignment
    #[default]
    Standard,
    /// Type and name on one line, description indented on the next
    Compact,
}

/// Docblock style options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Start of a doc block
    pub comment_open: String,
    /// End of a doc block
    pub comment_close: String,
    /// The beginning set of characters for each doc block line
    pub line_prefix: String,
    /// End-of-line sequence
    #[serde(rename = "lineEscape")]
    pub eos: String,
    /// Tag layout variant
    pub tag_layout: TagLayout,
    /// Number of spaces between tag columns
    pub column_spacing: usize,
    /// Whether functions get a return tag by default
    #[serde(rename = "showReturnTagByDefault")]
    pub show_return_tag: bool,
    /// Placeholder rendered when no type could be recovered
    pub type_placeholder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            comment_open: "/**".to_string(),
            comment_close: " */".to_string(),
            line_prefix: " * ".to_string(),
            eos: "\n".to_string(),
            tag_layout: TagLayout::Standard,
            column_spacing: 2,
            show_return_tag: true,
            type_placeholder: "[type]".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.comment_open, "/**");
        assert_eq!(settings.comment_close, " */");
        assert_eq!(settings.line_prefix, " * ");
        assert_eq!(settings.column_spacing, 2);
        assert_eq!(settings.tag_layout, TagLayout::Standard);
        assert!(settings.show_return_tag);
        assert_eq!(settings.type_placeholder, "[type]");
    }

    #[test]
    fn test_partial_override() {
        let settings: Settings =
            serde_json::from_str(r#"{"columnSpacing": 4, "tagLayout": "compact"}"#).unwrap();
        assert_eq!(settings.column_spacing, 4);
        assert_eq!(settings.tag_layout, TagLayout::Compact);
        // untouched fields keep their defaults
        assert_eq!(settings.comment_open, "/**");
        assert!(settings.show_return_tag);
    }
}
