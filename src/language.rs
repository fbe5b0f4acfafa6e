//! Language Support - tree-sitter language configuration
//!
//! The extraction engine documents classes written in JavaScript; all
//! grammar lookups go through here so the parser setup lives in one place.

use anyhow::Result;

/// Get tree-sitter language parser for a given language name
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "javascript" | "jsx" => Ok(tree_sitter_javascript::LANGUAGE.into()),
        _ => Err(anyhow::anyhow!(
            "Unsupported language: '{}'. Supported languages: javascript, jsx",
            language
        )),
    }
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to `get_tree_sitter_language()`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "js" | "mjs" | "cjs" => Some("javascript"),
        "jsx" => Some("jsx"),
        _ => None,
    }
}

/// Create a parser already configured for JavaScript
pub fn javascript_parser() -> Result<tree_sitter::Parser> {
    let mut parser = tree_sitter::Parser::new();
    let language = get_tree_sitter_language("javascript")?;
    parser
        .set_language(&language)
        .map_err(|e| anyhow::anyhow!("Failed to set parser language for javascript: {}", e))?;
    Ok(parser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_javascript_extensions() {
        assert_eq!(detect_language_from_extension("js"), Some("javascript"));
        assert_eq!(detect_language_from_extension("mjs"), Some("javascript"));
        assert_eq!(detect_language_from_extension("jsx"), Some("jsx"));
        assert_eq!(detect_language_from_extension("py"), None);
    }

    #[test]
    fn rejects_unknown_language() {
        assert!(get_tree_sitter_language("cobol").is_err());
    }

    #[test]
    fn parser_builds_a_tree() {
        let mut parser = javascript_parser().unwrap();
        let tree = parser.parse("class A {}", None).unwrap();
        assert_eq!(tree.root_node().kind(), "program");
        assert!(!tree.root_node().has_error());
    }
}
