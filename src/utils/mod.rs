// Classdoc Utilities Module
//
// Common utilities and helper functions used throughout the crate.

use anyhow::Result;
use std::path::Path;

/// File utilities
pub mod file_utils {
    use super::*;
    use anyhow::Context;
    use std::fs;

    /// Check if a file has a supported source extension
    pub fn is_supported_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(crate::language::detect_language_from_extension)
            .is_some()
    }

    /// Read file content safely
    pub fn read_file_content(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }

    /// Output file stem for a source path: "lib/Foo.js" → "Foo"
    pub fn output_stem(source: &str) -> String {
        let filename = source.rsplit(['/', '\\']).next().unwrap_or(source);
        match filename.rfind('.') {
            Some(dot) if dot > 0 => filename[..dot].to_string(),
            _ => filename.to_string(),
        }
    }
}

/// Markup escaping for documentation text
pub mod escape;

#[cfg(test)]
mod tests {
    use super::file_utils::*;
    use std::path::Path;

    #[test]
    fn supported_files_are_javascript_sources() {
        assert!(is_supported_file(Path::new("a/b/Foo.js")));
        assert!(is_supported_file(Path::new("Foo.mjs")));
        assert!(!is_supported_file(Path::new("Foo.rs")));
        assert!(!is_supported_file(Path::new("Makefile")));
    }

    #[test]
    fn output_stem_strips_directory_and_extension() {
        assert_eq!(output_stem("library/files/SvResourceFile.js"), "SvResourceFile");
        assert_eq!(output_stem("Foo.js"), "Foo");
        assert_eq!(output_stem(".hidden"), ".hidden");
        assert_eq!(output_stem("Makefile"), "Makefile");
    }
}
