// BaseExtractor implementation for Classdoc
//
// Owns the text a tree was built from, the per-run configuration and the
// diagnostics sink. Language-specific extractors wrap one of these.

use tree_sitter::Node;

use super::types::{Diagnostics, ExtractConfig};

/// Shared state for one extraction run over one source text
pub struct BaseExtractor {
    pub source_path: String,
    pub content: String,
    pub config: ExtractConfig,
    pub diagnostics: Diagnostics,
    lines: Vec<String>,
}

impl BaseExtractor {
    pub fn new(source_path: String, content: String, config: ExtractConfig) -> Self {
        let lines = content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self {
            source_path,
            content,
            config,
            diagnostics: Diagnostics::new(),
            lines,
        }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// 1-based start and end line of a node
    pub fn line_span(&self, node: &Node) -> (u32, u32) {
        (
            node.start_position().row as u32 + 1,
            node.end_position().row as u32 + 1,
        )
    }

    /// Original lines `start_row..=end_row` (0-based) with the first line's
    /// leading indentation removed from every line that carries it
    pub fn extract_source_lines(&self, start_row: usize, end_row: usize) -> String {
        if start_row >= self.lines.len() {
            return String::new();
        }
        let end_row = end_row.min(self.lines.len() - 1);

        let first_line = &self.lines[start_row];
        let base_indent = &first_line[..first_line.len() - first_line.trim_start().len()];

        self.lines[start_row..=end_row]
            .iter()
            .map(|line| line.strip_prefix(base_indent).unwrap_or(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Dedented source of a node, or empty when source capture is disabled
    pub fn node_source(&self, node: &Node) -> String {
        if !self.config.include_source {
            return String::new();
        }
        self.extract_source_lines(node.start_position().row, node.end_position().row)
    }

    /// Hand the accumulated diagnostics to the caller, leaving an empty sink
    pub fn take_diagnostics(&mut self) -> Diagnostics {
        std::mem::take(&mut self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(content: &str) -> BaseExtractor {
        BaseExtractor::new(
            "test.js".to_string(),
            content.to_string(),
            ExtractConfig::default(),
        )
    }

    #[test]
    fn source_lines_strip_first_line_indent() {
        let extractor = base("class A {\n    foo() {\n        return 1;\n    }\n}");
        assert_eq!(
            extractor.extract_source_lines(1, 3),
            "foo() {\n    return 1;\n}"
        );
    }

    #[test]
    fn lines_without_the_base_indent_are_kept() {
        let extractor = base("    a() {\nx\n    }");
        assert_eq!(extractor.extract_source_lines(0, 2), "a() {\nx\n}");
    }

    #[test]
    fn out_of_range_rows_are_clamped() {
        let extractor = base("one\ntwo");
        assert_eq!(extractor.extract_source_lines(1, 10), "two");
        assert_eq!(extractor.extract_source_lines(5, 10), "");
    }

    #[test]
    fn tabs_count_as_indentation() {
        let extractor = base("\tbar() {\n\t\tbaz();\n\t}");
        assert_eq!(extractor.extract_source_lines(0, 2), "bar() {\n\tbaz();\n}");
    }

    #[test]
    fn crlf_line_endings_are_dropped() {
        let extractor = base("class A {\r\n  bar(x) {\r\n    return x;\r\n  }\r\n}\r\n");
        assert_eq!(
            extractor.extract_source_lines(1, 3),
            "bar(x) {\n  return x;\n}"
        );
    }
}
