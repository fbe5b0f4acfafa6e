//! Class declaration handling
//!
//! Locates the primary class (first declaration or expression wins) and
//! merges its syntactic name and superclass with the tags of the nearest
//! preceding comment.

use super::jsdoc::parse_jsdoc;
use crate::extractors::base::{ClassInfo, UNDOCUMENTED};
use tree_sitter::Node;

const CLASS_KINDS: &[&str] = &["class_declaration", "class"];

impl super::JavaScriptExtractor {
    /// First class declaration or class expression in document order
    pub(super) fn find_class_node<'tree>(&self, root: &Node<'tree>) -> Option<Node<'tree>> {
        self.base.find_first_by_types(root, CLASS_KINDS)
    }

    /// Superclass expression text from the `class_heritage` clause
    pub(super) fn extract_extends(&self, class_node: &Node) -> Option<String> {
        let heritage = self.base.find_child_by_type(class_node, "class_heritage")?;
        let mut cursor = heritage.walk();
        let superclass = heritage.named_children(&mut cursor).next();
        superclass.map(|n| self.base.get_node_text(&n))
    }

    /// Build class info; explicit `@class`/`@extends` override the syntax,
    /// `@classdesc` beats `@description` beats untagged text
    pub(super) fn build_class_info(&mut self, class_node: Option<Node>) -> ClassInfo {
        let mut info = ClassInfo::new(&self.base.source_path);

        let Some(node) = class_node else {
            self.base
                .diagnostics
                .warn("No class declaration or expression found");
            return info;
        };

        if let Some(name) = self.base.get_field_text(&node, "name") {
            info.class_name = name;
        }
        if let Some(extends) = self.extract_extends(&node) {
            info.extends_name = extends;
        }

        let Some(comment) = self.comments.nearest_before(node.start_byte()) else {
            return info;
        };
        let text = comment.text.clone();
        let doc = parse_jsdoc(&text, &mut self.base.diagnostics);

        info.description = doc
            .entries
            .classdesc
            .clone()
            .or_else(|| Some(doc.description.clone()).filter(|d| !d.is_empty()))
            .unwrap_or_else(|| UNDOCUMENTED.to_string());
        if let Some(class) = doc.entries.class {
            info.class_name = class;
        }
        if let Some(extends) = doc.entries.extends {
            info.extends_name = extends;
        }

        info
    }
}
