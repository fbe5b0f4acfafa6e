//! JavaScript class documentation extractor
//!
//! The extraction is organized into specialized modules:
//!
//! - **comments**: block comment index with consume-once claiming
//! - **jsdoc**: tag grammar parser for `/** ... */` comments
//! - **classes**: primary class lookup and class-level record
//! - **functions**: member declarations and method records
//! - **helpers**: modifiers, names and parameter lists off the tree
//! - **visibility**: access level derivation
//! - **categories**: comment-only properties and category grouping
//! - **fallback**: snippet re-synthesis and the regex-only model

pub mod categories;
mod classes;
pub mod comments;
pub mod fallback;
mod functions;
mod helpers;
pub mod jsdoc;
mod visibility;

pub use functions::MemberKind;
pub use visibility::derive_access;

use crate::extractors::base::{BaseExtractor, Diagnostics, DocumentationModel, ExtractConfig};
use categories::{categorize_methods, parse_properties};
use comments::CommentIndex;
use tree_sitter::Tree;

/// Builds a documentation model from a JavaScript syntax tree
///
/// One extractor serves one extraction call: the comment index it owns is
/// consumed as members claim their comments.
pub struct JavaScriptExtractor {
    base: BaseExtractor,
    comments: CommentIndex,
}

impl JavaScriptExtractor {
    /// `content` must be the exact text `tree` was parsed from
    pub fn new(source_path: String, content: String, config: ExtractConfig) -> Self {
        Self {
            base: BaseExtractor::new(source_path, content, config),
            comments: CommentIndex::new(),
        }
    }

    /// Visit the tree and build the full model
    ///
    /// Properties are scanned from `property_text`, which is the original
    /// input even when the tree was built from a recovered snippet.
    pub fn extract_model(&mut self, tree: &Tree, property_text: &str) -> DocumentationModel {
        let root = tree.root_node();
        self.comments = CommentIndex::from_tree(&self.base, &root);
        tracing::debug!(
            "Indexed {} block comments in {}",
            self.comments.len(),
            self.base.source_path
        );

        let class_node = self.find_class_node(&root);
        let class_info = self.build_class_info(class_node);
        let methods = self.extract_methods(&root, &class_info.description);
        let properties_by_category = parse_properties(property_text, &mut self.base.diagnostics);

        tracing::debug!(
            "Class {}: {} methods, {} unclaimed comments",
            class_info.class_name,
            methods.len(),
            self.comments.unclaimed_count()
        );

        let mut model = DocumentationModel::new(class_info);
        model.methods_by_category = categorize_methods(&methods);
        model.methods = methods;
        model.properties_by_category = properties_by_category;
        model
    }

    pub fn take_diagnostics(&mut self) -> Diagnostics {
        self.base.take_diagnostics()
    }
}
