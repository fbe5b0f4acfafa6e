//! Member declarations and method records
//!
//! Members are collected in document order as one of two declaration kinds
//! and each is turned into a `MethodRecord` using the nearest preceding
//! unclaimed JSDoc comment.

use super::helpers::FUNCTION_VALUE_KINDS;
use super::jsdoc::{parse_jsdoc, JsDoc};
use super::visibility::derive_access;
use crate::extractors::base::{
    ExtractError, ExtractResult, MethodRecord, UNCATEGORIZED, UNDOCUMENTED,
};
use tree_sitter::Node;

/// Declaration kinds that become methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// `method_definition`: class or object-literal method
    Method,
    /// Object property or class field whose value is a function
    FunctionProperty,
}

/// A member declaration located in the tree
#[derive(Debug, Clone, Copy)]
pub(super) struct MemberDecl<'tree> {
    pub kind: MemberKind,
    /// The declaration itself (spans modifiers, name and body)
    pub node: Node<'tree>,
    /// The node carrying parameters and the async flag
    pub function: Node<'tree>,
}

impl super::JavaScriptExtractor {
    /// Every method definition and function-valued property, in document order
    pub(super) fn collect_members<'tree>(&self, root: &Node<'tree>) -> Vec<MemberDecl<'tree>> {
        let mut members = Vec::new();
        for node in self
            .base
            .find_nodes_by_types(root, &["method_definition", "pair", "field_definition"])
        {
            if node.kind() == "method_definition" {
                members.push(MemberDecl {
                    kind: MemberKind::Method,
                    node,
                    function: node,
                });
            } else if let Some(value) = node.child_by_field_name("value") {
                if FUNCTION_VALUE_KINDS.contains(&value.kind()) {
                    members.push(MemberDecl {
                        kind: MemberKind::FunctionProperty,
                        node,
                        function: value,
                    });
                }
            }
        }
        members
    }

    /// Build the record for one member, claiming its doc comment
    pub(super) fn build_method(
        &mut self,
        member: &MemberDecl,
        class_description: &str,
    ) -> ExtractResult<MethodRecord> {
        let (start_line, end_line) = self.base.line_span(&member.node);
        let name = self
            .member_name(&member.node)
            .ok_or(ExtractError::MissingMemberName { line: start_line })?;

        let doc = match self.comments.claim_doc_before(member.node.start_byte()) {
            Some(comment) => parse_jsdoc(&comment.text, &mut self.base.diagnostics),
            None => JsDoc::default(),
        };

        let is_static = self.is_static(&member.node);
        let is_constructor = member.kind == MemberKind::Method
            && !is_static
            && name == "constructor"
            && member.node.parent().map(|p| p.kind()) == Some("class_body");

        let JsDoc {
            description,
            entries,
        } = doc;

        let mut description = if description.is_empty() {
            if entries.returns.is_some() {
                String::new()
            } else {
                UNDOCUMENTED.to_string()
            }
        } else {
            description
        };
        // The class comment is not consumed, so an undocumented first member
        // can pick it up
        if description == class_description {
            description = UNDOCUMENTED.to_string();
        }

        Ok(MethodRecord {
            signature: self.build_signature(&name, &member.function),
            is_async: self.is_async(&member.function),
            is_static,
            access: derive_access(&name, is_constructor, is_static),
            parameters: entries.params,
            description,
            returns: entries.returns,
            throws: entries.throws,
            example: entries.example,
            deprecated: entries.deprecated,
            since: entries.since,
            category: entries
                .category
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            start_line,
            end_line,
            source_text: self.base.node_source(&member.node),
            name,
        })
    }

    /// Build records for all members; a failing member is reported and skipped
    pub(super) fn extract_methods(
        &mut self,
        root: &Node,
        class_description: &str,
    ) -> Vec<MethodRecord> {
        let members = self.collect_members(root);
        let mut methods = Vec::with_capacity(members.len());
        for member in &members {
            match self.build_method(member, class_description) {
                Ok(method) => methods.push(method),
                Err(e) => {
                    let line = self.base.line_span(&member.node).0;
                    self.base
                        .diagnostics
                        .error_at(line, format!("Error parsing method: {}", e));
                }
            }
        }
        methods
    }
}
