//! Utility helper functions for JavaScript extraction
//!
//! Modifier checks, member names and parameter lists read straight off the
//! syntax tree.

use tree_sitter::Node;

/// Node kinds that make a property value function-valued
pub(super) const FUNCTION_VALUE_KINDS: &[&str] = &[
    "function_expression",
    "function",
    "arrow_function",
    "generator_function",
];

impl super::JavaScriptExtractor {
    /// Check if function is async
    pub(super) fn is_async(&self, function: &Node) -> bool {
        self.base.has_child_kind(function, "async")
    }

    /// Check if member carries the `static` modifier
    pub(super) fn is_static(&self, member: &Node) -> bool {
        self.base.has_child_kind(member, "static")
    }

    /// Name of a method, object property or class field; string keys lose
    /// their quotes
    pub(super) fn member_name(&self, member: &Node) -> Option<String> {
        let name_node = member
            .child_by_field_name("name")
            .or_else(|| member.child_by_field_name("key"))
            .or_else(|| member.child_by_field_name("property"))?;

        let text = self.base.get_node_text(&name_node);
        let name = if name_node.kind() == "string" {
            text.trim_matches(|c| c == '"' || c == '\'' || c == '`')
                .to_string()
        } else {
            text
        };

        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    /// Formal parameter names in declaration order
    ///
    /// `a = 1` → `a`, `...rest` → `...rest`, destructuring patterns keep
    /// their source text.
    pub(super) fn extract_parameters(&self, function: &Node) -> Vec<String> {
        if let Some(single) = function.child_by_field_name("parameter") {
            return vec![self.base.get_node_text(&single)];
        }

        let Some(params) = function.child_by_field_name("parameters") else {
            return Vec::new();
        };

        let mut parameters = Vec::new();
        let mut cursor = params.walk();
        for child in params.named_children(&mut cursor) {
            match child.kind() {
                "identifier" | "rest_pattern" | "object_pattern" | "array_pattern" => {
                    parameters.push(self.base.get_node_text(&child));
                }
                "assignment_pattern" => {
                    let name = child
                        .child_by_field_name("left")
                        .map(|left| self.base.get_node_text(&left))
                        .unwrap_or_else(|| self.base.get_node_text(&child));
                    parameters.push(name);
                }
                _ => {}
            }
        }
        parameters
    }

    /// `name(p1, p2)`
    pub(super) fn build_signature(&self, name: &str, function: &Node) -> String {
        format!("{}({})", name, self.extract_parameters(function).join(", "))
    }
}
