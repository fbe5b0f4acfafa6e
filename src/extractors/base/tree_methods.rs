// Tree navigation methods for BaseExtractor
//
// Extracted from extractor.rs to keep the text-access code separate

use super::extractor::BaseExtractor;
use tree_sitter::Node;

impl BaseExtractor {
    /// Walk tree in pre-order (document order) with visitor
    pub fn walk_tree<F>(&self, node: &Node, visitor: &mut F, depth: u32)
    where
        F: FnMut(&Node, u32),
    {
        preorder(node, |current, level| {
            visitor(&current, depth + level);
            true
        });
    }

    /// Find named nodes matching any of the given types, in document order
    pub fn find_nodes_by_types<'a>(&self, node: &Node<'a>, types: &[&str]) -> Vec<Node<'a>> {
        let mut nodes = Vec::new();
        preorder(node, |current, _| {
            if current.is_named() && types.contains(&current.kind()) {
                nodes.push(current);
            }
            true
        });
        nodes
    }

    /// First named node of any of the given types in pre-order
    pub fn find_first_by_types<'a>(&self, node: &Node<'a>, types: &[&str]) -> Option<Node<'a>> {
        let mut found = None;
        preorder(node, |current, _| {
            if current.is_named() && types.contains(&current.kind()) {
                found = Some(current);
            }
            found.is_none()
        });
        found
    }

    /// Check whether a node has an anonymous child of the given kind
    pub fn has_child_kind(&self, node: &Node, kind: &str) -> bool {
        let mut cursor = node.walk();
        let found = node.children(&mut cursor).any(|c| c.kind() == kind);
        found
    }

    /// Find first child by type
    pub fn find_child_by_type<'a>(&self, node: &Node<'a>, child_type: &str) -> Option<Node<'a>> {
        self.find_child_by_types(node, &[child_type])
    }

    /// Find child by multiple types
    pub fn find_child_by_types<'a>(&self, node: &Node<'a>, types: &[&str]) -> Option<Node<'a>> {
        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                if types.contains(&child.kind()) {
                    return Some(child);
                }
            }
        }
        None
    }

    /// Get field text safely
    pub fn get_field_text(&self, node: &Node, field_name: &str) -> Option<String> {
        node.child_by_field_name(field_name)
            .map(|field_node| self.get_node_text(&field_node))
    }
}

/// Pre-order traversal of the subtree rooted at `node` on a single
/// `TreeCursor`, so nesting depth never grows the call stack.
/// `visit` gets each node with its depth below `node` and returns `false`
/// to stop the walk.
fn preorder<'a, F>(node: &Node<'a>, mut visit: F)
where
    F: FnMut(Node<'a>, u32) -> bool,
{
    let mut cursor = node.walk();
    let mut depth = 0u32;
    loop {
        if !visit(cursor.node(), depth) {
            return;
        }
        if cursor.goto_first_child() {
            depth += 1;
            continue;
        }
        loop {
            if depth == 0 {
                return;
            }
            if cursor.goto_next_sibling() {
                break;
            }
            cursor.goto_parent();
            depth -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::ExtractConfig;
    use crate::language::javascript_parser;

    #[test]
    fn finds_named_nodes_in_document_order() {
        let code = "class A { static b() {} c() {} }";
        let tree = javascript_parser().unwrap().parse(code, None).unwrap();
        let base = BaseExtractor::new("t.js".into(), code.into(), ExtractConfig::default());
        let root = tree.root_node();

        let methods = base.find_nodes_by_types(&root, &["method_definition"]);
        let names: Vec<_> = methods
            .iter()
            .filter_map(|m| base.get_field_text(m, "name"))
            .collect();
        assert_eq!(names, vec!["b", "c"]);
        assert!(base.has_child_kind(&methods[0], "static"));
        assert!(!base.has_child_kind(&methods[1], "static"));

        // the `class` keyword token is anonymous and never matches
        let class = base.find_first_by_types(&root, &["class"]);
        assert!(class.is_none());
        assert!(base.find_first_by_types(&root, &["class_declaration"]).is_some());
    }

    #[test]
    fn walk_reports_depth_and_stays_inside_the_start_node() {
        let code = "a(); class A { b() {} } c();";
        let tree = javascript_parser().unwrap().parse(code, None).unwrap();
        let base = BaseExtractor::new("t.js".into(), code.into(), ExtractConfig::default());
        let class = base
            .find_first_by_types(&tree.root_node(), &["class_declaration"])
            .unwrap();

        let mut visited = Vec::new();
        base.walk_tree(
            &class,
            &mut |node, depth| {
                if node.is_named() {
                    visited.push((node.kind().to_string(), depth));
                }
            },
            1,
        );
        assert_eq!(visited[0], ("class_declaration".to_string(), 1));
        assert!(visited.contains(&("class_body".to_string(), 2)));
        assert!(visited.contains(&("method_definition".to_string(), 3)));
        assert!(!visited.iter().any(|(kind, _)| kind == "call_expression"));
    }

    #[test]
    fn walks_handle_deep_nesting() {
        let depth = 20_000;
        let code = format!("x = {}1{};", "[".repeat(depth), "]".repeat(depth));
        let tree = javascript_parser().unwrap().parse(&code, None).unwrap();
        let base = BaseExtractor::new("t.js".into(), code.clone(), ExtractConfig::default());
        let root = tree.root_node();

        let arrays = base.find_nodes_by_types(&root, &["array"]);
        assert_eq!(arrays.len(), depth);
        let number = base.find_first_by_types(&root, &["number"]).unwrap();
        assert_eq!(base.get_node_text(&number), "1");

        let mut deepest = 0;
        base.walk_tree(&root, &mut |_, d| deepest = deepest.max(d), 0);
        assert!(deepest as usize > depth);
    }
}
