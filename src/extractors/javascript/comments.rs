//! Comment index with consume-once association
//!
//! Block comments are collected from the tree in document order. A class
//! looks up its nearest preceding comment without consuming it; a member
//! claims its nearest preceding unclaimed JSDoc comment, after which no other
//! member can see that comment.

use crate::extractors::base::BaseExtractor;
use tree_sitter::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Block,
    Line,
}

/// One comment with its byte span. `text` is the comment body without the
/// `/*` `*/` delimiters, so JSDoc bodies start with `*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    pub kind: CommentKind,
    pub text: String,
    pub start_offset: usize,
    pub end_offset: usize,
}

impl CommentBlock {
    /// Build from raw comment source (`/* ... */` or `// ...`)
    pub fn from_source(source: &str, start_offset: usize, end_offset: usize) -> Self {
        match source.strip_prefix("/*") {
            Some(body) => Self {
                kind: CommentKind::Block,
                text: body.strip_suffix("*/").unwrap_or(body).to_string(),
                start_offset,
                end_offset,
            },
            None => Self {
                kind: CommentKind::Line,
                text: source.trim_start_matches('/').to_string(),
                start_offset,
                end_offset,
            },
        }
    }

    /// JSDoc-style comments continue with an asterisk after `/*`
    pub fn is_doc_comment(&self) -> bool {
        self.kind == CommentKind::Block && self.text.trim().starts_with('*')
    }
}

/// Ordered block comments plus a claimed flag per comment
#[derive(Debug, Default)]
pub struct CommentIndex {
    comments: Vec<CommentBlock>,
    claimed: Vec<bool>,
}

impl CommentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every block comment under `root`
    pub fn from_tree(base: &BaseExtractor, root: &Node) -> Self {
        let mut index = Self::new();
        base.walk_tree(
            root,
            &mut |node, _depth| {
                if node.kind() == "comment" {
                    let text = base.get_node_text(node);
                    index.push(CommentBlock::from_source(
                        &text,
                        node.start_byte(),
                        node.end_byte(),
                    ));
                }
            },
            0,
        );
        index
    }

    /// Add a comment; line comments never carry tags and are not indexed
    pub fn push(&mut self, comment: CommentBlock) {
        if comment.kind == CommentKind::Block {
            self.comments.push(comment);
            self.claimed.push(false);
        }
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn unclaimed_count(&self) -> usize {
        self.claimed.iter().filter(|c| !**c).count()
    }

    /// Nearest comment ending at or before `offset`, claimed or not.
    /// Ties go to the comment seen last.
    pub fn nearest_before(&self, offset: usize) -> Option<&CommentBlock> {
        let mut best: Option<&CommentBlock> = None;
        for comment in self.comments.iter().filter(|c| c.end_offset <= offset) {
            if best.map_or(true, |b| comment.end_offset >= b.end_offset) {
                best = Some(comment);
            }
        }
        best
    }

    /// Claim the nearest unclaimed JSDoc comment ending strictly before
    /// `offset`. Ties go to the comment seen last.
    pub fn claim_doc_before(&mut self, offset: usize) -> Option<CommentBlock> {
        let mut best: Option<usize> = None;
        for (idx, comment) in self.comments.iter().enumerate() {
            if self.claimed[idx] || comment.end_offset >= offset || !comment.is_doc_comment() {
                continue;
            }
            if best.map_or(true, |b| comment.end_offset >= self.comments[b].end_offset) {
                best = Some(idx);
            }
        }

        let idx = best?;
        self.claimed[idx] = true;
        Some(self.comments[idx].clone())
    }
}
