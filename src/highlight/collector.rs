//! TextNodeCollector - snapshot of the text leaves eligible for scanning
//!
//! Pre-order, depth-first walk from a root. A text leaf is skipped when its
//! immediate parent is an excluded tag (script/style/noscript by default) or a
//! highlight element, or when its text is blank. Every call walks the current
//! tree again; nothing is cached between calls.

use crate::dom::DocumentTree;

pub struct TextNodeCollector<'a> {
    excluded_tags: &'a [String],
    mark_class: &'a str,
}

impl<'a> TextNodeCollector<'a> {
    pub fn new(excluded_tags: &'a [String], mark_class: &'a str) -> Self {
        Self {
            excluded_tags,
            mark_class,
        }
    }

    /// Eligible text leaves under `root`, in document order
    pub fn collect<T: DocumentTree>(&self, tree: &T, root: &T::Node) -> Vec<T::Node> {
        let mut leaves = Vec::new();
        let mut stack = vec![root.clone()];

        while let Some(node) = stack.pop() {
            if let Some(text) = tree.text(&node) {
                if self.accepts(tree, &node, &text) {
                    leaves.push(node);
                }
                continue;
            }
            // Reverse so the first child is popped first
            let mut children = tree.children(&node);
            children.reverse();
            stack.extend(children);
        }

        leaves
    }

    fn accepts<T: DocumentTree>(&self, tree: &T, leaf: &T::Node, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        match tree.parent(leaf) {
            Some(parent) => !self.is_excluded_container(tree, &parent),
            None => true,
        }
    }

    fn is_excluded_container<T: DocumentTree>(&self, tree: &T, node: &T::Node) -> bool {
        if tree.has_class(node, self.mark_class) {
            return true;
        }
        tree.tag_name(node)
            .map(|tag| self.excluded_tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)))
            .unwrap_or(false)
    }
}
