//! MemoryDocument - arena-backed document tree
//!
//! Nodes live in a flat arena and refer to each other by index. Replaced nodes
//! are detached (no parent, not reachable from the body) but keep their slot,
//! so stale handles never alias a different node.

use super::tree::{DocumentTree, MarkStyle, Segment};

/// Handle to a node in a [`MemoryDocument`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
enum NodeKind {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Clone, Debug)]
struct NodeData {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

/// A highlight element found in the tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkedRun {
    pub text: String,
    pub style: String,
}

#[derive(Clone, Debug)]
pub struct MemoryDocument {
    nodes: Vec<NodeData>,
    body: NodeId,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Create a document holding an empty `body` element
    pub fn new() -> Self {
        let body = NodeData {
            parent: None,
            children: Vec::new(),
            kind: NodeKind::Element {
                tag: "body".to_string(),
                attrs: Vec::new(),
            },
        };
        Self {
            nodes: vec![body],
            body: NodeId(0),
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    fn push(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            parent,
            children: Vec::new(),
            kind,
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        self.push(
            Some(parent),
            NodeKind::Element {
                tag: tag.to_string(),
                attrs: Vec::new(),
            },
        )
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push(Some(parent), NodeKind::Text(text.to_string()))
    }

    /// Set an attribute on an element; no-op for text nodes
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let NodeKind::Element { attrs, .. } = &mut self.nodes[node.0].kind {
            match attrs.iter_mut().find(|(n, _)| n == name) {
                Some(slot) => slot.1 = value.to_string(),
                None => attrs.push((name.to_string(), value.to_string())),
            }
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[node.0].kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    /// Whether `node` is still reachable from the body
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut current = node;
        loop {
            if current == self.body {
                return true;
            }
            match self.nodes[current.0].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Concatenated text of every descendant text node, in document order
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        match &self.nodes[node.0].kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element { .. } => {
                for child in &self.nodes[node.0].children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    /// Every element carrying `class` under `node`, in document order
    pub fn marked_runs(&self, node: NodeId, class: &str) -> Vec<MarkedRun> {
        let mut runs = Vec::new();
        self.collect_marked(node, class, &mut runs);
        runs
    }

    fn collect_marked(&self, node: NodeId, class: &str, runs: &mut Vec<MarkedRun>) {
        if self.has_class(&node, class) {
            runs.push(MarkedRun {
                text: self.text_content(node),
                style: self.attribute(node, "style").unwrap_or_default().to_string(),
            });
        }
        for child in &self.nodes[node.0].children {
            self.collect_marked(*child, class, runs);
        }
    }

    /// Serialize `node` as HTML. Text is escaped; attributes keep insertion order.
    pub fn to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        match &self.nodes[node.0].kind {
            NodeKind::Text(text) => out.push_str(&escape_html(text)),
            NodeKind::Element { tag, attrs } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
                }
                out.push('>');
                for child in &self.nodes[node.0].children {
                    self.write_html(*child, out);
                }
                out.push_str(&format!("</{}>", tag));
            }
        }
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl DocumentTree for MemoryDocument {
    type Node = NodeId;

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.nodes[node.0].children.clone()
    }

    fn text(&self, node: &NodeId) -> Option<String> {
        match &self.nodes[node.0].kind {
            NodeKind::Text(text) => Some(text.clone()),
            NodeKind::Element { .. } => None,
        }
    }

    fn tag_name(&self, node: &NodeId) -> Option<String> {
        match &self.nodes[node.0].kind {
            NodeKind::Element { tag, .. } => Some(tag.clone()),
            NodeKind::Text(_) => None,
        }
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.attribute(*node, "class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    fn replace_with_segments(
        &mut self,
        leaf: &NodeId,
        segments: &[Segment],
        style: &MarkStyle,
    ) -> Result<(), String> {
        let parent = self.nodes[leaf.0]
            .parent
            .ok_or_else(|| format!("node {} is detached", leaf.0))?;
        let position = self.nodes[parent.0]
            .children
            .iter()
            .position(|child| child == leaf)
            .ok_or_else(|| format!("node {} missing from its parent", leaf.0))?;

        let wrapper = self.push(
            None,
            NodeKind::Element {
                tag: "span".to_string(),
                attrs: Vec::new(),
            },
        );
        let inline_style = style.inline_style();
        for segment in segments {
            match segment {
                Segment::Plain(text) => {
                    self.append_text(wrapper, text);
                }
                Segment::Marked(text) => {
                    let mark = self.append_element(wrapper, "span");
                    self.set_attribute(mark, "class", &style.class);
                    self.set_attribute(mark, "style", &inline_style);
                    self.append_text(mark, text);
                }
            }
        }

        self.nodes[parent.0].children[position] = wrapper;
        self.nodes[wrapper.0].parent = Some(parent);
        self.nodes[leaf.0].parent = None;
        Ok(())
    }
}

// ==================== TESTS ====================
