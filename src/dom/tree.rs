//! DocumentTree - narrow capability interface over a host document
//!
//! The highlighter only needs to walk the tree, read literal text, inspect an
//! element's tag and classes, and swap one text leaf for a marked-up
//! replacement. Anything that can do those things (the live browser DOM, the
//! in-memory arena used by tests) can be scanned.

// ==================== TYPE DEFINITIONS ====================

/// One run of a rewritten text leaf
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Unmatched text, kept byte-for-byte
    Plain(String),
    /// Matched text in its original casing, wrapped in a highlight element
    Marked(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Marked(text) => text,
        }
    }
}

/// Visual marker applied to every highlight element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkStyle {
    /// CSS background color
    pub color: String,
    /// Class carried by every highlight element; the collector skips text
    /// directly inside an element with this class.
    pub class: String,
}

impl MarkStyle {
    pub fn new(color: &str, class: &str) -> Self {
        Self {
            color: color.to_string(),
            class: class.to_string(),
        }
    }

    /// Inline style for the highlight element
    pub fn inline_style(&self) -> String {
        format!("background:{};border-radius:2px;padding:0 2px;", self.color)
    }
}

// ==================== CAPABILITY TRAIT ====================

/// Operations the scanner is allowed to perform on a document.
///
/// Node handles are cheap to clone and only valid until the node they refer
/// to is replaced.
pub trait DocumentTree {
    type Node: Clone;

    /// Child nodes in document order
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Literal text if `node` is a text leaf, `None` otherwise
    fn text(&self, node: &Self::Node) -> Option<String>;

    /// Tag name if `node` is an element
    fn tag_name(&self, node: &Self::Node) -> Option<String>;

    /// Whether `node` is an element carrying `class`
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Replace the text leaf `leaf` with an inline wrapper holding `segments`,
    /// at the same position under the same parent. `Marked` segments become
    /// highlight elements styled by `style`; `Plain` segments become text.
    fn replace_with_segments(
        &mut self,
        leaf: &Self::Node,
        segments: &[Segment],
        style: &MarkStyle,
    ) -> Result<(), String>;
}

// ==================== TESTS ====================
