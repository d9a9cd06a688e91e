//! WebDocument - `web_sys` adapter for the live browser DOM

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

use super::tree::{DocumentTree, MarkStyle, Segment};

fn js_err(context: &str, e: wasm_bindgen::JsValue) -> String {
    format!("{}: {:?}", context, e)
}

/// The host page's document, seen through [`DocumentTree`]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Adapter over `window.document`
    pub fn from_window() -> Result<Self, String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document available".to_string())?;
        Ok(Self::new(document))
    }

    pub fn body(&self) -> Option<Node> {
        self.document.body().map(Into::into)
    }
}

impl DocumentTree for WebDocument {
    type Node = Node;

    fn children(&self, node: &Node) -> Vec<Node> {
        let list = node.child_nodes();
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    fn text(&self, node: &Node) -> Option<String> {
        if node.node_type() == Node::TEXT_NODE {
            node.node_value()
        } else {
            None
        }
    }

    fn tag_name(&self, node: &Node) -> Option<String> {
        node.dyn_ref::<Element>().map(|e| e.tag_name())
    }

    fn has_class(&self, node: &Node, class: &str) -> bool {
        node.dyn_ref::<Element>()
            .map(|e| e.class_list().contains(class))
            .unwrap_or(false)
    }

    fn parent(&self, node: &Node) -> Option<Node> {
        node.parent_node()
    }

    fn replace_with_segments(
        &mut self,
        leaf: &Node,
        segments: &[Segment],
        style: &MarkStyle,
    ) -> Result<(), String> {
        let parent = leaf
            .parent_node()
            .ok_or_else(|| "text leaf is detached".to_string())?;
        let wrapper = self
            .document
            .create_element("span")
            .map_err(|e| js_err("create wrapper", e))?;
        let inline_style = style.inline_style();

        for segment in segments {
            let child: Node = match segment {
                Segment::Plain(text) => self.document.create_text_node(text).into(),
                Segment::Marked(text) => {
                    let mark = self
                        .document
                        .create_element("span")
                        .map_err(|e| js_err("create mark", e))?;
                    mark.set_attribute("class", &style.class)
                        .map_err(|e| js_err("set class", e))?;
                    mark.set_attribute("style", &inline_style)
                        .map_err(|e| js_err("set style", e))?;
                    mark.set_text_content(Some(text));
                    mark.into()
                }
            };
            wrapper
                .append_child(&child)
                .map_err(|e| js_err("append segment", e))?;
        }

        parent
            .replace_child(&wrapper, leaf)
            .map_err(|e| js_err("replace leaf", e))?;
        Ok(())
    }
}
