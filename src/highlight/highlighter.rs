//! KeywordHighlighter - one highlight pass over a document
//!
//! For each group in table order: collect eligible text leaves from the
//! current tree, count and match every leaf, rewrite the matched ones, then
//! log the group's counts. The collector runs again for every group, so text
//! already wrapped by an earlier group is skipped and the first group to match
//! a run keeps it.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use super::collector::TextNodeCollector;
use super::diagnostics::DiagnosticsReporter;
use super::groups::{HighlighterConfig, KeywordGroup};
use super::matcher::{MatchCounts, MatchScanner};
use super::rewriter::SpanRewriter;
use crate::activation;
use crate::dom::{DocumentTree, MarkStyle};

// ==================== TYPE DEFINITIONS ====================

/// Outcome of one group's pass
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GroupReport {
    pub color: String,
    pub counts: MatchCounts,
    pub leaves_scanned: usize,
    pub leaves_rewritten: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct HighlightStats {
    pub total_us: u64,
    pub groups: usize,
    pub leaves_rewritten: usize,
}

/// Outcome of a full pass
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct HighlightReport {
    pub groups: Vec<GroupReport>,
    pub stats: HighlightStats,
}

// ==================== MAIN IMPLEMENTATION ====================

#[wasm_bindgen]
pub struct KeywordHighlighter {
    config: HighlighterConfig,
}

impl Default for KeywordHighlighter {
    fn default() -> Self {
        Self::with_config(HighlighterConfig::default())
    }
}

#[wasm_bindgen]
impl KeywordHighlighter {
    /// Create a highlighter; `null`/`undefined` selects the built-in groups
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<KeywordHighlighter, JsValue> {
        let config: HighlighterConfig = if config.is_null() || config.is_undefined() {
            HighlighterConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };
        Ok(Self::with_config(config))
    }

    /// Whether the highlighter should run on the page at `url`
    #[wasm_bindgen(js_name = isEnabledFor)]
    pub fn is_enabled_for(&self, url: &str) -> bool {
        activation::highlighter_enabled(url, &self.config.excluded_hosts)
    }

    #[wasm_bindgen(js_name = groupCount)]
    pub fn group_count(&self) -> usize {
        self.config.groups.len()
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl KeywordHighlighter {
    /// Highlight `document.body` and return the pass report. Every failure
    /// is logged before it is returned.
    #[wasm_bindgen(js_name = highlightDocument)]
    pub fn js_highlight_document(&self) -> Result<JsValue, JsValue> {
        self.highlight_window()
            .and_then(|report| {
                serde_wasm_bindgen::to_value(&report)
                    .map_err(|e| format!("Serialization error: {}", e))
            })
            .map_err(|e| {
                crate::logging::error(&format!("[KeywordHighlighter] Pass aborted: {}", e));
                JsValue::from_str(&e)
            })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeywordHighlighter {
    fn highlight_window(&self) -> Result<HighlightReport, String> {
        let mut doc = crate::dom::WebDocument::from_window()?;
        let body = doc.body().ok_or("document has no body")?;
        self.highlight(&mut doc, &body)
    }
}

impl KeywordHighlighter {
    pub fn with_config(config: HighlighterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HighlighterConfig {
        &self.config
    }

    /// Run every group over the tree under `root`
    pub fn highlight<T: DocumentTree>(
        &self,
        tree: &mut T,
        root: &T::Node,
    ) -> Result<HighlightReport, String> {
        let start = instant::Instant::now();
        let mut report = HighlightReport::default();

        for group in self.config.groups.iter() {
            let group_report = self.highlight_group(tree, root, group)?;
            report.stats.leaves_rewritten += group_report.leaves_rewritten;
            report.groups.push(group_report);
        }

        report.stats.groups = report.groups.len();
        report.stats.total_us = start.elapsed().as_micros() as u64;
        Ok(report)
    }

    fn highlight_group<T: DocumentTree>(
        &self,
        tree: &mut T,
        root: &T::Node,
        group: &KeywordGroup,
    ) -> Result<GroupReport, String> {
        let scanner = MatchScanner::new(group)?;
        let style = MarkStyle::new(&group.color, &self.config.mark_class);
        let rewriter = SpanRewriter::new(&style);
        let collector = TextNodeCollector::new(&self.config.excluded_tags, &self.config.mark_class);

        let leaves = collector.collect(tree, root);
        let mut counts = scanner.new_counts();
        let mut rewritten = 0;

        for leaf in &leaves {
            let Some(text) = tree.text(leaf) else {
                continue;
            };
            if scanner.count_into(&text, &mut counts)
                && rewriter.rewrite(tree, leaf, &text, scanner.pattern())?
            {
                rewritten += 1;
            }
        }

        DiagnosticsReporter::report(&group.color, &counts);

        Ok(GroupReport {
            color: group.color.clone(),
            counts,
            leaves_scanned: leaves.len(),
            leaves_rewritten: rewritten,
        })
    }
}

// ==================== TESTS ====================


#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_highlight_live_document() {
        let document = web_sys::window().unwrap().document().unwrap();
        let body = document.body().unwrap();
        let p = document.create_element("p").unwrap();
        p.set_text_content(Some("Shipping Rust to the browser"));
        body.append_child(&p).unwrap();

        let report = KeywordHighlighter::default().js_highlight_document();
        assert!(report.is_ok());
        let mark = p.query_selector(".pagelens-mark").unwrap().unwrap();
        assert_eq!(mark.text_content().unwrap(), "Rust");
        assert_eq!(p.text_content().unwrap(), "Shipping Rust to the browser");

        body.remove_child(&p).unwrap();
    }
}
