//! PageLens: Keyword Highlighter + Search Date-Range Bar
//!
//! A Rust/WASM implementation of two independent page content scripts.
//!
//! # Architecture
//!
//! ## Highlighter Components
//! - `groups.rs` - KeywordGroupTable: built-in color/keyword groups + config
//! - `collector.rs` - TextNodeCollector: eligible text leaves in document order
//! - `matcher.rs` - MatchScanner: whole-word, case-insensitive matching + counts
//! - `rewriter.rs` - SpanRewriter: replaces matched leaves with highlight marks
//! - `diagnostics.rs` - DiagnosticsReporter: per-group console summary
//! - `highlighter.rs` - KeywordHighlighter: one pass over all groups
//!
//! ## Date Bar Components
//! - `rules.rs` - DateRule: the eight date windows
//! - `url.rs` - UrlRewriter: `tbs` date-range encode/strip/parse
//! - `bar.rs` - DateBar + ActiveStateMatcher
//! - `render.rs` - BarRenderer over a `BarSurface`
//!
//! ## Document Access
//! - `dom/` - `DocumentTree` capability trait, in-memory arena, `web_sys` adapter
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { installDateBar, installHighlighter } from 'pagelens';
//!
//! await init();
//!
//! // Search pages only; mounts the bar and marks the active range
//! installDateBar();
//!
//! // Every page except excluded hosts; runs after the load event
//! installHighlighter();
//! ```

pub mod activation;
pub mod datebar;
pub mod dom;
pub mod highlight;
pub mod logging;

// Public exports - Highlighter
pub use highlight::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("pagelens v{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(target_arch = "wasm32")]
fn current_href() -> Result<String, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .location()
        .href()
}

/// Mount the date-range bar if the current page is a search page
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = installDateBar)]
pub fn install_date_bar() -> Result<(), JsValue> {
    if !activation::date_bar_enabled(&current_href()?) {
        return Ok(());
    }
    datebar::web::install(datebar::DateBarConfig::default()).map_err(|e| {
        logging::error(&format!("[DateBar] Install failed: {}", e));
        JsValue::from_str(&e)
    })
}

/// Run the highlighter once the page has loaded, unless the host is excluded
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = installHighlighter)]
pub fn install_highlighter() -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;

    let highlighter = KeywordHighlighter::default();
    if !highlighter.is_enabled_for(&current_href()?) {
        return Ok(());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let loaded = window
        .document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false);
    if loaded {
        return highlighter.js_highlight_document().map(|_| ());
    }

    let onload = Closure::once(move || {
        if highlighter.js_highlight_document().is_err() {
            logging::error("[KeywordHighlighter] Highlight on load failed");
        }
    });
    window.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())?;
    onload.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string() {
        assert!(version().starts_with("pagelens v"));
    }
}
