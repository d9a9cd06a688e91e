//! SpanRewriter - swap a matched text leaf for marked-up segments

use regex::Regex;

use crate::dom::{DocumentTree, MarkStyle, Segment};

/// Split `text` into plain and marked runs. `None` when nothing matches.
///
/// Concatenating the returned segments reproduces `text` exactly; marked runs
/// keep the casing found in `text`.
pub fn split_segments(text: &str, pattern: &Regex) -> Option<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in pattern.find_iter(text).filter(|m| !m.is_empty()) {
        if m.start() > last {
            segments.push(Segment::Plain(text[last..m.start()].to_string()));
        }
        segments.push(Segment::Marked(m.as_str().to_string()));
        last = m.end();
    }

    if segments.is_empty() {
        return None;
    }
    if last < text.len() {
        segments.push(Segment::Plain(text[last..].to_string()));
    }
    Some(segments)
}

pub struct SpanRewriter<'a> {
    style: &'a MarkStyle,
}

impl<'a> SpanRewriter<'a> {
    pub fn new(style: &'a MarkStyle) -> Self {
        Self { style }
    }

    /// Rewrite `leaf` if `pattern` matches its text. Returns whether the leaf
    /// was replaced; the handle is stale afterwards.
    pub fn rewrite<T: DocumentTree>(
        &self,
        tree: &mut T,
        leaf: &T::Node,
        text: &str,
        pattern: &Regex,
    ) -> Result<bool, String> {
        match split_segments(text, pattern) {
            Some(segments) => {
                tree.replace_with_segments(leaf, &segments, self.style)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;
    use crate::highlight::{KeywordGroup, MatchScanner};

    fn pattern(keywords: &[&str]) -> Regex {
        MatchScanner::new(&KeywordGroup::new("#fff", keywords))
            .unwrap()
            .pattern()
            .clone()
    }

    #[test]
    fn test_split_preserves_text_and_case() {
        let re = pattern(&["google"]);
        let segments = split_segments("  Ask Google. ", &re).unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Plain("  Ask ".into()),
                Segment::Marked("Google".into()),
                Segment::Plain(". ".into()),
            ]
        );
        let joined: String = segments.iter().map(Segment::text).collect();
        assert_eq!(joined, "  Ask Google. ");
    }

    #[test]
    fn test_split_adjacent_matches() {
        let re = pattern(&["git"]);
        let segments = split_segments("git,GIT", &re).unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Marked("git".into()),
                Segment::Plain(",".into()),
                Segment::Marked("GIT".into()),
            ]
        );
    }

    #[test]
    fn test_split_no_match() {
        let re = pattern(&["google"]);
        assert!(split_segments("googles", &re).is_none());
    }

    #[test]
    fn test_split_multibyte_text() {
        let re = pattern(&["rust"]);
        let segments = split_segments("我爱Rust语言", &re).unwrap();
        let joined: String = segments.iter().map(Segment::text).collect();
        assert_eq!(joined, "我爱Rust语言");
        assert_eq!(segments[1], Segment::Marked("Rust".into()));
    }

    #[test]
    fn test_rewrite_leaves_unmatched_leaf_alone() {
        let mut doc = MemoryDocument::new();
        let leaf = doc.append_text(doc.body(), "nothing here");
        let style = MarkStyle::new("#fff", "mark");
        let replaced = SpanRewriter::new(&style)
            .rewrite(&mut doc, &leaf, "nothing here", &pattern(&["rust"]))
            .unwrap();
        assert!(!replaced);
        assert!(doc.is_attached(leaf));
    }

    #[test]
    fn test_rewrite_replaces_leaf() {
        let mut doc = MemoryDocument::new();
        let leaf = doc.append_text(doc.body(), "a < rust & b");
        let style = MarkStyle::new("#e9c4c4", "mark");
        let replaced = SpanRewriter::new(&style)
            .rewrite(&mut doc, &leaf, "a < rust & b", &pattern(&["rust"]))
            .unwrap();
        assert!(replaced);
        assert!(!doc.is_attached(leaf));
        assert_eq!(doc.text_content(doc.body()), "a < rust & b");
        let runs = doc.marked_runs(doc.body(), "mark");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "rust");
    }
}
