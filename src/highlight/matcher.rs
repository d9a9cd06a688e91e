//! MatchScanner - whole-word, case-insensitive keyword matching
//!
//! One combined alternation decides whether a leaf is rewritten and where the
//! marks go. Counting uses a separate pattern per keyword, so keywords whose
//! spellings overlap (`goog` / `googl`) are counted independently.
//!
//! Word boundaries are ASCII (`[A-Za-z0-9_]` transitions): `googles` does not
//! contain `google`, `Google.` does.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::groups::KeywordGroup;

/// Occurrences of one keyword
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct KeywordCount {
    /// Lowercased keyword
    pub keyword: String,
    pub count: usize,
}

/// Per-keyword counts for one group's pass, in first-seen keyword order
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchCounts {
    entries: Vec<KeywordCount>,
}

impl MatchCounts {
    fn with_keywords(keywords: &[String]) -> Self {
        let mut counts = Self::default();
        for keyword in keywords {
            counts.slot(&keyword.to_lowercase());
        }
        counts
    }

    fn slot(&mut self, keyword: &str) -> &mut usize {
        let idx = match self.entries.iter().position(|e| e.keyword == keyword) {
            Some(idx) => idx,
            None => {
                self.entries.push(KeywordCount {
                    keyword: keyword.to_string(),
                    count: 0,
                });
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].count
    }

    /// Count for `keyword` (any casing), 0 if unknown
    pub fn get(&self, keyword: &str) -> usize {
        let keyword = keyword.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.keyword == keyword)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    pub fn entries(&self) -> &[KeywordCount] {
        &self.entries
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }
}

/// Whole-word pattern over `alternatives`; each one is escaped first
fn whole_word_pattern(alternatives: &[&str]) -> Result<Regex, String> {
    let body = alternatives
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&format!(r"(?-u:\b)(?:{})(?-u:\b)", body))
        .case_insensitive(true)
        .build()
        .map_err(|e| format!("Invalid keyword pattern: {}", e))
}

/// Compiled matchers for one keyword group
pub struct MatchScanner {
    combined: Regex,
    per_keyword: Vec<(String, Regex)>,
    keywords: Vec<String>,
}

impl MatchScanner {
    pub fn new(group: &KeywordGroup) -> Result<Self, String> {
        let all: Vec<&str> = group.keywords.iter().map(String::as_str).collect();
        let combined = whole_word_pattern(&all)?;
        let per_keyword = group
            .keywords
            .iter()
            .map(|k| Ok((k.to_lowercase(), whole_word_pattern(&[k.as_str()])?)))
            .collect::<Result<Vec<_>, String>>()?;

        Ok(Self {
            combined,
            per_keyword,
            keywords: group.keywords.clone(),
        })
    }

    /// Combined alternation used for rewriting
    pub fn pattern(&self) -> &Regex {
        &self.combined
    }

    /// Whether any keyword of the group occurs in `text`
    pub fn is_match(&self, text: &str) -> bool {
        !self.keywords.is_empty() && self.combined.is_match(text)
    }

    /// Fresh, zeroed count table for this group
    pub fn new_counts(&self) -> MatchCounts {
        MatchCounts::with_keywords(&self.keywords)
    }

    /// Add every keyword's occurrences in `text` to `counts`.
    /// Returns whether any keyword matched.
    pub fn count_into(&self, text: &str, counts: &mut MatchCounts) -> bool {
        for (keyword, re) in &self.per_keyword {
            let n = re.find_iter(text).count();
            if n > 0 {
                *counts.slot(keyword) += n;
            }
        }
        self.is_match(text)
    }
}

// ==================== TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner(keywords: &[&str]) -> MatchScanner {
        MatchScanner::new(&KeywordGroup::new("#fff", keywords)).unwrap()
    }

    #[test]
    fn test_whole_word_only() {
        let s = scanner(&["google"]);
        assert!(!s.is_match("googles are cool"));
        assert!(!s.is_match("xgoogle"));
        assert!(!s.is_match("google_drive"));
        assert!(s.is_match("I like Google."));
        assert!(s.is_match("(google)"));
    }

    #[test]
    fn test_boundary_is_ascii() {
        // Non-ASCII letters are non-word characters for the boundary
        let s = scanner(&["rust"]);
        assert!(s.is_match("éRustë"));
    }

    #[test]
    fn test_counts_case_insensitive() {
        let s = scanner(&["git"]);
        let mut counts = s.new_counts();
        assert!(s.count_into("git git GIT", &mut counts));
        assert_eq!(counts.get("git"), 3);
        assert_eq!(counts.get("GIT"), 3);
    }

    #[test]
    fn test_overlapping_spellings_counted_independently() {
        let s = scanner(&["goog", "googl"]);
        let mut counts = s.new_counts();
        s.count_into("GOOG and GOOGL and googly", &mut counts);
        assert_eq!(counts.get("goog"), 1);
        assert_eq!(counts.get("googl"), 1);
    }

    #[test]
    fn test_special_characters_escaped() {
        let s = scanner(&["c++", "node.js"]);
        assert!(!s.is_match("nodexjs"));
        assert!(s.is_match("built with node.js today"));
        // `+` is a non-word char, so no trailing boundary after "c++ "
        assert!(!s.is_match("c++ rocks"));
    }

    #[test]
    fn test_duplicate_keywords_share_a_counter() {
        let s = scanner(&["amd", "AMD"]);
        let mut counts = s.new_counts();
        s.count_into("amd", &mut counts);
        assert_eq!(counts.entries().len(), 1);
        assert_eq!(counts.get("amd"), 2);
    }

    #[test]
    fn test_counts_keep_keyword_order() {
        let s = scanner(&["spark", "hive", "sql"]);
        let counts = s.new_counts();
        let order: Vec<&str> = counts.entries().iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(order, vec!["spark", "hive", "sql"]);
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_empty_group_never_matches() {
        let s = scanner(&[]);
        assert!(!s.is_match("anything at all"));
    }
}
