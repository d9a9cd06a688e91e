//! DiagnosticsReporter - per-group match summary for the console

use super::matcher::MatchCounts;
use crate::logging;

pub struct DiagnosticsReporter;

impl DiagnosticsReporter {
    /// Lines describing one group's counts
    pub fn lines(color: &str, counts: &MatchCounts) -> Vec<String> {
        let mut lines = vec![format!("Keyword group (color: {}):", color)];
        for entry in counts.entries().iter().filter(|e| e.count > 0) {
            lines.push(format!("  Found keyword \"{}\": {} times", entry.keyword, entry.count));
        }
        if lines.len() == 1 {
            lines.push("  No keywords found on this page.".to_string());
        }
        lines
    }

    pub fn report(color: &str, counts: &MatchCounts) {
        for line in Self::lines(color, counts) {
            logging::info(&line);
        }
    }
}
