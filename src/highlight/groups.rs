//! KeywordGroupTable - the built-in keyword groups and highlighter settings

use serde::{Deserialize, Serialize};

// ==================== TYPE DEFINITIONS ====================

/// A color and the keywords highlighted with it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct KeywordGroup {
    /// CSS color used as highlight background
    pub color: String,
    /// Matched case-insensitively as whole words; duplicates allowed
    pub keywords: Vec<String>,
}

impl KeywordGroup {
    pub fn new(color: &str, keywords: &[&str]) -> Self {
        Self {
            color: color.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Ordered, read-only sequence of keyword groups
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeywordGroupTable {
    groups: Vec<KeywordGroup>,
}

impl KeywordGroupTable {
    pub fn new(groups: Vec<KeywordGroup>) -> Self {
        Self { groups }
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for KeywordGroupTable {
    fn default() -> Self {
        Self::new(vec![
            // Tech companies
            KeywordGroup::new("#b3d4e4", TECH_COMPANIES),
            // AI
            KeywordGroup::new("#b7e1c5", AI_RELATED),
            // Data engineering
            KeywordGroup::new("#ffe0b2", DATA_ENGINEERING),
            // Stock tickers
            KeywordGroup::new("#d1c4e9", STOCK_CODES),
            // Geek
            KeywordGroup::new("#e9c4c4", GEEK_RELATED),
        ])
    }
}

// ==================== DICTIONARIES ====================

const TECH_COMPANIES: &[&str] = &[
    "tencent", "google", "microsoft", "apple", "amazon",
    "meta", "facebook", "alibaba", "bytedance", "amd", "intel",
];

const AI_RELATED: &[&str] = &[
    "openai", "chatgpt", "deepseek", "qwen",
    "llama", "gemini", "copilot", "mcp", "llm", "ollama",
];

const DATA_ENGINEERING: &[&str] = &[
    "hadoop", "hive", "sql", "spark", "python", "flink", "kafka", "airflow",
    "etl", "pandas", "postgresql", "pgsql", "mysql", "postgres",
];

const STOCK_CODES: &[&str] = &[
    "qqq", "intc", "nvda", "aapl", "msft",
    "goog", "googl", "tsla", "baba", "amd", "spy", "soxx",
];

const GEEK_RELATED: &[&str] = &[
    "python", "php", "javascript", "js", "rust",
    "linux", "macos", "windows", "nas", "ubuntu", "debian", "fedora", "centos",
    "android", "chrome", "firefox",
    "docker", "git", "github", "shell", "bash",
    "cpu", "ssd",
];

// ==================== CONFIGURATION ====================

/// Highlighter settings
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HighlighterConfig {
    #[serde(default)]
    pub groups: KeywordGroupTable,
    /// Text directly inside these elements is never scanned
    #[serde(default = "default_excluded_tags")]
    pub excluded_tags: Vec<String>,
    /// Class put on every highlight element
    #[serde(default = "default_mark_class")]
    pub mark_class: String,
    /// Hosts the highlighter never runs on
    #[serde(default = "default_excluded_hosts")]
    pub excluded_hosts: Vec<String>,
}

fn default_excluded_tags() -> Vec<String> {
    vec!["script".into(), "style".into(), "noscript".into()]
}

fn default_mark_class() -> String {
    "pagelens-mark".to_string()
}

fn default_excluded_hosts() -> Vec<String> {
    vec!["www.inoreader.com".into()]
}

impl Default for HighlighterConfig {
    fn default() -> Self {
        Self {
            groups: KeywordGroupTable::default(),
            excluded_tags: default_excluded_tags(),
            mark_class: default_mark_class(),
            excluded_hosts: default_excluded_hosts(),
        }
    }
}

// ==================== TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_order_and_colors() {
        let table = KeywordGroupTable::default();
        let colors: Vec<&str> = table.iter().map(|g| g.color.as_str()).collect();
        assert_eq!(colors, vec!["#b3d4e4", "#b7e1c5", "#ffe0b2", "#d1c4e9", "#e9c4c4"]);
    }

    #[test]
    fn test_python_in_data_and_geek_groups() {
        let table = KeywordGroupTable::default();
        let holders: Vec<&str> = table
            .iter()
            .filter(|g| g.keywords.iter().any(|k| k == "python"))
            .map(|g| g.color.as_str())
            .collect();
        assert_eq!(holders, vec!["#ffe0b2", "#e9c4c4"]);
    }

    #[test]
    fn test_config_defaults_from_empty_json() {
        let config: HighlighterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.groups.len(), 5);
        assert_eq!(config.excluded_tags, vec!["script", "style", "noscript"]);
        assert_eq!(config.mark_class, "pagelens-mark");
        assert_eq!(config.excluded_hosts, vec!["www.inoreader.com"]);
    }

    #[test]
    fn test_config_custom_groups() {
        let json = r#"{"groups": [{"color": "yellow", "keywords": ["serde"]}]}"#;
        let config: HighlighterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.groups.len(), 1);
        assert_eq!(config.groups.iter().next().unwrap().keywords, vec!["serde"]);
    }
}
