//! Configuration types and defaults for the date bar

use serde::{Deserialize, Serialize};

use super::rules::{default_rules, DateRule};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateBarConfig {
    /// Element id of the bar; also the double-injection guard. Default: custom-top-navbar
    #[serde(default = "default_bar_id")]
    pub bar_id: String,
    /// Class marking the active control. Default: active-date-btn
    #[serde(default = "default_active_class")]
    pub active_class: String,
    /// Bar height, reserved as body top margin. Default: 48
    #[serde(default = "default_height_px")]
    pub height_px: u32,
    #[serde(default = "default_rules")]
    pub rules: Vec<DateRule>,
}

fn default_bar_id() -> String {
    "custom-top-navbar".to_string()
}

fn default_active_class() -> String {
    "active-date-btn".to_string()
}

fn default_height_px() -> u32 {
    48
}

impl Default for DateBarConfig {
    fn default() -> Self {
        Self {
            bar_id: default_bar_id(),
            active_class: default_active_class(),
            height_px: default_height_px(),
            rules: default_rules(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config: DateBarConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.bar_id, "custom-top-navbar");
        assert_eq!(config.active_class, "active-date-btn");
        assert_eq!(config.height_px, 48);
        assert_eq!(config.rules.len(), 8);
    }
}
