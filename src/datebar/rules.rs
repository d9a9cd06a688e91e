//! DateRule - label plus a deterministic offset back from "today"

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// How far back a rule reaches
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "unit", content = "amount", rename_all = "lowercase")]
pub enum DateOffset {
    Days(u64),
    /// Calendar months; the day clamps to the end of a shorter month
    Months(u32),
}

impl DateOffset {
    /// Start of the window ending on `now`. Saturates at `NaiveDate::MIN`.
    pub fn apply(&self, now: NaiveDate) -> NaiveDate {
        let min = match self {
            DateOffset::Days(n) => now.checked_sub_days(Days::new(*n)),
            DateOffset::Months(n) => now.checked_sub_months(Months::new(*n)),
        };
        min.unwrap_or(NaiveDate::MIN)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DateRule {
    pub label: String,
    pub offset: DateOffset,
}

impl DateRule {
    pub fn new(label: &str, offset: DateOffset) -> Self {
        Self {
            label: label.to_string(),
            offset,
        }
    }

    /// Earliest date of this rule's window
    pub fn min_date(&self, now: NaiveDate) -> NaiveDate {
        self.offset.apply(now)
    }
}

/// The eight built-in rules, in bar order
pub fn default_rules() -> Vec<DateRule> {
    use DateOffset::*;
    vec![
        DateRule::new("Past 1 day", Days(1)),
        DateRule::new("Past 1 week", Days(7)),
        DateRule::new("Past 2 weeks", Days(14)),
        DateRule::new("Past 1 mth", Months(1)),
        DateRule::new("Past 3 mths", Months(3)),
        DateRule::new("Past 6 mths", Months(6)),
        DateRule::new("Past 1 year", Months(12)),
        DateRule::new("Past 3 years", Months(36)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_labels() {
        let labels: Vec<String> = default_rules().into_iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                "Past 1 day", "Past 1 week", "Past 2 weeks", "Past 1 mth",
                "Past 3 mths", "Past 6 mths", "Past 1 year", "Past 3 years",
            ]
        );
    }

    #[test]
    fn test_offsets_from_reference_date() {
        let now = date(2026, 3, 10);
        let mins: Vec<NaiveDate> = default_rules().iter().map(|r| r.min_date(now)).collect();
        assert_eq!(
            mins,
            vec![
                date(2026, 3, 9),
                date(2026, 3, 3),
                date(2026, 2, 24),
                date(2026, 2, 10),
                date(2025, 12, 10),
                date(2025, 9, 10),
                date(2025, 3, 10),
                date(2023, 3, 10),
            ]
        );
    }

    #[test]
    fn test_offset_is_deterministic() {
        let now = date(2026, 10, 16);
        let week = &default_rules()[1];
        assert_eq!(week.min_date(now), week.min_date(now));
    }

    #[test]
    fn test_month_end_clamps() {
        assert_eq!(DateOffset::Months(1).apply(date(2026, 3, 31)), date(2026, 2, 28));
        assert_eq!(DateOffset::Months(12).apply(date(2024, 2, 29)), date(2023, 2, 28));
    }

    #[test]
    fn test_offsets_distinct_for_same_day() {
        let now = date(2026, 1, 1);
        let mut mins: Vec<NaiveDate> = default_rules().iter().map(|r| r.min_date(now)).collect();
        mins.dedup();
        assert_eq!(mins.len(), 8);
    }

    #[test]
    fn test_rule_serde_shape() {
        let json = serde_json::to_string(&DateRule::new("Past 1 week", DateOffset::Days(7))).unwrap();
        assert_eq!(json, r#"{"label":"Past 1 week","offset":{"unit":"days","amount":7}}"#);
    }
}
