//! DateBar - the button controls and which one is active
//!
//! At most one control is active. Setting a control active clears every
//! other control first.

use chrono::NaiveDate;

use super::rules::DateRule;
use super::url::{parse_date_range, rewrite_url, DateRange};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonControl {
    pub rule: DateRule,
    pub active: bool,
}

#[derive(Clone, Debug, Default)]
pub struct DateBar {
    controls: Vec<ButtonControl>,
}

impl DateBar {
    pub fn new(rules: Vec<DateRule>) -> Self {
        Self {
            controls: rules
                .into_iter()
                .map(|rule| ButtonControl { rule, active: false })
                .collect(),
        }
    }

    pub fn controls(&self) -> &[ButtonControl] {
        &self.controls
    }

    pub fn active_index(&self) -> Option<usize> {
        self.controls.iter().position(|c| c.active)
    }

    pub fn clear_active(&mut self) {
        for control in &mut self.controls {
            control.active = false;
        }
    }

    /// Mark `index` active and every other control inactive
    pub fn set_active(&mut self, index: usize) {
        self.clear_active();
        if let Some(control) = self.controls.get_mut(index) {
            control.active = true;
        }
    }

    /// Handle a click on `index`: mark it active and return the URL to
    /// navigate to. `None` for an unknown index.
    pub fn click(&mut self, index: usize, current_url: &str, now: NaiveDate) -> Option<String> {
        let target = rewrite_url(current_url, &self.controls.get(index)?.rule, now);
        self.set_active(index);
        Some(target)
    }
}

/// Re-derives which rule produced the current URL's date range
pub struct ActiveStateMatcher;

impl ActiveStateMatcher {
    /// Index of the rule whose window on `now` formats exactly like the
    /// range in `url`
    pub fn find(rules: &[DateRule], url: &str, now: NaiveDate) -> Option<usize> {
        let observed = parse_date_range(url)?;
        rules
            .iter()
            .position(|rule| DateRange::for_rule(rule, now) == observed)
    }

    /// Update `bar` from `url`; no control stays active when nothing matches
    pub fn apply(bar: &mut DateBar, url: &str, now: NaiveDate) -> Option<usize> {
        let rules: Vec<DateRule> = bar.controls().iter().map(|c| c.rule.clone()).collect();
        match Self::find(&rules, url, now) {
            Some(index) => {
                bar.set_active(index);
                Some(index)
            }
            None => {
                bar.clear_active();
                None
            }
        }
    }
}
