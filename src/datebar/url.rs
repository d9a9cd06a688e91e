//! UrlRewriter - encode, strip and parse the `tbs` date-range parameter
//!
//! Wire format: `tbs=cdr:1,cd_min:M/D/YYYY,cd_max:M/D/YYYY`, dates unpadded.

use chrono::{Datelike, NaiveDate};
use url::Url;

use super::rules::DateRule;

pub const DATE_RANGE_KEY: &str = "tbs";
const CUSTOM_RANGE_MARKER: &str = "cdr:1";
const MIN_PREFIX: &str = "cd_min:";
const MAX_PREFIX: &str = "cd_max:";

/// A date window as it appears in the URL
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub min: String,
    pub max: String,
}

impl DateRange {
    pub fn new(min: NaiveDate, max: NaiveDate) -> Self {
        Self {
            min: format_us_date(min),
            max: format_us_date(max),
        }
    }

    /// Window produced by `rule` on `now`
    pub fn for_rule(rule: &DateRule, now: NaiveDate) -> Self {
        Self::new(rule.min_date(now), now)
    }

    /// `tbs=...` query segment
    pub fn to_query_param(&self) -> String {
        format!(
            "{}={},{}{},{}{}",
            DATE_RANGE_KEY, CUSTOM_RANGE_MARKER, MIN_PREFIX, self.min, MAX_PREFIX, self.max
        )
    }
}

/// `M/D/YYYY` without zero padding
pub fn format_us_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Remove every `tbs=` segment from the query, then trailing `?`/`&`
pub fn strip_date_range(url: &str) -> String {
    let stripped = match url.split_once('?') {
        Some((base, query)) => {
            let kept: Vec<&str> = query
                .split('&')
                .filter(|segment| !segment.starts_with("tbs="))
                .collect();
            format!("{}?{}", base, kept.join("&"))
        }
        None => url.to_string(),
    };
    stripped.trim_end_matches(['?', '&']).to_string()
}

/// Strip any existing date range from `url` and append `range`
pub fn append_date_range(url: &str, range: &DateRange) -> String {
    let mut out = strip_date_range(url);
    out.push(if out.contains('?') { '&' } else { '?' });
    out.push_str(&range.to_query_param());
    out
}

/// Target URL for clicking `rule` on `now`
pub fn rewrite_url(url: &str, rule: &DateRule, now: NaiveDate) -> String {
    append_date_range(url, &DateRange::for_rule(rule, now))
}

/// Leading run of digits and `/` after `prefix`
fn date_after<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let start = value.find(prefix)? + prefix.len();
    let rest = &value[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '/'))
        .unwrap_or(rest.len());
    (end > 0).then(|| &rest[..end])
}

/// Date range encoded in `url`, if it has a custom-range `tbs` parameter
pub fn parse_date_range(url: &str) -> Option<DateRange> {
    let parsed = Url::parse(url).ok()?;
    let tbs = parsed
        .query_pairs()
        .find(|(key, _)| key == DATE_RANGE_KEY)
        .map(|(_, value)| value.into_owned())?;
    if !tbs.starts_with(CUSTOM_RANGE_MARKER) {
        return None;
    }
    Some(DateRange {
        min: date_after(&tbs, MIN_PREFIX)?.to_string(),
        max: date_after(&tbs, MAX_PREFIX)?.to_string(),
    })
}
