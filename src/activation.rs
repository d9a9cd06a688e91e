//! Origin rules deciding which component runs on a page

use url::Url;

/// Lowercased host of `url`, if it parses and has one
pub fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_ascii_lowercase()))
}

/// `www.google.<tld>` for any country or generic TLD (`com`, `co.uk`, `de`)
pub fn is_search_host(host: &str) -> bool {
    match host.strip_prefix("www.google.") {
        Some(tld) => !tld.is_empty() && tld.split('.').all(|label| !label.is_empty()),
        None => false,
    }
}

/// The date bar runs only on https search-engine pages
pub fn date_bar_enabled(url: &str) -> bool {
    match Url::parse(url) {
        Ok(u) => u.scheme() == "https" && u.host_str().map(is_search_host).unwrap_or(false),
        Err(_) => false,
    }
}

/// The highlighter runs everywhere except the excluded hosts
pub fn highlighter_enabled(url: &str, excluded_hosts: &[String]) -> bool {
    match host_of(url) {
        Some(host) => !excluded_hosts.iter().any(|h| h.eq_ignore_ascii_case(&host)),
        None => true,
    }
}
