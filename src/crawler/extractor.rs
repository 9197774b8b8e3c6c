//! Turns a fetched page into frontier candidates

use crate::crawler::parser::scan_links;
use crate::url::{normalize_link, AcceptanceFilter};
use std::collections::BTreeSet;

/// Set of absolute URLs the walker may visit next
///
/// Ordered so that the i-th element is well defined for a given set.
pub type Frontier = BTreeSet<String>;

/// Gathers the accepted outbound links of a page
///
/// Each raw href is made absolute against `page_url` and kept only if the
/// filter accepts it. Duplicates collapse into one entry. An absent body
/// (failed fetch) yields an empty set.
///
/// # Arguments
///
/// * `body` - The page content, or `None` if the fetch failed
/// * `page_url` - The URL the page was loaded from
/// * `filter` - Acceptance filter for candidate links
pub fn extract_urls(body: Option<&str>, page_url: &str, filter: &AcceptanceFilter) -> Frontier {
    let Some(body) = body else {
        return Frontier::new();
    };

    scan_links(body)
        .iter()
        .map(|link| normalize_link(link, page_url))
        .filter(|link| filter.should_accept(link))
        .collect()
}
