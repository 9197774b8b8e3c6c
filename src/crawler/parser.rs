//! HTML link scanner
//!
//! Collects the raw `href` value of every element that has one. No
//! resolution or filtering happens here; see the extractor for that.

use scraper::{Html, Selector};

/// Returns every `href` attribute value found in `html`, in document order
///
/// # Example
///
/// ```
/// use noisy_walker::crawler::scan_links;
///
/// let html = r#"<html><body><a href="/page">Link</a></body></html>"#;
/// assert_eq!(scan_links(html), vec!["/page".to_string()]);
/// ```
pub fn scan_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let Ok(selector) = Selector::parse("[href]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
