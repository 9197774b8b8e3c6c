use url::Url;

/// Removes every space, tab, and newline from `s`
pub fn strip_whitespace(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\n'))
        .collect()
}

/// Makes a link found in a page absolute
///
/// # Normalization Steps
///
/// 1. Strip all spaces, tabs, and newlines from the link
/// 2. Parse the base URL; on failure return the cleaned link
/// 3. Resolve the link against the base (RFC 3986 reference resolution);
///    on failure return the cleaned link
/// 4. Strip whitespace from the resolved URL
///
/// Absolute links resolve to themselves, `//host/...` inherits the base
/// scheme, and `/path` inherits the base scheme and host.
///
/// # Examples
///
/// ```
/// use noisy_walker::url::normalize_link;
///
/// let link = normalize_link("/images", "https://imgur.com");
/// assert_eq!(link, "https://imgur.com/images");
/// ```
pub fn normalize_link(link: &str, base_url: &str) -> String {
    let cleaned = strip_whitespace(link);

    let base = match Url::parse(base_url) {
        Ok(base) => base,
        Err(e) => {
            tracing::debug!("Cannot parse base URL {}: {}", base_url, e);
            return cleaned;
        }
    };

    match base.join(&cleaned) {
        Ok(resolved) => strip_whitespace(resolved.as_str()),
        Err(e) => {
            tracing::debug!("Cannot parse URL [{}]: {}", cleaned, e);
            cleaned
        }
    }
}
