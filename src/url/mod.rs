//! URL handling module for Noisy-Walker
//!
//! This module provides URL validation, link normalization, the substring
//! blacklist, and the acceptance filter that combines them.

mod blacklist;
mod normalize;
mod validator;

// Re-export main types and functions
pub use blacklist::Blacklist;
pub use normalize::{normalize_link, strip_whitespace};
pub use validator::{UrlValidator, URL_PATTERN};

/// Decides which links may enter the frontier
///
/// Owns the blacklist so that the engine's dead-link updates and the
/// acceptance checks go through a single owner.
#[derive(Debug, Clone)]
pub struct AcceptanceFilter {
    validator: UrlValidator,
    blacklist: Blacklist,
}

impl AcceptanceFilter {
    /// Creates a filter from a validator and a blacklist
    pub fn new(validator: UrlValidator, blacklist: Blacklist) -> Self {
        Self {
            validator,
            blacklist,
        }
    }

    /// Returns true if `url` may be visited
    ///
    /// A URL is rejected if any of the following holds:
    /// 1. It is empty
    /// 2. The validator rejects it
    /// 3. It contains a blacklist entry as a substring
    ///
    /// # Examples
    ///
    /// ```
    /// use noisy_walker::url::{AcceptanceFilter, Blacklist, UrlValidator};
    ///
    /// let filter = AcceptanceFilter::new(
    ///     UrlValidator::new().unwrap(),
    ///     Blacklist::new(vec!["ads.".to_string()]),
    /// );
    /// assert!(filter.should_accept("http://example.com/"));
    /// assert!(!filter.should_accept("http://ads.example.com/x"));
    /// ```
    pub fn should_accept(&self, url: &str) -> bool {
        if url.is_empty() {
            return false;
        }

        if !self.validator.is_valid(url) {
            return false;
        }

        !self.blacklist.contains_match(url)
    }

    /// Blacklists a link for the rest of the run
    pub fn blacklist_link(&mut self, url: &str) {
        if self.blacklist.add_dead_link(url) {
            tracing::debug!("Blacklisted {}", url);
        }
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }
}
