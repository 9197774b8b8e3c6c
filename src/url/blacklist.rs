use std::collections::HashSet;

/// Substring blacklist made of two parts
///
/// The denylist comes from configuration and never changes. Dead links are
/// added while walking and live only as long as this value. A URL is
/// blacklisted when it contains an entry from either part.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    denylist: Vec<String>,
    dead_links: HashSet<String>,
}

impl Blacklist {
    /// Creates a blacklist seeded with the configured entries
    pub fn new(denylist: Vec<String>) -> Self {
        Self {
            denylist,
            dead_links: HashSet::new(),
        }
    }

    /// Returns true if `url` contains any entry as a substring
    pub fn contains_match(&self, url: &str) -> bool {
        self.denylist
            .iter()
            .chain(self.dead_links.iter())
            .any(|entry| url.contains(entry.as_str()))
    }

    /// Records a link that led nowhere
    ///
    /// Returns false if it was already recorded.
    pub fn add_dead_link(&mut self, url: impl Into<String>) -> bool {
        self.dead_links.insert(url.into())
    }

    /// Returns true if `url` was recorded as a dead link
    pub fn is_dead_link(&self, url: &str) -> bool {
        self.dead_links.contains(url)
    }

    /// The configured entries
    pub fn denylist(&self) -> &[String] {
        &self.denylist
    }

    /// Number of dead links recorded this run
    pub fn dead_link_count(&self) -> usize {
        self.dead_links.len()
    }
}
