use serde::Deserialize;

/// Default width of the timeout window, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Traversal policy for the random walk
///
/// Every field falls back to its zero value when missing, so a partial (or
/// empty) document still yields a usable policy.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TraversalPolicy {
    /// Maximum number of hops in a single walk
    pub max_depth: u32,

    /// Lower bound of the random pause between visits (milliseconds)
    pub min_sleep: u64,

    /// Upper bound of the random pause between visits (milliseconds, 0 disables sleeping)
    pub max_sleep: u64,

    /// Whether walks stop once the timeout window has elapsed
    pub timeout: bool,

    /// Width of the timeout window, measured from the first root pick
    pub timeout_secs: u64,

    /// Starting points, one of which is picked at random for every walk
    pub root_urls: Vec<String>,

    /// Substrings that cause a URL to be rejected
    pub blacklisted_urls: Vec<String>,

    /// User agents rotated across requests
    pub user_agents: Vec<String>,
}

impl Default for TraversalPolicy {
    fn default() -> Self {
        Self {
            max_depth: 0,
            min_sleep: 0,
            max_sleep: 0,
            timeout: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            root_urls: Vec::new(),
            blacklisted_urls: Vec::new(),
            user_agents: Vec::new(),
        }
    }
}
