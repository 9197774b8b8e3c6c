use regex::Regex;

/// Pattern an absolute URL must contain somewhere to be accepted
pub const URL_PATTERN: &str =
    r"(https?|ftp|file)://[-A-Za-z0-9+&@#/%?=~_|!:,.;]+[-A-Za-z0-9+&@#/%=~_|]";

/// Syntactic acceptance test for absolute URLs
///
/// Built once at startup and handed to whatever needs it. The match is an
/// unanchored search, so a string that merely contains a URL-shaped run is
/// accepted too.
#[derive(Debug, Clone)]
pub struct UrlValidator {
    regex: Regex,
}

impl UrlValidator {
    /// Builds a validator using [`URL_PATTERN`]
    pub fn new() -> Result<Self, regex::Error> {
        Self::with_pattern(URL_PATTERN)
    }

    /// Builds a validator around an alternate pattern
    pub fn with_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Returns true if `candidate` contains an absolute URL
    pub fn is_valid(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}
