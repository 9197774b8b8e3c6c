//! Noisy-Walker: a random-walk web wanderer
//!
//! This crate starts from a configured set of root URLs and keeps hopping to a
//! uniformly random outbound link until it hits a depth limit, a timeout, or a
//! dead end. Then it picks a new root and starts over.

pub mod config;
pub mod crawler;
pub mod url;

use thiserror::Error;

/// Main error type for Noisy-Walker operations
#[derive(Debug, Error)]
pub enum WalkerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid URL validator pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Attempted to select a link from an empty frontier")]
    EmptyFrontier,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("No root URLs configured, nothing to crawl")]
    NoRootUrls,
}

/// Result type alias for Noisy-Walker operations
pub type Result<T> = std::result::Result<T, WalkerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::TraversalPolicy;
pub use crawler::{RunLimits, TraversalEngine, WalkOutcome};
pub use crate::url::{normalize_link, UrlValidator};
