//! Configuration module for Noisy-Walker
//!
//! This module handles loading, parsing, and validating the traversal policy.
//! JSON is the native format; files ending in `.toml` are parsed as TOML.
//!
//! # Example
//!
//! ```no_run
//! use noisy_walker::config::load_config;
//! use std::path::Path;
//!
//! let policy = load_config(Path::new("config.json")).unwrap();
//! println!("Walks will stop after depth: {}", policy.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{TraversalPolicy, DEFAULT_TIMEOUT_SECS};

// Re-export parser functions
pub use parser::{load_config, load_config_with_hash, load_policy_or_default};
