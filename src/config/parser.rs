use crate::config::types::TraversalPolicy;
use crate::config::validation::sanitize;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a traversal policy from the given path
///
/// The format is chosen by extension: `.toml` files are parsed as TOML,
/// everything else as JSON. Root URLs that are not absolute are dropped with
/// a warning; the rest of the policy is kept as written.
///
/// # Arguments
///
/// * `path` - Path to the configuration file
///
/// # Returns
///
/// * `Ok(TraversalPolicy)` - Successfully loaded policy
/// * `Err(ConfigError)` - Failed to read or parse the file
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use noisy_walker::config::load_config;
///
/// let policy = load_config(Path::new("config.json")).unwrap();
/// println!("Root URLs: {}", policy.root_urls.len());
/// ```
pub fn load_config(path: &Path) -> Result<TraversalPolicy, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_policy(path, &content)
}

/// Loads a policy and hashes the exact bytes it was parsed from
///
/// The file is read once.
pub fn load_config_with_hash(path: &Path) -> Result<(TraversalPolicy, String), ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let policy = parse_policy(path, &content)?;
    Ok((policy, hash_content(&content)))
}

/// Loads a policy, falling back to the zero-valued default on any failure
///
/// A missing file or malformed content is logged and swallowed so that the
/// walker keeps going with defaults. The hash is only present when the file
/// was loaded.
pub fn load_policy_or_default(path: &Path) -> (TraversalPolicy, Option<String>) {
    match load_config_with_hash(path) {
        Ok((policy, hash)) => (policy, Some(hash)),
        Err(e) => {
            tracing::warn!(
                "Could not load configuration from {}: {}. Continuing with defaults",
                path.display(),
                e
            );
            (TraversalPolicy::default(), None)
        }
    }
}

fn parse_policy(path: &Path, content: &str) -> Result<TraversalPolicy, ConfigError> {
    let is_toml = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    let mut policy: TraversalPolicy = if is_toml {
        toml::from_str(content)?
    } else {
        serde_json::from_str(content)?
    };

    sanitize(&mut policy);

    Ok(policy)
}

/// Hex-encoded SHA-256 of the configuration content
fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
