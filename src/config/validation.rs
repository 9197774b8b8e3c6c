use crate::config::types::TraversalPolicy;
use url::Url;

/// Cleans up a parsed traversal policy
///
/// Nothing here rejects the policy. Root URLs that are not absolute are
/// dropped one by one; everything else is only reported. An empty root list
/// is left for the engine to report when it tries to pick a root.
pub fn sanitize(policy: &mut TraversalPolicy) {
    check_sleep_bounds(policy);
    drop_invalid_root_urls(&mut policy.root_urls);
    check_blacklist(&policy.blacklisted_urls);
}

/// Reports an inverted min/max sleep pair
fn check_sleep_bounds(policy: &TraversalPolicy) {
    // max_sleep == 0 disables sleeping, so min_sleep is irrelevant then
    if policy.max_sleep > 0 && policy.min_sleep > policy.max_sleep {
        tracing::warn!(
            "min_sleep ({}ms) exceeds max_sleep ({}ms), every pause will last {}ms",
            policy.min_sleep,
            policy.max_sleep,
            policy.max_sleep
        );
    }
}

/// Removes root URLs that do not parse as absolute URLs
fn drop_invalid_root_urls(root_urls: &mut Vec<String>) {
    root_urls.retain(|root| match Url::parse(root) {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Ignoring invalid root URL '{}': {}", root, e);
            false
        }
    });
}

/// Reports blacklist entries that reject every URL
fn check_blacklist(entries: &[String]) {
    if entries.iter().any(|entry| entry.is_empty()) {
        tracing::warn!("blacklisted_urls contains an empty entry, every link will be rejected");
    }
}
