//! Crawler module for the random walk
//!
//! This module contains the walking logic, including:
//! - HTTP fetching behind the [`PageFetcher`] seam
//! - HTML link scanning and frontier extraction
//! - Random pauses between visits
//! - The traversal engine driving the walk

mod engine;
mod extractor;
mod fetcher;
mod parser;
mod random;
mod rate_limiter;

pub use engine::{CrawlState, RunLimits, StepResult, TraversalEngine, WalkOutcome, WalkReport};
pub use extractor::{extract_urls, Frontier};
pub use fetcher::{build_http_client, fetch_page, FetchFailure, HttpFetcher, PageFetcher};
pub use parser::scan_links;
pub use random::{pick_index, OsRandom, RandomSource, SequenceRandom};
pub use rate_limiter::RateLimiter;

use crate::config::TraversalPolicy;
use crate::url::UrlValidator;
use crate::WalkerError;

/// Runs the random walk over the real network
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the URL validator
/// 2. Build the HTTP fetcher with the configured user agents
/// 3. Walk from random roots until `limits` is reached
///
/// # Arguments
///
/// * `policy` - The traversal policy
/// * `limits` - Bounds on the outer loop ([`RunLimits::unbounded`] runs forever)
///
/// # Returns
///
/// * `Ok(())` - A run limit was reached
/// * `Err(WalkerError)` - Setup failed or no root URLs are configured
pub async fn crawl(policy: TraversalPolicy, limits: RunLimits) -> Result<(), WalkerError> {
    let validator = UrlValidator::new()?;
    let fetcher = HttpFetcher::new(policy.user_agents.clone())?;

    let mut engine = TraversalEngine::new(policy, validator, fetcher, OsRandom);
    engine.run(limits).await
}
