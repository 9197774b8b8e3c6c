//! Traversal engine - the random walk itself
//!
//! A walk goes through these states:
//!
//! ```text
//! PICK_ROOT -> FETCHING_ROOT -> WALKING -> (DEAD_END | DEPTH_EXCEEDED | TIMED_OUT) -> PICK_ROOT
//! ```
//!
//! Each walking step picks a uniformly random frontier member, fetches it,
//! and either adopts the new page's links as the frontier or blacklists the
//! visited link and drops it from the frontier. The outer loop picks a new
//! root after every walk and never stops on its own unless [`RunLimits`]
//! says so.

use crate::config::TraversalPolicy;
use crate::crawler::extractor::{extract_urls, Frontier};
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::random::{pick_index, RandomSource};
use crate::crawler::rate_limiter::RateLimiter;
use crate::url::{AcceptanceFilter, Blacklist, UrlValidator};
use crate::{ConfigError, WalkerError};
use std::fmt;
use std::time::{Duration, Instant};

/// Why a walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    /// The frontier ran out of links
    DeadEnd,

    /// The depth counter went past `max_depth`
    DepthExceeded,

    /// The timeout window elapsed
    TimedOut,
}

impl fmt::Display for WalkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeadEnd => write!(f, "dead end"),
            Self::DepthExceeded => write!(f, "depth exceeded"),
            Self::TimedOut => write!(f, "timed out"),
        }
    }
}

/// Summary of one walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkReport {
    /// Root URL the walk started from
    pub root: String,

    /// Why the walk ended
    pub outcome: WalkOutcome,

    /// Number of frontier links visited (the root fetch is not counted)
    pub visits: u32,
}

/// Result of a single walking step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    /// The given link was visited and the walk goes on
    Visited(String),

    /// The walk is over
    Ended(WalkOutcome),
}

/// Optional bounds on the outer crawl loop
///
/// The default has no bounds: the engine keeps picking roots until the
/// process is stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunLimits {
    /// Stop after this many walks
    pub max_walks: Option<u64>,

    /// Stop once a walk finishes after this much time
    pub max_runtime: Option<Duration>,
}

impl RunLimits {
    /// No bounds at all
    pub fn unbounded() -> Self {
        Self::default()
    }

    fn is_reached(&self, walks: u64, elapsed: Duration) -> bool {
        self.max_walks.is_some_and(|max| walks >= max)
            || self.max_runtime.is_some_and(|max| elapsed >= max)
    }
}

/// Mutable state of the walk
#[derive(Debug, Default)]
pub struct CrawlState {
    /// Set on the first root pick, never reset afterwards
    pub start_time: Option<Instant>,

    /// Hops taken in the current walk
    pub depth: u32,

    /// Candidate links for the next hop
    pub frontier: Frontier,
}

/// Drives the random walk
///
/// The engine exclusively owns the crawl state and the blacklist; every
/// mutation goes through `&mut self`.
pub struct TraversalEngine<F, R> {
    policy: TraversalPolicy,
    fetcher: F,
    rng: R,
    filter: AcceptanceFilter,
    rate_limiter: RateLimiter,
    timeout_window: Duration,
    state: CrawlState,
}

impl<F: PageFetcher, R: RandomSource> TraversalEngine<F, R> {
    /// Creates a new engine
    ///
    /// # Arguments
    ///
    /// * `policy` - The traversal policy
    /// * `validator` - URL validator used by the acceptance filter
    /// * `fetcher` - Transport used for every page
    /// * `rng` - Source of every random choice
    pub fn new(policy: TraversalPolicy, validator: UrlValidator, fetcher: F, rng: R) -> Self {
        let filter = AcceptanceFilter::new(
            validator,
            Blacklist::new(policy.blacklisted_urls.clone()),
        );
        let rate_limiter = RateLimiter::from_policy(&policy);
        let timeout_window = Duration::from_secs(policy.timeout_secs);

        Self {
            policy,
            fetcher,
            rng,
            filter,
            rate_limiter,
            timeout_window,
            state: CrawlState::default(),
        }
    }

    pub fn policy(&self) -> &TraversalPolicy {
        &self.policy
    }

    pub fn state(&self) -> &CrawlState {
        &self.state
    }

    /// Configured entries plus every dead link found so far
    pub fn blacklist(&self) -> &Blacklist {
        self.filter.blacklist()
    }

    /// Runs walks back to back until `limits` is reached
    ///
    /// With [`RunLimits::unbounded`] this only returns on error.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - A run limit was reached
    /// * `Err(WalkerError)` - No root URLs are configured, or a walk hit a
    ///   logic fault
    pub async fn run(&mut self, limits: RunLimits) -> Result<(), WalkerError> {
        let run_start = Instant::now();
        let mut walks: u64 = 0;

        loop {
            let report = self.walk_from_random_root().await?;
            walks += 1;

            tracing::info!(
                "Walk from {} ended after {} visits: {}",
                report.root,
                report.visits,
                report.outcome
            );

            if limits.is_reached(walks, run_start.elapsed()) {
                tracing::info!(
                    "Run limit reached after {} walks in {:?}, {} dead links recorded",
                    walks,
                    run_start.elapsed(),
                    self.blacklist().dead_link_count()
                );
                return Ok(());
            }
        }
    }

    /// Picks a root, builds the initial frontier, and walks until the walk ends
    pub async fn walk_from_random_root(&mut self) -> Result<WalkReport, WalkerError> {
        let root = self.pick_root()?;
        tracing::info!("Picked root URL {}", root);

        let body = self.fetcher.fetch(&root).await;
        self.state.frontier = extract_urls(body.as_deref(), &root, &self.filter);
        tracing::info!("Found {} links", self.state.frontier.len());

        let (outcome, visits) = self.walk().await?;

        Ok(WalkReport {
            root,
            outcome,
            visits,
        })
    }

    /// Chooses a root URL uniformly at random
    ///
    /// Starts the timeout clock on the first call only, and resets the depth.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The chosen root
    /// * `Err(WalkerError)` - `root_urls` is empty
    pub fn pick_root(&mut self) -> Result<String, WalkerError> {
        let index =
            pick_index(&self.rng, self.policy.root_urls.len()).ok_or(ConfigError::NoRootUrls)?;
        let root = self.policy.root_urls[index].clone();

        self.state.start_time.get_or_insert_with(Instant::now);
        self.state.depth = 0;

        Ok(root)
    }

    /// Steps through the current frontier until the walk ends
    ///
    /// Returns the outcome and the number of links visited.
    pub async fn walk(&mut self) -> Result<(WalkOutcome, u32), WalkerError> {
        let mut visits = 0;

        loop {
            match self.step().await? {
                StepResult::Visited(_) => visits += 1,
                StepResult::Ended(outcome) => return Ok((outcome, visits)),
            }
        }
    }

    /// Performs one walking step
    ///
    /// # Step Order
    ///
    /// 1. Empty frontier -> dead end
    /// 2. Depth past `max_depth` -> depth exceeded
    /// 3. Timeout window elapsed (if enabled) -> timed out
    /// 4. Visit a random frontier link, extract its links, sleep
    /// 5. More than one link -> the links become the frontier; otherwise the
    ///    visited link is blacklisted and removed from the frontier
    /// 6. Depth + 1
    pub async fn step(&mut self) -> Result<StepResult, WalkerError> {
        if let Some(outcome) = self.check_walk_end() {
            match outcome {
                WalkOutcome::DeadEnd => {
                    tracing::info!("Hit a dead end, moving to the next root URL")
                }
                WalkOutcome::DepthExceeded => {
                    tracing::info!("Hit the depth limit, moving to the next root URL")
                }
                WalkOutcome::TimedOut => {
                    tracing::info!("Timeout has exceeded, moving to the next root URL")
                }
            }
            return Ok(StepResult::Ended(outcome));
        }

        let link = self
            .choose_random_link()
            .ok_or(WalkerError::EmptyFrontier)?;
        tracing::info!("Visiting {}", link);

        let body = self.fetcher.fetch(&link).await;
        let sub_links = extract_urls(body.as_deref(), &link, &self.filter);

        self.rate_limiter.wait(&self.rng).await;

        self.apply_visit(&link, sub_links);
        self.state.depth += 1;

        Ok(StepResult::Visited(link))
    }

    fn check_walk_end(&self) -> Option<WalkOutcome> {
        if self.state.frontier.is_empty() {
            return Some(WalkOutcome::DeadEnd);
        }

        if self.state.depth > self.policy.max_depth {
            return Some(WalkOutcome::DepthExceeded);
        }

        if self.is_timeout_reached() {
            return Some(WalkOutcome::TimedOut);
        }

        None
    }

    fn is_timeout_reached(&self) -> bool {
        if !self.policy.timeout {
            return false;
        }

        self.state
            .start_time
            .is_some_and(|start| start.elapsed() > self.timeout_window)
    }

    /// Draws index i uniformly and returns the i-th frontier member
    fn choose_random_link(&self) -> Option<String> {
        let index = pick_index(&self.rng, self.state.frontier.len())?;
        self.state.frontier.iter().nth(index).cloned()
    }

    fn apply_visit(&mut self, link: &str, sub_links: Frontier) {
        if sub_links.len() > 1 {
            self.state.frontier = sub_links;
        } else {
            self.filter.blacklist_link(link);
            self.state.frontier.remove(link);
        }
    }
}
