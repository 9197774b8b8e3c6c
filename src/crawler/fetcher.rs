//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the walker, including:
//! - Building the HTTP client with a request timeout
//! - Rotating user agents across requests
//! - Turning every failure into an absent body
//!
//! A failed fetch is never fatal. The engine only sees `None` and treats the
//! page like one without links.

use crate::crawler::random::{pick_index, OsRandom, RandomSource};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use std::fmt;
use std::time::Duration;

/// Socket timeout applied to every request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Something that can retrieve a page body
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url`, returning `None` if no usable body was obtained
    async fn fetch(&self, url: &str) -> Option<String>;
}

/// Reason a fetch produced no body
#[derive(Debug)]
pub enum FetchFailure {
    /// The request timed out
    Timeout,

    /// The connection could not be established
    Connect(String),

    /// The server answered with a non-success status
    Status(u16),

    /// Any other transport or decoding error
    Other(String),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "request timeout"),
            Self::Connect(e) => write!(f, "connection failed: {}", e),
            Self::Status(code) => write!(f, "HTTP {}", code),
            Self::Other(e) => write!(f, "{}", e),
        }
    }
}

impl From<reqwest::Error> for FetchFailure {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else {
            Self::Other(e.to_string())
        }
    }
}

/// Builds the HTTP client shared by all requests
///
/// Redirects follow reqwest's default policy.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single page body
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `user_agent` - Optional `User-Agent` header value
pub async fn fetch_page(
    client: &Client,
    url: &str,
    user_agent: Option<&str>,
) -> Result<String, FetchFailure> {
    let mut request = client.get(url);
    if let Some(agent) = user_agent {
        request = request.header(USER_AGENT, agent);
    }

    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchFailure::Status(status.as_u16()));
    }

    Ok(response.text().await?)
}

/// [`PageFetcher`] backed by reqwest
pub struct HttpFetcher {
    client: Client,
    user_agents: Vec<String>,
    rng: Box<dyn RandomSource>,
}

impl HttpFetcher {
    /// Creates a fetcher that rotates through `user_agents`
    ///
    /// With an empty list, reqwest's default agent is sent.
    pub fn new(user_agents: Vec<String>) -> Result<Self, reqwest::Error> {
        Self::with_random(user_agents, Box::new(OsRandom))
    }

    /// Same as [`HttpFetcher::new`] with an explicit random source
    pub fn with_random(
        user_agents: Vec<String>,
        rng: Box<dyn RandomSource>,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client()?,
            user_agents,
            rng,
        })
    }

    fn pick_user_agent(&self) -> Option<&str> {
        pick_index(self.rng.as_ref(), self.user_agents.len())
            .map(|index| self.user_agents[index].as_str())
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        match fetch_page(&self.client, url, self.pick_user_agent()).await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::debug!("Cannot get response from {}: {}", url, e);
                None
            }
        }
    }
}
