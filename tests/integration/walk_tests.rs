//! Integration tests for the random walk
//!
//! These tests use wiremock to create mock HTTP servers and drive the
//! engine end-to-end over real HTTP.

use noisy_walker::config::{load_config, TraversalPolicy};
use noisy_walker::crawler::{HttpFetcher, OsRandom, RunLimits, TraversalEngine, WalkOutcome};
use noisy_walker::url::UrlValidator;
use std::io::Write;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test policy rooted at the given URLs
fn create_test_policy(root_urls: Vec<String>, max_depth: u32) -> TraversalPolicy {
    TraversalPolicy {
        max_depth,
        root_urls,
        ..Default::default()
    }
}

fn create_engine(policy: TraversalPolicy) -> TraversalEngine<HttpFetcher, OsRandom> {
    let fetcher = HttpFetcher::new(policy.user_agents.clone()).expect("Failed to build fetcher");
    TraversalEngine::new(
        policy,
        UrlValidator::new().expect("Failed to build validator"),
        fetcher,
        OsRandom,
    )
}

fn html_page(links: &[&str]) -> String {
    let anchors: String = links
        .iter()
        .map(|link| format!(r#"<a href="{}">link</a>"#, link))
        .collect();
    format!("<html><body>{}</body></html>", anchors)
}

async fn mount_page(server: &MockServer, route: &str, links: &[&str]) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page(links))
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn mount_page_for_agent(server: &MockServer, route: &str, links: &[&str], agent: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("user-agent", agent))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(links)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_walk_reaches_depth_limit() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Every page links to two others, so the walk can never dead-end
    mount_page(&mock_server, "/", &["/page1", "/page2"]).await;
    mount_page(&mock_server, "/page1", &["/page2", "/page3"]).await;
    mount_page(&mock_server, "/page2", &["/page1", "/page3"]).await;
    mount_page(&mock_server, "/page3", &["/page1", "/page2"]).await;

    let policy = create_test_policy(vec![format!("{}/", base_url)], 2);
    let mut engine = create_engine(policy);

    let report = engine
        .walk_from_random_root()
        .await
        .expect("Walk failed");

    assert_eq!(report.outcome, WalkOutcome::DepthExceeded);
    assert_eq!(report.visits, 3);

    let requests = mock_server
        .received_requests()
        .await
        .expect("Request recording disabled");
    assert_eq!(requests.len(), 4);
    assert_eq!(requests[0].url.path(), "/");
    assert_eq!(engine.blacklist().dead_link_count(), 0);
}

#[tokio::test]
async fn test_dead_ends_are_blacklisted() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", &["/leaf1", "/leaf2"]).await;
    mount_page(&mock_server, "/leaf1", &[]).await;
    mount_page(&mock_server, "/leaf2", &["/only-one"]).await;

    let policy = create_test_policy(vec![format!("{}/", base_url)], 10);
    let mut engine = create_engine(policy);

    let report = engine
        .walk_from_random_root()
        .await
        .expect("Walk failed");

    assert_eq!(report.outcome, WalkOutcome::DeadEnd);
    assert_eq!(report.visits, 2);
    assert!(engine.blacklist().is_dead_link(&format!("{}/leaf1", base_url)));
    assert!(engine.blacklist().is_dead_link(&format!("{}/leaf2", base_url)));
    assert!(engine.state().frontier.is_empty());
}

#[tokio::test]
async fn test_unreachable_root_ends_walk() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let policy = create_test_policy(vec![format!("{}/", base_url)], 5);
    let mut engine = create_engine(policy);

    let report = engine
        .walk_from_random_root()
        .await
        .expect("Walk failed");

    assert_eq!(report.outcome, WalkOutcome::DeadEnd);
    assert_eq!(report.visits, 0);
}

#[tokio::test]
async fn test_blacklisted_links_never_requested() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", &["/private/a", "/private/b", "/public"]).await;
    mount_page(&mock_server, "/public", &[]).await;

    let mut policy = create_test_policy(vec![format!("{}/", base_url)], 10);
    policy.blacklisted_urls = vec!["/private".to_string()];
    let mut engine = create_engine(policy);

    engine
        .run(RunLimits {
            max_walks: Some(2),
            max_runtime: None,
        })
        .await
        .expect("Run failed");

    let requests = mock_server
        .received_requests()
        .await
        .expect("Request recording disabled");
    assert!(requests
        .iter()
        .all(|r| !r.url.path().starts_with("/private")));
}

#[tokio::test]
async fn test_run_from_config_file() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Pages are only served to the configured agent; anything else gets a 404
    let agent = "TestBot/1.0";
    mount_page_for_agent(&mock_server, "/", &["/a", "/b"], agent).await;
    mount_page_for_agent(&mock_server, "/a", &["/b", "/c"], agent).await;
    mount_page_for_agent(&mock_server, "/b", &["/a", "/c"], agent).await;
    mount_page_for_agent(&mock_server, "/c", &["/a", "/b"], agent).await;

    let config_content = format!(
        r#"{{
            "max_depth": 1,
            "min_sleep": 1,
            "max_sleep": 5,
            "timeout": true,
            "root_urls": ["{}/"],
            "blacklisted_urls": [],
            "user_agents": ["TestBot/1.0"]
        }}"#,
        base_url
    );
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create config file");
    file.write_all(config_content.as_bytes()).unwrap();
    file.flush().unwrap();

    let policy = load_config(file.path()).expect("Failed to load config");
    let mut engine = create_engine(policy);

    engine
        .run(RunLimits {
            max_walks: Some(2),
            max_runtime: None,
        })
        .await
        .expect("Run failed");

    let requests = mock_server
        .received_requests()
        .await
        .expect("Request recording disabled");
    // Two walks: each fetches the root and visits max_depth + 1 links
    assert_eq!(requests.len(), 6);
    assert_eq!(engine.blacklist().dead_link_count(), 0);
}

#[tokio::test]
async fn test_empty_roots_fail_fast() {
    let mut engine = create_engine(TraversalPolicy::default());

    let result = engine.run(RunLimits::unbounded()).await;
    assert!(result.is_err());
}
