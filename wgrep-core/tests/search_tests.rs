// Tests for search orchestration over a mock site

use wgrep_core::{OutputFormat, SearchOptions, SinkMode, execute_search};
use wgrep_scanner::TraversalConfig;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

async fn mount_page(server: &MockServer, page_path: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string(html),
        )
        .mount(server)
        .await;
}

/// Root matches, /quiet does not, /loud does. /quiet also links onwards.
async fn mock_site() -> MockServer {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body>
            <p>Status: ALERT raised</p>
            <a href="/quiet">quiet</a>
            <a href="/loud">loud</a>
            <a href="/quiet">quiet again</a>
        </body></html>"#
            .to_string(),
    )
    .await;
    mount_page(
        &server,
        "/quiet",
        r#"<html><body><p>all good</p><a href="/deep">deeper</a></body></html>"#.to_string(),
    )
    .await;
    mount_page(
        &server,
        "/loud",
        "<html><body><p>alert: disk full</p></body></html>".to_string(),
    )
    .await;
    mount_page(
        &server,
        "/deep",
        "<html><body><p>alert from below</p></body></html>".to_string(),
    )
    .await;

    server
}

fn options(server: &MockServer, max_depth: usize, mode: SinkMode) -> SearchOptions {
    SearchOptions {
        config: TraversalConfig {
            root_link: format!("{}/", server.uri()),
            url_pattern: ".*".to_string(),
            content_pattern: "alert".to_string(),
            negate: false,
            max_depth,
        },
        timeout_secs: 5,
        mode,
        format: OutputFormat::Text,
        show_progress: false,
    }
}

// ============================================================================
// Aggregate Mode Tests
// ============================================================================

#[tokio::test]
async fn test_aggregate_text_output() {
    let server = mock_site().await;
    let mut out = Vec::new();

    let stats = execute_search(options(&server, 1, SinkMode::Aggregate), &mut out)
        .await
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    let expected = format!(
        "\n== {uri}/ ==\n> Status: ALERT raised\n\n== {uri}/loud ==\n> alert: disk full\n",
        uri = server.uri()
    );
    assert_eq!(text, expected);
    assert_eq!(stats.pages_fetched, 3);
    assert_eq!(stats.results, 2);
}

#[tokio::test]
async fn test_depth_two_reaches_grandchildren() {
    let server = mock_site().await;
    let mut out = Vec::new();

    execute_search(options(&server, 2, SinkMode::Aggregate), &mut out)
        .await
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    let root = text.find(&format!("== {}/ ==", server.uri())).unwrap();
    let deep = text.find(&format!("== {}/deep ==", server.uri())).unwrap();
    let loud = text.find(&format!("== {}/loud ==", server.uri())).unwrap();
    // /deep hangs off /quiet, which precedes /loud on the root page.
    assert!(root < deep && deep < loud);
}

#[tokio::test]
async fn test_negate_lists_non_matching_pages() {
    let server = mock_site().await;
    let mut opts = options(&server, 1, SinkMode::Aggregate);
    opts.config.negate = true;
    let mut out = Vec::new();

    let stats = execute_search(opts, &mut out).await.unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text, format!("\n== {}/quiet ==\n", server.uri()));
    assert_eq!(stats.results, 1);
}

#[tokio::test]
async fn test_aggregate_json_output() {
    let server = mock_site().await;
    let mut opts = options(&server, 1, SinkMode::Aggregate);
    opts.format = OutputFormat::Json;
    let mut out = Vec::new();

    execute_search(opts, &mut out).await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

    let results = value.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[1]["link"], format!("{}/loud", server.uri()));
    assert_eq!(results[1]["matches"][0], "alert: disk full");
}

// ============================================================================
// Streaming Mode Tests
// ============================================================================

#[tokio::test]
async fn test_streaming_text_matches_aggregate() {
    let server = mock_site().await;

    let mut aggregate = Vec::new();
    execute_search(options(&server, 2, SinkMode::Aggregate), &mut aggregate)
        .await
        .unwrap();

    let mut streamed = Vec::new();
    execute_search(options(&server, 2, SinkMode::Streaming), &mut streamed)
        .await
        .unwrap();

    assert_eq!(aggregate, streamed);
}

#[tokio::test]
async fn test_streaming_negate_prints_header_block() {
    let server = mock_site().await;
    let mut opts = options(&server, 1, SinkMode::Streaming);
    opts.config.negate = true;
    let mut out = Vec::new();

    execute_search(opts, &mut out).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("\n== {}/quiet ==\n", server.uri())
    );
}

#[tokio::test]
async fn test_streaming_json_lines() {
    let server = mock_site().await;
    let mut opts = options(&server, 1, SinkMode::Streaming);
    opts.format = OutputFormat::Json;
    let mut out = Vec::new();

    execute_search(opts, &mut out).await.unwrap();
    let text = String::from_utf8(out).unwrap();

    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["link"], format!("{}/", server.uri()));
}

// ============================================================================
// Failure Tests
// ============================================================================

#[tokio::test]
async fn test_invalid_content_pattern_is_reported_before_fetching() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut opts = options(&server, 1, SinkMode::Aggregate);
    opts.config.content_pattern = "(unclosed".to_string();
    let mut out = Vec::new();

    let result = execute_search(opts, &mut out).await;
    assert!(result.unwrap_err().contains("Invalid pattern"));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_unreachable_root_is_not_an_error() {
    let server = MockServer::start().await;
    let mut out = Vec::new();

    let stats = execute_search(options(&server, 2, SinkMode::Aggregate), &mut out)
        .await
        .unwrap();

    // wiremock answers unmatched requests with 404
    assert_eq!(stats.pages_fetched, 1);
    assert_eq!(stats.fetch_failures, 1);
    assert!(out.is_empty());
}
