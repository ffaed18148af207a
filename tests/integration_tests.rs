//! Integration tests using mock HTTP server
//!
//! Tests the full flow: target → single GET → derived pagination and keys

use json_probe::http::{HttpClient, HttpClientConfig};
use json_probe::{Error, JsonResponseProbe, ProbeTarget};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helpers
// ============================================================================

async fn mount(
    server: &MockServer,
    route: &str,
    headers: &[(&str, &str)],
    body: serde_json::Value,
) {
    let mut template = ResponseTemplate::new(200).set_body_json(body);
    for (name, value) in headers {
        template = template.insert_header(*name, *value);
    }

    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Pagination Scenarios
// ============================================================================

#[tokio::test]
async fn test_paged_endpoint() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/some/resource/an-endpoint",
        &[("X-WP-TotalPages", "2")],
        json!([{"id": 1}]),
    )
    .await;

    let target = ProbeTarget::new(server.uri(), "some/resource", "an-endpoint").unwrap();
    let probe = JsonResponseProbe::fetch(target).await.unwrap();

    assert!(probe.is_paged());
    assert_eq!(probe.total_pages().unwrap(), 2);
}

#[tokio::test]
async fn test_unpaged_endpoint() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/some/resource/an-endpoint",
        &[],
        json!({"name": "x"}),
    )
    .await;

    let target = ProbeTarget::new(server.uri(), "some/resource", "an-endpoint").unwrap();
    let probe = JsonResponseProbe::fetch(target).await.unwrap();

    assert!(!probe.is_paged());
    assert_eq!(probe.total_pages().unwrap(), 1);
    assert_eq!(probe.total_results().unwrap(), None);
    assert_eq!(
        probe.generate_paged_endpoints(None).unwrap(),
        vec![format!("{}/some/resource/an-endpoint?page=1", server.uri())]
    );
}

#[tokio::test]
async fn test_total_results_and_page_urls() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/some/resource/an-endpoint",
        &[("X-WP-Total", "200"), ("X-WP-TotalPages", "2")],
        json!([{"id": 1}]),
    )
    .await;

    let target = ProbeTarget::new(server.uri(), "some/resource", "an-endpoint").unwrap();
    let probe = JsonResponseProbe::fetch(target).await.unwrap();

    assert_eq!(probe.total_results().unwrap(), Some(200));
    assert_eq!(
        probe.generate_paged_endpoints(None).unwrap(),
        vec![
            format!("{}/some/resource/an-endpoint?page=1", server.uri()),
            format!("{}/some/resource/an-endpoint?page=2", server.uri()),
        ]
    );
}

#[tokio::test]
async fn test_total_results_when_not_paged() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/some/resource/an-endpoint",
        &[("X-WP-Total", "100")],
        json!([{"id": 1}]),
    )
    .await;

    let target = ProbeTarget::new(server.uri(), "some/resource", "an-endpoint").unwrap();
    let probe = JsonResponseProbe::fetch(target).await.unwrap();

    assert_eq!(probe.total_results().unwrap(), Some(100));
}

#[tokio::test]
async fn test_empty_endpoint_probes_base_path() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/some/resource",
        &[("X-WP-TotalPages", "2"), ("X-WP-Total", "200")],
        json!({"namespace": "wp/v2", "routes": {}}),
    )
    .await;

    let target = ProbeTarget::new(server.uri(), "some/resource", "").unwrap();
    let probe = JsonResponseProbe::fetch(target).await.unwrap();

    assert_eq!(probe.full_url(), format!("{}/some/resource", server.uri()));
    assert_eq!(probe.keys().unwrap(), vec!["namespace", "routes"]);
    assert_eq!(
        probe.generate_paged_endpoints(None).unwrap(),
        vec![
            format!("{}/some/resource?page=1", server.uri()),
            format!("{}/some/resource?page=2", server.uri()),
        ]
    );
}

#[tokio::test]
async fn test_debug_cap_limits_page_urls() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/wp-json/wp/v2/posts",
        &[("X-WP-TotalPages", "120")],
        json!([{"id": 1}]),
    )
    .await;

    let target = ProbeTarget::new(server.uri(), "wp-json/wp/v2", "posts").unwrap();
    let probe = JsonResponseProbe::fetch(target).await.unwrap();

    let urls = probe.generate_paged_endpoints(Some(5)).unwrap();
    assert_eq!(urls.len(), 5);
    assert_eq!(
        urls.last().unwrap(),
        &format!("{}/wp-json/wp/v2/posts?page=5", server.uri())
    );
    assert_eq!(probe.generate_paged_endpoints(None).unwrap().len(), 120);
}

// ============================================================================
// Failure Scenarios
// ============================================================================

#[tokio::test]
async fn test_non_success_status_fails_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/some/resource/an-endpoint"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let target = ProbeTarget::new(server.uri(), "some/resource", "an-endpoint").unwrap();
    let err = JsonResponseProbe::fetch(target).await.unwrap_err();

    match err {
        Error::HttpStatus { status, url } => {
            assert_eq!(status, 500);
            assert_eq!(url, format!("{}/some/resource/an-endpoint", server.uri()));
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_array_keys_is_malformed() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/items",
        &[("X-WP-TotalPages", "0")],
        json!([]),
    )
    .await;

    let target = ProbeTarget::new(server.uri(), "api", "items").unwrap();
    let probe = JsonResponseProbe::fetch(target).await.unwrap();

    assert!(probe.keys().unwrap_err().is_malformed());
    assert!(probe.generate_paged_endpoints(None).unwrap().is_empty());
}

#[tokio::test]
async fn test_independent_probes_share_client() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/users",
        &[("X-WP-TotalPages", "4")],
        json!([{"id": 1, "name": "a"}]),
    )
    .await;
    mount(&server, "/api/tags", &[], json!({"count": 0})).await;

    let client = HttpClient::with_config(HttpClientConfig::default()).unwrap();
    let users = ProbeTarget::new(server.uri(), "api", "users").unwrap();
    let tags = ProbeTarget::new(server.uri(), "api", "tags").unwrap();

    let (users, tags) = tokio::join!(
        JsonResponseProbe::fetch_with(&client, users),
        JsonResponseProbe::fetch_with(&client, tags)
    );
    let users = users.unwrap();
    let tags = tags.unwrap();

    assert_eq!(users.total_pages().unwrap(), 4);
    assert_eq!(users.keys().unwrap(), vec!["id", "name"]);
    assert_eq!(tags.total_pages().unwrap(), 1);
    assert_eq!(tags.keys().unwrap(), vec!["count"]);
}
