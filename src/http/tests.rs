//! Tests for the HTTP client module

use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("scrollfeed/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://news.example.com")
        .timeout(Duration::from_secs(5))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://news.example.com".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_http_client_config_from_client_config() {
    let mut client_config = ClientConfig::new("http://localhost:8000");
    client_config.request_timeout_secs = 7;
    client_config.user_agent = "feed-reader/2".into();

    let config = HttpClientConfig::from_client_config(&client_config);
    assert_eq!(config.base_url.as_deref(), Some("http://localhost:8000"));
    assert_eq!(config.timeout, Duration::from_secs(7));
    assert_eq!(config.user_agent, "feed-reader/2");
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("page", "2")
        .header("X-CSRFToken", "abc123")
        .json(serde_json::json!({"key": "value"}))
        .timeout(Duration::from_secs(10));

    assert_eq!(config.query.get("page"), Some(&"2".to_string()));
    assert_eq!(
        config.headers.get("X-CSRFToken"),
        Some(&"abc123".to_string())
    );
    assert!(config.body.is_some());
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
}

#[test]
fn test_build_url() {
    let client = HttpClient::with_config(
        HttpClientConfig::builder()
            .base_url("http://localhost:8000/")
            .build(),
    )
    .unwrap();

    assert_eq!(
        client.build_url("/7/like/").unwrap(),
        "http://localhost:8000/7/like/"
    );
    assert_eq!(
        client.build_url("7/like/").unwrap(),
        "http://localhost:8000/7/like/"
    );
    assert_eq!(
        client.build_url("https://other.example/x").unwrap(),
        "https://other.example/x"
    );
}

#[test]
fn test_build_url_with_path_base() {
    let client = HttpClient::with_config(
        HttpClientConfig::builder()
            .base_url("http://localhost:8000/blog/")
            .build(),
    )
    .unwrap();

    // Absolute paths resolve from the origin, relative ones from the base directory
    assert_eq!(
        client.build_url("/5/like/").unwrap(),
        "http://localhost:8000/5/like/"
    );
    assert_eq!(
        client.build_url("5/like/").unwrap(),
        "http://localhost:8000/blog/5/like/"
    );
}

#[test]
fn test_build_url_without_base() {
    let client = HttpClient::new().unwrap();

    assert_eq!(
        client.build_url("http://localhost:8000/news/").unwrap(),
        "http://localhost:8000/news/"
    );
    assert!(matches!(
        client.build_url("/7/like/"),
        Err(Error::InvalidUrl(_))
    ));
}

#[tokio::test]
async fn test_http_client_get_json_with_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": 42
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let data: serde_json::Value = client
        .get_json_with_config("/", RequestConfig::new().query("page", "2"))
        .await
        .unwrap();

    assert_eq!(data["value"], 42);
}

#[tokio::test]
async fn test_http_client_post_headers_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/3/like/"))
        .and(header("X-CSRFToken", "tok"))
        .and(body_json(serde_json::json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "likes": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let data: serde_json::Value = client
        .post_json_with_config(
            "/3/like/",
            RequestConfig::new()
                .header("X-CSRFToken", "tok")
                .json(serde_json::json!({})),
        )
        .await
        .unwrap();

    assert_eq!(data["likes"], 1);
}

#[tokio::test]
async fn test_http_client_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/feed"))
        .and(header(REQUESTED_WITH_HEADER, XML_HTTP_REQUEST))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .header(REQUESTED_WITH_HEADER, XML_HTTP_REQUEST)
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client
        .get_with_config("/feed", RequestConfig::new())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_404_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.get_with_config("/missing", RequestConfig::new()).await;

    match result.unwrap_err() {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Not Found");
        }
        other => panic!("Expected HttpStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_client_500_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_with_config("/flaky", RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_http_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_with_config(
            "/slow",
            RequestConfig::new().timeout(Duration::from_millis(50)),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

#[tokio::test]
async fn test_http_client_invalid_json_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json_with_config::<serde_json::Value>("/html", RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::new().unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("HttpClient"));
}
