//! Integration tests for the fetch module.
//!
//! These tests verify payload decoding and failure mapping against mock HTTP servers.

use datafetch_core::fetch::{FetchError, HttpClient, Payload, PayloadFormat};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a mock server answering `path_str` with `status` and `body`.
async fn setup_mock(path_str: &str, status: u16, body: &[u8]) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(path_str))
        .respond_with(ResponseTemplate::new(status).set_body_bytes(body.to_vec()))
        .mount(&mock_server)
        .await;

    mock_server
}

#[tokio::test]
async fn test_fetch_text_returns_body_as_string() {
    let mock_server = setup_mock("/data.txt", 200, b"alpha beta\ngamma").await;
    let client = HttpClient::new();

    let payload = client
        .fetch(&format!("{}/data.txt", mock_server.uri()), PayloadFormat::Text)
        .await
        .expect("fetch should succeed");

    assert_eq!(payload, Payload::Text("alpha beta\ngamma".to_string()));
}

#[tokio::test]
async fn test_fetch_json_parses_and_keeps_key_order() {
    let mock_server = setup_mock("/data.json", 200, br#"{"zeta": 1, "alpha": [1, 2]}"#).await;
    let client = HttpClient::new();

    let payload = client
        .fetch(&format!("{}/data.json", mock_server.uri()), PayloadFormat::Json)
        .await
        .expect("fetch should succeed");

    let value = match payload {
        Payload::Json(value) => value,
        other => panic!("expected JSON payload, got {other:?}"),
    };
    let keys: Vec<_> = value
        .as_object()
        .expect("object")
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
}

#[tokio::test]
async fn test_fetch_bytes_are_untouched() {
    let body = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1, 0x00];
    let mock_server = setup_mock("/data.xls", 200, &body).await;
    let client = HttpClient::new();

    let payload = client
        .fetch(&format!("{}/data.xls", mock_server.uri()), PayloadFormat::Bytes)
        .await
        .expect("fetch should succeed");

    assert_eq!(payload, Payload::Bytes(body.to_vec()));
}

#[tokio::test]
async fn test_fetch_404_is_http_status_failure() {
    let mock_server = setup_mock("/data.csv", 404, b"").await;
    let client = HttpClient::new();
    let url = format!("{}/data.csv", mock_server.uri());

    let result = client.fetch(&url, PayloadFormat::Text).await;

    match result {
        Err(FetchError::HttpStatus {
            status,
            url: err_url,
        }) => {
            assert_eq!(status, 404);
            assert_eq!(err_url, url);
        }
        other => panic!("Expected HttpStatus(404), got: {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_500_is_http_status_failure() {
    let mock_server = setup_mock("/data.txt", 500, b"boom").await;
    let client = HttpClient::new();

    let result = client
        .fetch(&format!("{}/data.txt", mock_server.uri()), PayloadFormat::Text)
        .await;

    assert_eq!(result.expect_err("500 must fail").status(), Some(500));
}

#[tokio::test]
async fn test_fetch_non_200_success_status_is_failure() {
    let mock_server = setup_mock("/data.txt", 204, b"").await;
    let client = HttpClient::new();

    let result = client
        .fetch(&format!("{}/data.txt", mock_server.uri()), PayloadFormat::Text)
        .await;

    assert_eq!(result.expect_err("only 200 is success").status(), Some(204));
}

#[tokio::test]
async fn test_fetch_invalid_json_is_decode_failure() {
    let mock_server = setup_mock("/data.json", 200, b"{not json").await;
    let client = HttpClient::new();

    let result = client
        .fetch(&format!("{}/data.json", mock_server.uri()), PayloadFormat::Json)
        .await;

    assert!(
        matches!(result, Err(FetchError::Decode { .. })),
        "expected Decode, got {result:?}"
    );
}

#[tokio::test]
async fn test_fetch_connection_refused_is_network_failure() {
    let client = HttpClient::new();

    let result = client
        .fetch("http://127.0.0.1:1/data.txt", PayloadFormat::Text)
        .await;

    assert!(
        matches!(result, Err(FetchError::Network { .. })),
        "expected Network, got {result:?}"
    );
}
