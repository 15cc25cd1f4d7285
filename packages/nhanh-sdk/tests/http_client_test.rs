//! HTTP transport tests against a local mock server.
//!
//! Covers the multipart request shape, envelope unwrapping and error
//! classification by HTTP status and envelope error code.

// Allow unwrap in tests - tests should panic on unexpected errors
#![allow(clippy::unwrap_used)]

use serde_json::json;
use test_case::test_case;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nhanh_sdk::config::ApiConfig;
use nhanh_sdk::{NhanhApiPort, NhanhError, NhanhHttpClient};

fn client(server: &MockServer) -> NhanhHttpClient {
    let config = ApiConfig {
        app_id: "73001".to_string(),
        business_id: "14".to_string(),
        access_token: "tok_test".to_string(),
        base_url: format!("{}/api", server.uri()),
        timeout_secs: 5,
        ..ApiConfig::default()
    };
    NhanhHttpClient::new(&config).unwrap()
}

#[tokio::test]
async fn sends_credentials_and_data_as_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/customer/search"))
        .and(body_string_contains("name=\"appId\""))
        .and(body_string_contains("73001"))
        .and(body_string_contains("name=\"accessToken\""))
        .and(body_string_contains("tok_test"))
        .and(body_string_contains("name=\"data\""))
        .and(body_string_contains(r#"{"icpp":10}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 1,
            "data": { "totalPages": 1, "customers": [] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let data = client(&server)
        .call("/customer/search", Some(&json!({ "icpp": 10 })))
        .await
        .unwrap();

    assert_eq!(data["totalPages"], json!(1));
}

#[tokio::test]
async fn omits_data_without_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/shipping/carrier"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 1, "data": [] })))
        .mount(&server)
        .await;

    client(&server).call("/shipping/carrier", None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"version\""));
    assert!(body.contains("2.0"));
    assert!(!body.contains("name=\"data\""));
}

#[tokio::test]
async fn missing_data_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 1 })))
        .mount(&server)
        .await;

    let data = client(&server).call("/order/update", None).await.unwrap();
    assert!(data.is_null());
}

#[tokio::test]
async fn envelope_failure_under_200() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "errorCode": "ERR_INVALID_DATA",
            "messages": { "icpp": "icpp must be at most 50" }
        })))
        .mount(&server)
        .await;

    let err = client(&server).call("/customer/search", None).await.unwrap_err();
    let NhanhError::Api(failure) = &err else {
        panic!("expected Api error, got {err:?}");
    };
    assert_eq!(failure.error_code.as_deref(), Some("ERR_INVALID_DATA"));
    assert_eq!(failure.messages, vec!["icpp must be at most 50"]);
    assert_eq!(err.status(), Some(200));
}

#[tokio::test]
async fn envelope_rate_limit_carries_lockout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "errorCode": "ERR_429",
            "data": { "lockedSeconds": 90 }
        })))
        .mount(&server)
        .await;

    let err = client(&server).call("/product/search", None).await.unwrap_err();
    assert!(err.is_rate_limited());
    assert_eq!(err.locked_seconds(), Some(90));
}

#[tokio::test]
async fn http_429_uses_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "17")
                .set_body_string("slow down"),
        )
        .mount(&server)
        .await;

    let err = client(&server).call("/order/index", None).await.unwrap_err();
    assert_eq!(err.locked_seconds(), Some(17));
    assert_eq!(err.status(), Some(429));
}

fn kind(err: &NhanhError) -> &'static str {
    match err {
        NhanhError::Authentication(_) => "authentication",
        NhanhError::Authorization(_) => "authorization",
        NhanhError::NotFound(_) => "not_found",
        NhanhError::Client(_) => "client",
        NhanhError::Server(_) => "server",
        _ => "other",
    }
}

#[test_case(401, "authentication" ; "unauthorized")]
#[test_case(403, "authorization" ; "forbidden")]
#[test_case(404, "not_found" ; "missing endpoint")]
#[test_case(400, "client" ; "bad request")]
#[test_case(502, "server" ; "bad gateway")]
#[tokio::test]
async fn http_status_classification(status: u16, expected: &str) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(status).set_body_string("{}"))
        .mount(&server)
        .await;

    let err = client(&server).call("/order/index", None).await.unwrap_err();
    assert_eq!(kind(&err), expected, "status {status} gave {err:?}");
    assert_eq!(err.status(), Some(status));
}

#[tokio::test]
async fn non_json_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client(&server).call("/order/index", None).await.unwrap_err();
    assert!(matches!(err, NhanhError::JsonParse(_)));
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let server = MockServer::start().await;
    let client = client(&server);
    drop(server);

    let err = client.call("/order/index", None).await.unwrap_err();
    assert!(matches!(err, NhanhError::Network(_)));
}
