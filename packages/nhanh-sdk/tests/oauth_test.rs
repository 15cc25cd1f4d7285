//! OAuth Exchange Tests
//!
//! Runs the access-code exchange against a mock server and checks how the
//! returned token is decoded and validated.

// Allow unwrap in tests - tests should panic on unexpected errors
#![allow(clippy::unwrap_used)]

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nhanh_sdk::config::ApiConfig;
use nhanh_sdk::{NhanhError, OAuthClient};

fn oauth(server: &MockServer) -> OAuthClient {
    let config = ApiConfig {
        app_id: "73001".to_string(),
        secret_key: "s3cret".to_string(),
        base_url: format!("{}/api", server.uri()),
        ..ApiConfig::default()
    };
    OAuthClient::new(&config).unwrap()
}

// =============================================================================
// Exchange
// =============================================================================

#[tokio::test]
async fn exchange_posts_form_and_decodes_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/oauth/access_token"))
        .and(body_string_contains("appId=73001"))
        .and(body_string_contains("secretKey=s3cret"))
        .and(body_string_contains("accessCode=code-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 1,
            "accessToken": "tok_live",
            "expiredDateTime": "2030-06-30 23:59:59",
            "businessId": 14,
            "depotIds": [1, 2],
            "permissions": ["order.view", "product.add"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = oauth(&server).exchange("code-123").await.unwrap();

    assert_eq!(token.token(), "tok_live");
    assert_eq!(token.business_id(), 14);
    assert_eq!(token.depot_ids(), vec![1, 2]);
    assert!(token.can("order.view"));
    assert!(!token.can("customer.add"));
}

#[tokio::test]
async fn exchange_reads_token_under_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 1,
            "data": {
                "accessToken": "tok_v3",
                "expiredDateTime": "2030-01-01 00:00:00",
                "businessId": "7"
            }
        })))
        .mount(&server)
        .await;

    let token = oauth(&server).exchange("code").await.unwrap();
    assert_eq!(token.token(), "tok_v3");
    assert_eq!(token.business_id(), 7);
}

#[tokio::test]
async fn malformed_token_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 1,
            "accessToken": "tok",
            "expiredDateTime": "30/06/2030",
            "businessId": 14
        })))
        .mount(&server)
        .await;

    let err = oauth(&server).exchange("code").await.unwrap_err();
    let NhanhError::InvalidResponse(message) = &err else {
        panic!("expected InvalidResponse, got {err:?}");
    };
    assert!(message.contains("expiredDateTime"));
}

#[tokio::test]
async fn rejected_code_is_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "errorCode": "ERR_INVALID_ACCESS_CODE",
            "messages": ["Access code is invalid or expired"]
        })))
        .mount(&server)
        .await;

    let err = oauth(&server).exchange("stale").await.unwrap_err();
    assert!(matches!(err, NhanhError::Authentication(_)));
    assert_eq!(err.error_code(), Some("ERR_INVALID_ACCESS_CODE"));
}

#[tokio::test]
async fn blank_code_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = oauth(&server).exchange("  ").await.unwrap_err();
    assert!(matches!(err, NhanhError::MissingCredentials(name) if name == "access_code"));
}

// =============================================================================
// Consent URL
// =============================================================================

#[test]
fn authorization_url_encodes_return_link() {
    let config = ApiConfig {
        app_id: "73001".to_string(),
        ..ApiConfig::default()
    };
    let url = OAuthClient::new(&config)
        .unwrap()
        .authorization_url("https://shop.example/callback?x=1")
        .unwrap();

    assert!(url.contains("appId=73001"));
    assert!(url.contains("returnLink=https%3A%2F%2Fshop.example%2Fcallback%3Fx%3D1"));
}
