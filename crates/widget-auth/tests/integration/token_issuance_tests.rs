//! Integration tests for widget token issuance
//!
//! Exercise the full router over HTTP: body in, signed token out.

use chrono::Utc;
use common::jwt::{decode_claims_unverified, WIDGET_TOKEN_TTL_SECONDS};
use reqwest::StatusCode;
use serde_json::{json, Value};
use widget_auth::models::TokenResponse;
use widget_auth_test_utils::{
    healthy_parameter_store, TestTokenServer, TokenAssertions, TEST_CONNECT_SECRET,
    TEST_CONNECT_SECRET_PARAMETER, TEST_WIDGET_ID, TEST_WIDGET_ID_PARAMETER, TEST_WRONG_SECRET,
};

/// A typical widget body round-trips into the token's attributes
#[tokio::test]
async fn test_issue_token_round_trips_attributes() -> Result<(), anyhow::Error> {
    // Arrange
    let server = TestTokenServer::spawn(healthy_parameter_store()).await?;
    let attributes = json!({
        "customerName": "Jane Doe",
        "accountNumber": "000123",
        "preferences": {"language": "en-US", "callback": true},
    });

    // Act
    let token = server.request_token(&attributes).await?;

    // Assert
    token
        .assert_valid_widget_jwt()
        .assert_for_widget(TEST_WIDGET_ID)
        .assert_attributes(&attributes)
        .assert_expires_in(WIDGET_TOKEN_TTL_SECONDS)
        .assert_signed_with(TEST_CONNECT_SECRET)
        .assert_not_signed_with(TEST_WRONG_SECRET);

    Ok(())
}

/// The response echoes the request path and nothing else
#[tokio::test]
async fn test_response_shape_and_event_path() -> Result<(), anyhow::Error> {
    let server = TestTokenServer::spawn(healthy_parameter_store()).await?;

    let response = reqwest::Client::new()
        .post(format!("{}/prod/widget/token", server.url()))
        .body(r#"{"a":1}"#)
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await?;
    let object = body.as_object().expect("response body should be an object");
    assert_eq!(object.len(), 2, "response should only carry event_path and token");
    assert_eq!(body["event_path"], "/prod/widget/token");
    assert!(body["token"].is_string());

    Ok(())
}

/// No Content-Type header is required; the widget snippet may omit it
#[tokio::test]
async fn test_body_without_content_type_is_accepted() -> Result<(), anyhow::Error> {
    let server = TestTokenServer::spawn(healthy_parameter_store()).await?;

    let response = reqwest::Client::new()
        .post(format!("{}/", server.url()))
        .body("[\"not\", \"an\", \"object\"]")
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body: TokenResponse = response.json().await?;
    body.token
        .assert_attributes(&json!(["not", "an", "object"]))
        .assert_signed_with(TEST_CONNECT_SECRET);

    Ok(())
}

/// Expiry is exactly one hour after issuance, and issuance is "now"
#[tokio::test]
async fn test_expiry_is_one_hour_after_issuance() -> Result<(), anyhow::Error> {
    let server = TestTokenServer::spawn(healthy_parameter_store()).await?;

    let before = Utc::now().timestamp();
    let token = server.request_token(&json!({})).await?;
    let after = Utc::now().timestamp();

    let claims = decode_claims_unverified(&token)?;
    assert_eq!(claims.exp, claims.iat + WIDGET_TOKEN_TTL_SECONDS);
    assert!(
        claims.iat >= before && claims.iat <= after,
        "iat {} should fall within [{}, {}]",
        claims.iat,
        before,
        after
    );

    Ok(())
}

/// Each request reads both parameters fresh, with decryption
#[tokio::test]
async fn test_parameters_fetched_per_request_with_decryption() -> Result<(), anyhow::Error> {
    let server = TestTokenServer::spawn(healthy_parameter_store()).await?;

    server.request_token(&json!({"n": 1})).await?;
    server.request_token(&json!({"n": 2})).await?;

    assert_eq!(server.store().call_count(), 4);
    for (name, with_decryption) in server.store().calls() {
        assert!(
            name == TEST_WIDGET_ID_PARAMETER || name == TEST_CONNECT_SECRET_PARAMETER,
            "unexpected parameter lookup: {}",
            name
        );
        assert!(with_decryption, "{} should be fetched with decryption", name);
    }

    Ok(())
}

/// Malformed JSON is a client error and returns no token
#[tokio::test]
async fn test_malformed_body_returns_400() -> Result<(), anyhow::Error> {
    let server = TestTokenServer::spawn(healthy_parameter_store()).await?;

    for body in ["", "{", "name=Jane", "{\"a\":}"] {
        let response = reqwest::Client::new()
            .post(format!("{}/token", server.url()))
            .body(body)
            .send()
            .await?;

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "body {:?} should be rejected",
            body
        );

        let error: Value = response.json().await?;
        assert_eq!(error["error"]["code"], "MALFORMED_REQUEST_BODY");
        assert!(error.get("token").is_none());
    }

    Ok(())
}
