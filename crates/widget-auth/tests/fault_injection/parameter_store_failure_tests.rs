//! Fault injection tests for parameter store failures
//!
//! These tests validate that a failed lookup of either parameter:
//! - Returns 500 with the secret-retrieval error code
//! - Never produces a token
//! - Does not leak parameter names or store error details

use reqwest::StatusCode;
use serde_json::Value;
use widget_auth::parameter_store::mock::MockParameterStore;
use widget_auth::parameter_store::ParameterStoreError;
use widget_auth_test_utils::{
    failing_secret_store, failing_widget_store, TestTokenServer, TEST_CONNECT_SECRET_PARAMETER,
    TEST_WIDGET_ID, TEST_WIDGET_ID_PARAMETER,
};

async fn post_token(server: &TestTokenServer, body: &str) -> Result<(StatusCode, Value), anyhow::Error> {
    let response = reqwest::Client::new()
        .post(format!("{}/token", server.url()))
        .body(body.to_string())
        .send()
        .await?;

    let status = response.status();
    let body: Value = response.json().await?;
    Ok((status, body))
}

fn assert_secret_failure(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "SECRET_RETRIEVAL_FAILED");
    assert!(body.get("token").is_none(), "no token may be issued");

    let rendered = body.to_string();
    assert!(!rendered.contains(TEST_WIDGET_ID_PARAMETER));
    assert!(!rendered.contains(TEST_CONNECT_SECRET_PARAMETER));
}

#[tokio::test]
async fn test_connect_secret_not_found_returns_500() -> Result<(), anyhow::Error> {
    let server = TestTokenServer::spawn(failing_secret_store(ParameterStoreError::NotFound(
        TEST_CONNECT_SECRET_PARAMETER.to_string(),
    )))
    .await?;

    let (status, body) = post_token(&server, r#"{"name":"Jane"}"#).await?;

    assert_secret_failure(status, &body);
    Ok(())
}

#[tokio::test]
async fn test_connect_secret_access_denied_returns_500() -> Result<(), anyhow::Error> {
    let server = TestTokenServer::spawn(failing_secret_store(
        ParameterStoreError::AccessDenied(TEST_CONNECT_SECRET_PARAMETER.to_string()),
    ))
    .await?;

    let (status, body) = post_token(&server, "{}").await?;

    assert_secret_failure(status, &body);
    Ok(())
}

#[tokio::test]
async fn test_widget_id_transport_error_returns_500() -> Result<(), anyhow::Error> {
    let server = TestTokenServer::spawn(failing_widget_store(ParameterStoreError::Transport(
        "dispatch failure: connection reset".to_string(),
    )))
    .await?;

    let (status, body) = post_token(&server, "{}").await?;

    assert_secret_failure(status, &body);
    assert!(!body.to_string().contains("connection reset"));
    Ok(())
}

#[tokio::test]
async fn test_widget_id_without_value_returns_500() -> Result<(), anyhow::Error> {
    let server = TestTokenServer::spawn(failing_widget_store(ParameterStoreError::MissingValue(
        TEST_WIDGET_ID_PARAMETER.to_string(),
    )))
    .await?;

    let (status, body) = post_token(&server, "{}").await?;

    assert_secret_failure(status, &body);
    Ok(())
}

#[tokio::test]
async fn test_secret_failure_reported_before_body_validation() -> Result<(), anyhow::Error> {
    let server = TestTokenServer::spawn(failing_secret_store(ParameterStoreError::Service(
        "ThrottlingException: Rate exceeded".to_string(),
    )))
    .await?;

    let (status, body) = post_token(&server, "definitely not json").await?;

    assert_secret_failure(status, &body);
    Ok(())
}

/// An empty secret is a successful lookup but unusable key material
#[tokio::test]
async fn test_empty_connect_secret_returns_signing_failure() -> Result<(), anyhow::Error> {
    let store = MockParameterStore::new()
        .with_parameter(TEST_WIDGET_ID_PARAMETER, TEST_WIDGET_ID)
        .with_parameter(TEST_CONNECT_SECRET_PARAMETER, "");
    let server = TestTokenServer::spawn(store).await?;

    let (status, body) = post_token(&server, "{}").await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "SIGNING_FAILED");
    assert!(body.get("token").is_none());
    Ok(())
}
