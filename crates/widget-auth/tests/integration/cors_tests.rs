//! Integration tests for CORS headers
//!
//! API Gateway proxies responses verbatim, so the function itself must set
//! the CORS headers on every path, success or failure.

use reqwest::{Response, StatusCode};
use widget_auth::parameter_store::mock::MockParameterStore;
use widget_auth::routes::{CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, CORS_ALLOW_ORIGIN};
use widget_auth_test_utils::{healthy_parameter_store, TestTokenServer};

fn assert_cors_headers(response: &Response) {
    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some(CORS_ALLOW_ORIGIN)
    );
    assert_eq!(
        headers
            .get("access-control-allow-methods")
            .and_then(|v| v.to_str().ok()),
        Some(CORS_ALLOW_METHODS)
    );
    assert_eq!(
        headers
            .get("access-control-allow-headers")
            .and_then(|v| v.to_str().ok()),
        Some(CORS_ALLOW_HEADERS)
    );
}

#[test]
fn test_cors_headers_exact_values() {
    assert_eq!(CORS_ALLOW_ORIGIN, "*");
    assert_eq!(CORS_ALLOW_METHODS, "OPTIONS,POST,GET");
    assert_eq!(
        CORS_ALLOW_HEADERS,
        "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token"
    );
}

#[tokio::test]
async fn test_cors_headers_on_success() -> Result<(), anyhow::Error> {
    let server = TestTokenServer::spawn(healthy_parameter_store()).await?;

    let response = reqwest::Client::new()
        .post(format!("{}/token", server.url()))
        .body("{}")
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors_headers(&response);
    Ok(())
}

#[tokio::test]
async fn test_cors_headers_on_client_error() -> Result<(), anyhow::Error> {
    let server = TestTokenServer::spawn(healthy_parameter_store()).await?;

    let response = reqwest::Client::new()
        .post(format!("{}/token", server.url()))
        .body("not json")
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_cors_headers(&response);
    Ok(())
}

#[tokio::test]
async fn test_cors_headers_on_server_error() -> Result<(), anyhow::Error> {
    let server = TestTokenServer::spawn(MockParameterStore::new()).await?;

    let response = reqwest::Client::new()
        .post(format!("{}/token", server.url()))
        .body("{}")
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors_headers(&response);
    Ok(())
}

#[tokio::test]
async fn test_cors_headers_on_method_not_allowed() -> Result<(), anyhow::Error> {
    let server = TestTokenServer::spawn(healthy_parameter_store()).await?;

    let response = reqwest::Client::new()
        .put(format!("{}/token", server.url()))
        .body("{}")
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_cors_headers(&response);
    Ok(())
}
