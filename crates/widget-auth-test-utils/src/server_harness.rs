//! Test server harness for E2E testing
//!
//! Provides TestTokenServer for spawning the real router in tests.

use crate::fixtures::test_config;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use widget_auth::handlers::token_handler::AppState;
use widget_auth::models::TokenResponse;
use widget_auth::parameter_store::mock::MockParameterStore;
use widget_auth::routes;

/// Test harness for spawning the widget token issuer in E2E tests
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_issue_e2e() -> Result<(), anyhow::Error> {
///     let server = TestTokenServer::spawn(healthy_parameter_store()).await?;
///
///     let response = reqwest::Client::new()
///         .post(format!("{}/token", server.url()))
///         .body(r#"{"name":"Jane"}"#)
///         .send()
///         .await?;
///
///     assert_eq!(response.status(), 200);
///     Ok(())
/// }
/// ```
pub struct TestTokenServer {
    addr: SocketAddr,
    store: Arc<MockParameterStore>,
    handle: JoinHandle<()>,
}

impl TestTokenServer {
    /// Spawn a new test server backed by `store`
    ///
    /// The server binds to a random available port (127.0.0.1:0) and serves
    /// the same router the Lambda runtime drives.
    pub async fn spawn(store: MockParameterStore) -> Result<Self, anyhow::Error> {
        let store = Arc::new(store);

        let state = Arc::new(AppState {
            parameter_store: store.clone(),
            config: test_config(),
        });

        let app = routes::build_routes(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            store,
            handle,
        })
    }

    /// Get the base URL of the test server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get the parameter store, e.g. to inspect lookups
    pub fn store(&self) -> &MockParameterStore {
        &self.store
    }

    /// POST `attributes` to `/token` and return the issued token
    ///
    /// Fails if the server does not answer 200.
    pub async fn request_token(&self, attributes: &Value) -> Result<String, anyhow::Error> {
        let response = reqwest::Client::new()
            .post(format!("{}/token", self.url()))
            .json(attributes)
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("Token request failed with status {}", response.status());
        }

        let body: TokenResponse = response.json().await?;
        Ok(body.token)
    }
}

impl Drop for TestTokenServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
