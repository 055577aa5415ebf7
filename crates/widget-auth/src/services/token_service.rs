use crate::config::Config;
use crate::crypto;
use crate::errors::WidgetAuthError;
use crate::models::TokenResponse;
use crate::observability::metrics::{record_parameter_fetch, record_token_issuance};
use crate::parameter_store::ParameterStore;
use chrono::Utc;
use common::jwt::WidgetClaims;
use common::secret::{ExposeSecret, SecretString};
use serde_json::Value;
use std::time::Instant;
use tracing::instrument;

/// Issue a widget token for the Amazon Connect chat widget
///
/// Fetches the widget id and Connect secret (both decrypted), parses the body
/// as the token's `attributes`, and signs `{ sub, attributes, iat, exp }`.
/// A failed lookup returns before the body is parsed or anything is signed.
#[instrument(skip_all, fields(event_path = %event_path, body_len = body.len()))]
pub async fn issue_widget_token(
    store: &dyn ParameterStore,
    config: &Config,
    event_path: &str,
    body: &[u8],
) -> Result<TokenResponse, WidgetAuthError> {
    let start = Instant::now();
    let result = issue(store, config, event_path, body).await;

    match &result {
        Ok(_) => record_token_issuance("success", None, start.elapsed()),
        Err(e) => record_token_issuance("error", Some(e.kind()), start.elapsed()),
    }

    result
}

async fn issue(
    store: &dyn ParameterStore,
    config: &Config,
    event_path: &str,
    body: &[u8],
) -> Result<TokenResponse, WidgetAuthError> {
    let (widget_id, connect_secret) = tokio::try_join!(
        fetch_secret(store, &config.widget_id_parameter),
        fetch_secret(store, &config.connect_secret_parameter),
    )?;

    let attributes = parse_attributes(body)?;

    let claims = WidgetClaims::new(
        widget_id.expose_secret().to_string(),
        attributes,
        Utc::now().timestamp(),
    );

    let token = crypto::sign_widget_token(&claims, &connect_secret)?;

    tracing::info!(
        target: "widget_auth.services.token_service",
        expires_at = claims.exp,
        "Widget token issued"
    );

    Ok(TokenResponse {
        event_path: event_path.to_string(),
        token,
    })
}

/// Parse the request body into the token's `attributes` claim.
///
/// Any valid JSON is accepted and passed through unchanged.
pub fn parse_attributes(body: &[u8]) -> Result<Value, WidgetAuthError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(
            target: "widget_auth.services.token_service",
            error = %e,
            "Request body is not valid JSON"
        );
        WidgetAuthError::MalformedRequestBody(e.to_string())
    })
}

async fn fetch_secret(
    store: &dyn ParameterStore,
    name: &str,
) -> Result<SecretString, WidgetAuthError> {
    match store.get_parameter(name, true).await {
        Ok(value) => {
            record_parameter_fetch("success", None);
            Ok(value)
        }
        Err(e) => {
            record_parameter_fetch("error", Some(e.kind()));
            tracing::error!(
                target: "widget_auth.services.token_service",
                parameter = %name,
                error = %e,
                "Failed to fetch parameter"
            );
            Err(e.into())
        }
    }
}
