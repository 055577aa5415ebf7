use crate::config::Config;
use crate::errors::WidgetAuthError;
use crate::models::TokenResponse;
use crate::parameter_store::ParameterStore;
use crate::services::token_service;
use axum::{
    body::Bytes,
    extract::State,
    http::{Extensions, Uri},
    Json,
};
use lambda_http::RequestExt;
use std::sync::Arc;

/// Application state shared across invocations
#[derive(Clone)]
pub struct AppState {
    pub parameter_store: Arc<dyn ParameterStore>,
    pub config: Config,
}

/// Handle widget token request
///
/// POST /{any path}
///
/// The raw body is parsed here rather than through `Json` so that a missing
/// `Content-Type` header is accepted and bad JSON maps to our 400 envelope.
pub async fn handle_token_request(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    extensions: Extensions,
    body: Bytes,
) -> Result<Json<TokenResponse>, WidgetAuthError> {
    let path = event_path(&extensions, &uri);

    tracing::info!(
        target: "widget_auth.handlers",
        path = %path,
        body_len = body.len(),
        "Token request received"
    );

    let token = token_service::issue_widget_token(
        state.parameter_store.as_ref(),
        &state.config,
        path,
        &body,
    )
    .await
    .inspect_err(|e| {
        tracing::warn!(
            target: "widget_auth.handlers",
            status = e.status_code().as_u16(),
            error_kind = e.kind(),
            "Token request failed"
        );
    })?;

    Ok(Json(token))
}

/// Path the caller invoked.
///
/// Behind a REST API Gateway stage the router URI is `/{stage}/{path}`;
/// the raw event path has no stage prefix. Outside Lambda there is no raw
/// path and the URI path is used as-is.
fn event_path<'a>(extensions: &'a Extensions, uri: &'a Uri) -> &'a str {
    match extensions.raw_http_path() {
        "" => uri.path(),
        raw => raw,
    }
}
