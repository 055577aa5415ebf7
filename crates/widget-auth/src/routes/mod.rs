use crate::handlers::token_handler::{handle_token_request, AppState};
use axum::{
    http::{header, HeaderValue},
    routing::post,
    Router,
};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_METHODS: &str = "OPTIONS,POST,GET";
/// Header allowlist the Connect widget snippet sends.
pub const CORS_ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";

/// Build the token router
///
/// Every path accepts POST. The CORS headers are set on every response,
/// including errors and 405s, because API Gateway's proxy integration passes
/// them through unchanged.
pub fn build_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(handle_token_request))
        .route("/*path", post(handle_token_request))
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(CORS_ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CORS_ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
}
