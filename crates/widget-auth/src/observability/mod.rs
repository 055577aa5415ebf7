//! Observability for the widget token issuer
//!
//! # Privacy by Default
//!
//! Instrumented functions use `#[instrument(skip_all)]` and name the fields
//! they record. Fields fall into two groups:
//! - **SAFE**: parameter names, request path, body length, outcome labels
//! - **NEVER**: parameter values, tokens, request bodies
//!
//! The subscriber writes JSON lines so CloudWatch Logs Insights can query the
//! fields directly.

pub mod metrics;

pub use metrics::{record_parameter_fetch, record_token_issuance};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "widget_auth=info,tower_http=info";

/// Install the global JSON tracing subscriber.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_target(true),
        )
        .init();
}
