//! Metrics definitions for the widget token issuer
//!
//! All metrics follow Prometheus naming conventions:
//! - `widget_` prefix
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms
//!
//! # Cardinality
//!
//! Labels are bounded:
//! - `status`: 2 values (success, error)
//! - `error_kind`: bounded by `ParameterStoreError::kind` and error codes

use metrics::{counter, histogram};
use std::time::Duration;

// ============================================================================
// Token Metrics
// ============================================================================

/// Record token issuance duration and outcome
///
/// Metric: `widget_token_issuance_duration_seconds`, `widget_token_issuance_total`
/// Labels: `status`, `error_kind`
pub fn record_token_issuance(status: &str, error_kind: Option<&str>, duration: Duration) {
    histogram!("widget_token_issuance_duration_seconds", "status" => status.to_string())
        .record(duration.as_secs_f64());

    let kind = error_kind.unwrap_or("none");
    counter!("widget_token_issuance_total", "status" => status.to_string(), "error_kind" => kind.to_string())
        .increment(1);
}

// ============================================================================
// Parameter Store Metrics
// ============================================================================

/// Record a parameter store lookup
///
/// Metric: `widget_parameter_fetch_total`
/// Labels: `status`, `error_kind`
pub fn record_parameter_fetch(status: &str, error_kind: Option<&str>) {
    let kind = error_kind.unwrap_or("none");
    counter!("widget_parameter_fetch_total", "status" => status.to_string(), "error_kind" => kind.to_string())
        .increment(1);
}
