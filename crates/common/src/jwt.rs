//! Widget JWT definitions shared between the issuer and its test tooling.
//!
//! This module provides:
//! - Token lifetime and size constants
//! - The `WidgetClaims` payload signed for the Amazon Connect chat widget
//! - Unverified payload inspection for diagnostics
//!
//! # Security
//!
//! - Tokens are size-checked BEFORE parsing
//! - The `sub` (widget id) and `attributes` fields are redacted in Debug output
//! - Inspection helpers never validate signatures; use the issuer's verifier
//!   for anything that makes a trust decision

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

// =============================================================================
// Constants
// =============================================================================

/// Lifetime of an issued widget token (1 hour).
///
/// Amazon Connect rejects widget tokens whose `exp` is more than 12 hours
/// out; one hour keeps a leaked token short-lived.
pub const WIDGET_TOKEN_TTL_SECONDS: i64 = 3600;

/// Maximum JWT size accepted for verification or inspection (8KB).
///
/// Caller-supplied attributes make widget tokens larger than typical service
/// tokens, but anything beyond this is rejected before base64 decoding.
pub const MAX_JWT_SIZE_BYTES: usize = 8192;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur while inspecting or verifying a widget JWT.
///
/// Messages are generic; details go to debug-level logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JwtValidationError {
    /// Token size exceeds maximum allowed.
    #[error("The widget token is invalid")]
    TokenTooLarge,

    /// Token format is invalid (not a valid JWT structure).
    #[error("The widget token is invalid")]
    MalformedToken,

    /// Signature does not match the Connect secret.
    #[error("The widget token is invalid")]
    InvalidSignature,

    /// `exp` is in the past.
    #[error("The widget token has expired")]
    Expired,
}

// =============================================================================
// Claims Types
// =============================================================================

/// Payload of a widget token.
///
/// `attributes` is the caller's JSON body passed through verbatim; its shape
/// is a contract between the widget page and the contact flow.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetClaims {
    /// Widget id issued by Amazon Connect.
    pub sub: String,

    /// Caller-supplied contact attributes.
    pub attributes: Value,

    /// Issued-at timestamp (Unix epoch seconds).
    pub iat: i64,

    /// Expiration timestamp (Unix epoch seconds).
    pub exp: i64,
}

impl fmt::Debug for WidgetClaims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetClaims")
            .field("sub", &"[REDACTED]")
            .field("attributes", &"[REDACTED]")
            .field("iat", &self.iat)
            .field("exp", &self.exp)
            .finish()
    }
}

impl WidgetClaims {
    /// Builds claims issued at `iat` that expire [`WIDGET_TOKEN_TTL_SECONDS`] later.
    #[must_use]
    pub fn new(sub: String, attributes: Value, iat: i64) -> Self {
        Self {
            sub,
            attributes,
            iat,
            exp: iat + WIDGET_TOKEN_TTL_SECONDS,
        }
    }
}

// =============================================================================
// Functions
// =============================================================================

/// Decode the claims of a widget token WITHOUT verifying its signature.
///
/// Used for diagnostics and test assertions. The result must not be trusted.
///
/// # Errors
///
/// - `TokenTooLarge` - Token exceeds `MAX_JWT_SIZE_BYTES`
/// - `MalformedToken` - Wrong structure, bad base64, or claims JSON mismatch
pub fn decode_claims_unverified(token: &str) -> Result<WidgetClaims, JwtValidationError> {
    if token.len() > MAX_JWT_SIZE_BYTES {
        tracing::debug!(
            target: "common.jwt",
            token_size = token.len(),
            max_size = MAX_JWT_SIZE_BYTES,
            "Token rejected: size exceeds maximum allowed"
        );
        return Err(JwtValidationError::TokenTooLarge);
    }

    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        tracing::debug!(target: "common.jwt", "Token rejected: invalid JWT format");
        return Err(JwtValidationError::MalformedToken);
    };

    let payload_bytes = URL_SAFE_NO_PAD.decode(payload).map_err(|e| {
        tracing::debug!(target: "common.jwt", error = %e, "Failed to decode JWT payload base64");
        JwtValidationError::MalformedToken
    })?;

    serde_json::from_slice(&payload_bytes).map_err(|e| {
        tracing::debug!(target: "common.jwt", error = %e, "Failed to parse JWT claims JSON");
        JwtValidationError::MalformedToken
    })
}
