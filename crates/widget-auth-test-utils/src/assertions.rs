//! Custom test assertions for expressive tests
//!
//! Provides trait-based assertions for widget tokens.

use common::jwt::{decode_claims_unverified, WidgetClaims};
use common::secret::SecretString;
use jsonwebtoken::{decode_header, Algorithm};
use serde_json::Value;
use widget_auth::crypto::verify_widget_token;

/// Custom assertions for widget tokens
///
/// # Example
/// ```rust,ignore
/// token
///     .assert_valid_widget_jwt()
///     .assert_for_widget("widget-id")
///     .assert_attributes(&json!({"name": "Jane"}))
///     .assert_signed_with(TEST_CONNECT_SECRET);
/// ```
pub trait TokenAssertions {
    /// Assert the token is an HS256 JWT carrying widget claims
    fn assert_valid_widget_jwt(&self) -> &Self;

    /// Assert the `sub` claim is the widget id
    fn assert_for_widget(&self, widget_id: &str) -> &Self;

    /// Assert the `attributes` claim deep-equals `expected`
    fn assert_attributes(&self, expected: &Value) -> &Self;

    /// Assert the token expires exactly `seconds` after issuance
    fn assert_expires_in(&self, seconds: i64) -> &Self;

    /// Assert the signature verifies with `secret`
    fn assert_signed_with(&self, secret: &str) -> &Self;

    /// Assert the signature does NOT verify with `secret`
    fn assert_not_signed_with(&self, secret: &str) -> &Self;
}

fn claims(token: &str) -> WidgetClaims {
    decode_claims_unverified(token).expect("Token payload should decode as widget claims")
}

impl TokenAssertions for String {
    fn assert_valid_widget_jwt(&self) -> &Self {
        assert_eq!(
            self.split('.').count(),
            3,
            "JWT must have 3 parts (header.payload.signature)"
        );

        let header = decode_header(self).expect("Failed to decode JWT header");
        assert_eq!(header.alg, Algorithm::HS256, "Expected HS256 algorithm");
        assert_eq!(header.typ.as_deref(), Some("JWT"), "Expected JWT type");

        claims(self);
        self
    }

    fn assert_for_widget(&self, widget_id: &str) -> &Self {
        assert_eq!(
            claims(self).sub,
            widget_id,
            "Token subject should be the widget id"
        );
        self
    }

    fn assert_attributes(&self, expected: &Value) -> &Self {
        assert_eq!(
            &claims(self).attributes,
            expected,
            "Token attributes should match the request body"
        );
        self
    }

    fn assert_expires_in(&self, seconds: i64) -> &Self {
        let claims = claims(self);
        assert_eq!(
            claims.exp - claims.iat,
            seconds,
            "Token lifetime should be {} seconds",
            seconds
        );
        self
    }

    fn assert_signed_with(&self, secret: &str) -> &Self {
        let result = verify_widget_token(self, &SecretString::from(secret));
        assert!(
            result.is_ok(),
            "Token should verify with the given secret: {:?}",
            result.err()
        );
        self
    }

    fn assert_not_signed_with(&self, secret: &str) -> &Self {
        assert!(
            verify_widget_token(self, &SecretString::from(secret)).is_err(),
            "Token should not verify with the given secret"
        );
        self
    }
}
