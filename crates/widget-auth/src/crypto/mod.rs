use crate::errors::WidgetAuthError;
use common::jwt::{JwtValidationError, WidgetClaims, MAX_JWT_SIZE_BYTES};
use common::secret::{self, ExposeSecret, SecretString};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::instrument;

/// Signature algorithm the Connect widget expects.
pub const WIDGET_TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Sign widget claims with the Amazon Connect widget secret (HS256)
///
/// An empty secret is invalid key material: HMAC would accept it and the
/// widget would reject every token.
#[instrument(skip_all)]
pub fn sign_widget_token(
    claims: &WidgetClaims,
    connect_secret: &SecretString,
) -> Result<String, WidgetAuthError> {
    if secret::is_empty(connect_secret) {
        return Err(WidgetAuthError::Signing(
            "Connect secret is empty".to_string(),
        ));
    }

    let encoding_key = EncodingKey::from_secret(connect_secret.expose_secret().as_bytes());

    let mut header = Header::new(WIDGET_TOKEN_ALGORITHM);
    header.typ = Some("JWT".to_string());

    encode(&header, claims, &encoding_key)
        .map_err(|e| WidgetAuthError::Signing(format!("JWT signing operation failed: {}", e)))
}

/// Verify a widget token against the Connect secret
///
/// Not served over HTTP; used by test assertions and for diagnosing tokens
/// the widget rejects.
///
/// Validates:
/// - Token size (must be <= MAX_JWT_SIZE_BYTES), before any parsing
/// - HS256 signature
/// - Expiration (`exp` claim)
#[instrument(skip_all)]
pub fn verify_widget_token(
    token: &str,
    connect_secret: &SecretString,
) -> Result<WidgetClaims, JwtValidationError> {
    if token.len() > MAX_JWT_SIZE_BYTES {
        tracing::debug!(
            target: "crypto",
            token_size = token.len(),
            max_size = MAX_JWT_SIZE_BYTES,
            "Token rejected: size exceeds maximum allowed"
        );
        return Err(JwtValidationError::TokenTooLarge);
    }

    let decoding_key = DecodingKey::from_secret(connect_secret.expose_secret().as_bytes());

    let mut validation = Validation::new(WIDGET_TOKEN_ALGORITHM);
    validation.validate_exp = true;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "iat", "sub"]);

    let token_data = decode::<WidgetClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(target: "crypto", error = %e, "Token verification failed");
        match e.kind() {
            ErrorKind::ExpiredSignature => JwtValidationError::Expired,
            ErrorKind::InvalidSignature => JwtValidationError::InvalidSignature,
            _ => JwtValidationError::MalformedToken,
        }
    })?;

    Ok(token_data.claims)
}
