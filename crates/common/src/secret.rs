//! Secret types for protecting parameter store values from accidental logging.
//!
//! The widget id and the Amazon Connect signing secret are fetched at runtime
//! and carried as [`SecretString`]. Its `Debug` implementation redacts the
//! value, so any struct deriving `Debug` around it stays safe to log.
//!
//! # Example
//!
//! ```rust
//! use common::secret::{ExposeSecret, SecretString};
//!
//! #[derive(Debug)]
//! struct WidgetSecrets {
//!     widget_id: SecretString,
//!     connect_secret: SecretString,
//! }
//!
//! let secrets = WidgetSecrets {
//!     widget_id: SecretString::from("widget-123"),
//!     connect_secret: SecretString::from("c29tZS1zZWNyZXQ="),
//! };
//!
//! // Debug output never contains either value
//! let rendered = format!("{secrets:?}");
//! assert!(!rendered.contains("c29tZS1zZWNyZXQ="));
//!
//! // Reading the value is always an explicit call
//! let key: &str = secrets.connect_secret.expose_secret();
//! assert_eq!(key, "c29tZS1zZWNyZXQ=");
//! ```

pub use secrecy::{ExposeSecret, SecretString};

/// Returns true when the secret holds an empty string.
///
/// An empty value is a successful lookup, not a missing one. Callers decide
/// whether it is usable (a signing key is not).
#[must_use]
pub fn is_empty(secret: &SecretString) -> bool {
    secret.expose_secret().is_empty()
}
