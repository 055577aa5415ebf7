//! # Widget Auth Test Utilities
//!
//! Shared test utilities for the widget token issuer.
//!
//! This crate provides:
//! - Fixed parameter names and secret values
//! - Pre-populated in-memory parameter stores
//! - Server test harness (TestTokenServer for E2E tests)
//! - Custom assertions (TokenAssertions trait)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use widget_auth_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), anyhow::Error> {
//!     let server = TestTokenServer::spawn(healthy_parameter_store()).await?;
//!
//!     let token = server.request_token(&serde_json::json!({"name": "Jane"})).await?;
//!
//!     token
//!         .assert_valid_widget_jwt()
//!         .assert_for_widget(TEST_WIDGET_ID)
//!         .assert_signed_with(TEST_CONNECT_SECRET);
//!     Ok(())
//! }
//! ```

pub mod assertions;
pub mod fixtures;
pub mod server_harness;

// Re-export commonly used items
pub use assertions::*;
pub use fixtures::*;
pub use server_harness::*;
