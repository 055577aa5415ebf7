//! Widget Token Issuer Library
//!
//! Signs JWTs for the Amazon Connect hosted chat widget. The widget id and the
//! Connect signing secret are read from SSM Parameter Store on each request;
//! the caller's JSON body is embedded as the token's `attributes` claim.
//!
//! # Modules
//!
//! - `config` - Service configuration
//! - `crypto` - Widget token signing and verification
//! - `errors` - Error types and HTTP error responses
//! - `handlers` - HTTP request handlers
//! - `models` - Response models
//! - `observability` - Tracing subscriber and metrics
//! - `parameter_store` - Secret store abstraction over SSM
//! - `routes` - Router and CORS headers
//! - `services` - Token issuance logic

pub mod config;
pub mod crypto;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod parameter_store;
pub mod routes;
pub mod services;
