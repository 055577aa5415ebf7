//! Common utilities and types shared across the widget auth crates.

#![warn(clippy::pedantic)]

/// Module for secret types that prevent accidental logging
pub mod secret;

/// Module for widget JWT claims and constants
pub mod jwt;
