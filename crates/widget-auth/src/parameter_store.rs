//! Parameter store access.
//!
//! The widget id and Connect secret live in SSM Parameter Store. Lookups
//! return [`SecretString`] so values never reach `Debug` output, and every
//! failure is a distinct [`ParameterStoreError`]: a parameter that exists with
//! an empty value is `Ok("")`, never an error, and an error is never an empty
//! value.

use crate::config::Config;
use async_trait::async_trait;
use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion};
use aws_sdk_ssm::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_ssm::operation::get_parameter::{GetParameterError, GetParameterOutput};
use common::secret::SecretString;
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParameterStoreError {
    #[error("Parameter name must not be empty")]
    InvalidName,

    #[error("Parameter not found: {0}")]
    NotFound(String),

    #[error("Access denied to parameter: {0}")]
    AccessDenied(String),

    #[error("Parameter has no value: {0}")]
    MissingValue(String),

    #[error("Parameter store service error: {0}")]
    Service(String),

    #[error("Parameter store transport error: {0}")]
    Transport(String),
}

impl ParameterStoreError {
    /// Bounded label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ParameterStoreError::InvalidName => "invalid_name",
            ParameterStoreError::NotFound(_) => "not_found",
            ParameterStoreError::AccessDenied(_) => "access_denied",
            ParameterStoreError::MissingValue(_) => "missing_value",
            ParameterStoreError::Service(_) => "service",
            ParameterStoreError::Transport(_) => "transport",
        }
    }
}

/// Read-only access to named configuration secrets (enables mocking).
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetch a parameter value by name, optionally decrypting a SecureString.
    async fn get_parameter(
        &self,
        name: &str,
        with_decryption: bool,
    ) -> Result<SecretString, ParameterStoreError>;
}

/// SSM Parameter Store client.
///
/// Built once at cold start and shared by every invocation.
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    client: aws_sdk_ssm::Client,
}

impl SsmParameterStore {
    pub fn new(client: aws_sdk_ssm::Client) -> Self {
        Self { client }
    }

    /// Load AWS configuration from the environment and apply the configured
    /// operation timeout and retry budget.
    pub async fn from_config(config: &Config) -> Self {
        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(config.ssm_operation_timeout)
            .build();

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .timeout_config(timeout_config)
            .retry_config(RetryConfig::standard().with_max_attempts(config.ssm_max_attempts))
            .load()
            .await;

        Self::new(aws_sdk_ssm::Client::new(&sdk_config))
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    #[instrument(skip_all, fields(parameter = %name))]
    async fn get_parameter(
        &self,
        name: &str,
        with_decryption: bool,
    ) -> Result<SecretString, ParameterStoreError> {
        if name.is_empty() {
            return Err(ParameterStoreError::InvalidName);
        }

        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(with_decryption)
            .send()
            .await
            .map_err(|e| classify_sdk_error(name, e))?;

        parameter_value(name, output)
    }
}

/// A parameter with no value is an error; an empty value is not.
fn parameter_value(
    name: &str,
    output: GetParameterOutput,
) -> Result<SecretString, ParameterStoreError> {
    output
        .parameter
        .and_then(|p| p.value)
        .map(SecretString::from)
        .ok_or_else(|| ParameterStoreError::MissingValue(name.to_string()))
}

fn classify_sdk_error(name: &str, err: SdkError<GetParameterError>) -> ParameterStoreError {
    match err {
        SdkError::ServiceError(context) => classify_service_error(name, &context.into_err()),
        other => ParameterStoreError::Transport(DisplayErrorContext(&other).to_string()),
    }
}

fn classify_service_error(name: &str, err: &GetParameterError) -> ParameterStoreError {
    if err.is_parameter_not_found() || err.is_parameter_version_not_found() {
        ParameterStoreError::NotFound(name.to_string())
    } else if err.code() == Some("AccessDeniedException") {
        ParameterStoreError::AccessDenied(name.to_string())
    } else {
        ParameterStoreError::Service(format!(
            "{}: {}",
            err.code().unwrap_or("Unknown"),
            err.message().unwrap_or("no message")
        ))
    }
}

/// In-memory parameter store for tests and local runs.
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock parameter store that records every lookup.
    ///
    /// Unknown names return `NotFound`, like SSM.
    #[derive(Debug, Default)]
    pub struct MockParameterStore {
        entries: HashMap<String, Result<String, ParameterStoreError>>,
        call_count: AtomicUsize,
        calls: Mutex<Vec<(String, bool)>>,
    }

    impl MockParameterStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Store a value for `name`.
        pub fn with_parameter(mut self, name: &str, value: &str) -> Self {
            self.entries.insert(name.to_string(), Ok(value.to_string()));
            self
        }

        /// Make lookups of `name` fail with `error`.
        pub fn with_failure(mut self, name: &str, error: ParameterStoreError) -> Self {
            self.entries.insert(name.to_string(), Err(error));
            self
        }

        /// Number of lookups made.
        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }

        /// Lookups made, as `(name, with_decryption)`, in call order.
        pub fn calls(&self) -> Vec<(String, bool)> {
            self.calls
                .lock()
                .map(|calls| calls.clone())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl ParameterStore for MockParameterStore {
        async fn get_parameter(
            &self,
            name: &str,
            with_decryption: bool,
        ) -> Result<SecretString, ParameterStoreError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut calls) = self.calls.lock() {
                calls.push((name.to_string(), with_decryption));
            }

            if name.is_empty() {
                return Err(ParameterStoreError::InvalidName);
            }

            match self.entries.get(name) {
                Some(Ok(value)) => Ok(SecretString::from(value.clone())),
                Some(Err(e)) => Err(e.clone()),
                None => Err(ParameterStoreError::NotFound(name.to_string())),
            }
        }
    }

}
