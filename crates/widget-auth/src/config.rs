use std::collections::HashMap;
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Env var naming the SSM parameter that holds the widget id.
pub const WIDGET_ID_VAR: &str = "WIDGET_ID";

/// Env var naming the SSM parameter that holds the Connect signing secret.
pub const CONNECT_SECRET_VAR: &str = "CONNECT_SECRET";

/// Set by the Lambda runtime; its presence selects Lambda mode.
pub const LAMBDA_RUNTIME_API_VAR: &str = "AWS_LAMBDA_RUNTIME_API";

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Per-operation SSM timeout. Must stay below the 10s function timeout.
pub const DEFAULT_SSM_OPERATION_TIMEOUT_MS: u64 = 3000;
pub const MIN_SSM_OPERATION_TIMEOUT_MS: u64 = 100;
pub const MAX_SSM_OPERATION_TIMEOUT_MS: u64 = 9000;

pub const DEFAULT_SSM_MAX_ATTEMPTS: u32 = 3;
pub const MIN_SSM_MAX_ATTEMPTS: u32 = 1;
pub const MAX_SSM_MAX_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    /// SSM parameter name of the widget id (not the value).
    pub widget_id_parameter: String,
    /// SSM parameter name of the Connect secret (not the value).
    pub connect_secret_parameter: String,
    pub ssm_operation_timeout: Duration,
    pub ssm_max_attempts: u32,
    pub bind_address: String,
    pub lambda_runtime_api: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing)
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let widget_id_parameter = required_var(vars, WIDGET_ID_VAR)?;
        let connect_secret_parameter = required_var(vars, CONNECT_SECRET_VAR)?;

        let timeout_ms = bounded_var(
            vars,
            "SSM_OPERATION_TIMEOUT_MS",
            DEFAULT_SSM_OPERATION_TIMEOUT_MS,
            MIN_SSM_OPERATION_TIMEOUT_MS..=MAX_SSM_OPERATION_TIMEOUT_MS,
        )?;

        let ssm_max_attempts = bounded_var(
            vars,
            "SSM_MAX_ATTEMPTS",
            DEFAULT_SSM_MAX_ATTEMPTS,
            MIN_SSM_MAX_ATTEMPTS..=MAX_SSM_MAX_ATTEMPTS,
        )?;

        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let lambda_runtime_api = vars
            .get(LAMBDA_RUNTIME_API_VAR)
            .filter(|v| !v.is_empty())
            .cloned();

        Ok(Config {
            widget_id_parameter,
            connect_secret_parameter,
            ssm_operation_timeout: Duration::from_millis(timeout_ms),
            ssm_max_attempts,
            bind_address,
            lambda_runtime_api,
        })
    }

    /// True when running inside the Lambda execution environment.
    pub fn is_lambda(&self) -> bool {
        self.lambda_runtime_api.is_some()
    }
}

fn required_var(vars: &HashMap<String, String>, name: &str) -> Result<String, ConfigError> {
    vars.get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn bounded_var<T>(
    vars: &HashMap<String, String>,
    name: &str,
    default: T,
    range: std::ops::RangeInclusive<T>,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + std::fmt::Display + Copy,
{
    let Some(raw) = vars.get(name) else {
        return Ok(default);
    };

    let value: T = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name: name.to_string(),
        reason: format!("'{}' is not a valid number", raw),
    })?;

    if !range.contains(&value) {
        return Err(ConfigError::InvalidValue {
            name: name.to_string(),
            reason: format!(
                "{} is outside the allowed range {}-{}",
                value,
                range.start(),
                range.end()
            ),
        });
    }

    Ok(value)
}
