//! Fixed test parameters and stores
//!
//! All values are deterministic so token contents are reproducible.

use std::collections::HashMap;
use widget_auth::config::Config;
use widget_auth::parameter_store::mock::MockParameterStore;
use widget_auth::parameter_store::ParameterStoreError;

// Parameter names (what the env vars point at)
pub const TEST_WIDGET_ID_PARAMETER: &str = "/Test/AcWebCalling/AmazonConnect/WidgetId";
pub const TEST_CONNECT_SECRET_PARAMETER: &str = "/Test/AcWebCalling/AmazonConnect/ConnectSecret";

// Parameter values
pub const TEST_WIDGET_ID: &str = "9f3c2a10-test-widget";
pub const TEST_CONNECT_SECRET: &str = "dGVzdC1jb25uZWN0LXNlY3JldC1kby1ub3QtdXNl";
pub const TEST_WRONG_SECRET: &str = "d3Jvbmctc2VjcmV0";

/// Configuration pointing at the test parameter names.
pub fn test_config() -> Config {
    let vars = HashMap::from([
        (
            "WIDGET_ID".to_string(),
            TEST_WIDGET_ID_PARAMETER.to_string(),
        ),
        (
            "CONNECT_SECRET".to_string(),
            TEST_CONNECT_SECRET_PARAMETER.to_string(),
        ),
        ("BIND_ADDRESS".to_string(), "127.0.0.1:0".to_string()),
    ]);

    Config::from_vars(&vars).expect("test configuration is valid")
}

/// Store holding both test parameters.
pub fn healthy_parameter_store() -> MockParameterStore {
    MockParameterStore::new()
        .with_parameter(TEST_WIDGET_ID_PARAMETER, TEST_WIDGET_ID)
        .with_parameter(TEST_CONNECT_SECRET_PARAMETER, TEST_CONNECT_SECRET)
}

/// Store where the Connect secret lookup fails with `error`.
pub fn failing_secret_store(error: ParameterStoreError) -> MockParameterStore {
    MockParameterStore::new()
        .with_parameter(TEST_WIDGET_ID_PARAMETER, TEST_WIDGET_ID)
        .with_failure(TEST_CONNECT_SECRET_PARAMETER, error)
}

/// Store where the widget id lookup fails with `error`.
pub fn failing_widget_store(error: ParameterStoreError) -> MockParameterStore {
    MockParameterStore::new()
        .with_failure(TEST_WIDGET_ID_PARAMETER, error)
        .with_parameter(TEST_CONNECT_SECRET_PARAMETER, TEST_CONNECT_SECRET)
}
