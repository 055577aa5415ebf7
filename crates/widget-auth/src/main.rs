use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use widget_auth::config::Config;
use widget_auth::handlers::token_handler::AppState;
use widget_auth::observability;
use widget_auth::parameter_store::SsmParameterStore;
use widget_auth::routes;

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    observability::init_tracing();

    info!("Starting widget token issuer");

    // Load configuration
    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!(
        widget_id_parameter = %config.widget_id_parameter,
        connect_secret_parameter = %config.connect_secret_parameter,
        ssm_operation_timeout = ?config.ssm_operation_timeout,
        ssm_max_attempts = config.ssm_max_attempts,
        "Configuration loaded successfully"
    );

    // One SSM client for the lifetime of the execution environment
    let parameter_store = SsmParameterStore::from_config(&config).await;

    let is_lambda = config.is_lambda();
    let bind_address = config.bind_address.clone();

    let state = Arc::new(AppState {
        parameter_store: Arc::new(parameter_store),
        config,
    });

    let app = routes::build_routes(state);

    if is_lambda {
        info!("Running under the Lambda runtime");
        return lambda_http::run(app).await;
    }

    let addr: SocketAddr = bind_address.parse().map_err(|e| {
        error!("Invalid bind address: {}", e);
        e
    })?;

    info!("Widget token issuer listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
