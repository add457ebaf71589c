//! Xiaofeilun API Server
//!
//! Serves the strategy, news, chat-proxy and intent endpoints.
//! Stateless: every request builds and discards its own data.

use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use xiaofeilun::config::{get_environment, AppConfig};
use xiaofeilun::core::http::start_server;
use xiaofeilun::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = AppConfig::from_env();
    let env = get_environment();
    info!("Starting Xiaofeilun API Server");
    info!(environment = %env, "Environment");
    info!(
        upstream_timeout_secs = config.upstream_timeout.as_secs(),
        llm_configured = config.deepseek_api_key.is_some(),
        "Upstream configuration"
    );

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        result = start_server(config) => {
            if let Err(e) = result {
                error!(error = %e, "HTTP server error");
                return Err(e);
            }
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
