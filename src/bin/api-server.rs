//! Junk filter API server
//!
//! Serves the junk-signal evaluation over HTTP, plus health and metrics.
//! The service is stateless between requests and can be horizontally scaled.

use dotenvy::dotenv;
use junkfilter::config::{get_environment, Config};
use junkfilter::core::http::start_server;
use junkfilter::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = Config::from_env()?;
    let port = config.port;

    info!("Starting junk filter API server");
    info!(environment = %get_environment(), "Environment");
    info!(
        rule_set = %config.rule_set_path.display(),
        signals = %config.signals_path.display(),
        "Input files"
    );
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
