//! ## Run
//!
//! ```bash
//! cargo run -p cadenza-server
//! ```

use cadenza_core::logging::{init_logging_json, init_logging_pretty};
use cadenza_server::{Config, LogFormat};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    match config.log_format {
        LogFormat::Pretty => init_logging_pretty(),
        LogFormat::Json => init_logging_json(),
    }

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, environment = %config.environment, "cadenza-server listening");

    axum::serve(listener, cadenza_server::router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("cadenza-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
