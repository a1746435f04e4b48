mod error;
mod logger;
mod pages;
mod routes;
mod session;
mod state;
mod views;

use crate::state::AppState;

use std::error::Error;

use log::{info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = panel_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = panel_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting panel-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    if config.session.is_default_secret() {
        warn!("Session secret is the development default - set PANEL_SESSION_SECRET in production");
    }

    // Build application state and router
    let bind_addr = config.bind_addr();
    let state = AppState::from_config(config)?;
    let app = routes::build_router(state);

    // Create TCP listener
    let listener = TcpListener::bind(&bind_addr).await?;
    let actual_addr = listener.local_addr()?;
    info!("Panel listening on {}", actual_addr);

    // Serve until SIGINT
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => warn!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Shutdown complete");
    Ok(())
}
