//! Countdown Pad - a keypad-driven countdown timer served over HTTP
//! 
//! This is the main entry point for the countdown-pad application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use countdown_pad::{
    config::Config,
    state::AppState,
    api::create_router,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_pad={},tower_http=info", config.log_level()))
        .init();

    info!("Starting countdown-pad server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, tick={}ms",
          config.host, config.port, config.tick_ms);

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), config.tick()));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /digit/:d - Enter a keypad digit (0-9)");
    info!("  POST /start    - Start the countdown");
    info!("  POST /stop     - Reset a set timer or pause a running one");
    info!("  GET  /status   - Current timer and server status");
    info!("  GET  /keypad   - Keypad layout");
    info!("  GET  /health   - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
