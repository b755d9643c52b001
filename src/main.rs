//! Hint Clock - a polling display for shared escape-room timer state
//!
//! This is the main entry point for the hint-clock application.

use std::sync::Arc;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use hint_clock::{
    config::Config,
    state::AppState,
    api::create_router,
    services::EndpointClient,
    tasks::{poll_task, render_task, terminal_display_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they do not break the clock line on stdout
    tracing_subscriber::fmt()
        .with_env_filter(format!("hint_clock={},tower_http=info", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    config.validate()?;

    info!("Starting hint-clock v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: endpoint={}, poll={}ms, render={}ms",
          config.endpoint, config.poll_interval_ms, config.render_interval_ms);

    let client = EndpointClient::new(config.endpoint.clone(), config.request_timeout())
        .context("Failed to build HTTP client")?;

    // Create application state
    let state = Arc::new(AppState::new(config.endpoint.clone(), config.host.clone(), config.port));

    // Start the background tasks
    tokio::spawn(poll_task(Arc::clone(&state), client, config.poll_interval()));
    tokio::spawn(render_task(Arc::clone(&state), config.render_interval()));
    if !config.quiet {
        tokio::spawn(terminal_display_task(Arc::clone(&state)));
    }

    if config.no_server {
        info!("Display server disabled");
        shutdown_signal().await.context("Failed to install signal handler")?;
    } else {
        let app = create_router(Arc::clone(&state));
        let addr = config.address();
        let listener = TcpListener::bind(&addr).await
            .with_context(|| format!("Failed to bind display server to {}", addr))?;

        info!("Display server running on http://{}", addr);
        info!("Endpoints:");
        info!("  GET /display - Clock, hints, phase and score as JSON");
        info!("  GET /clock   - Clock region as text");
        info!("  GET /hints   - Hints region as text");
        info!("  GET /status  - Snapshot and poll health");
        info!("  GET /health  - Health check");

        let server = axum::serve(listener, app);

        tokio::select! {
            result = server => {
                if let Err(e) = result {
                    tracing::error!("Server error: {}", e);
                }
            }
            result = shutdown_signal() => {
                result.context("Failed to install signal handler")?;
                info!("Shutdown signal received");
            }
        }
    }

    if !config.quiet {
        println!();
    }
    info!("Shutdown complete");
    Ok(())
}
