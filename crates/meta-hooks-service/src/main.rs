//! Meta-Hooks Service - webhook receiver for Facebook, Instagram and Threads
//!
//! This is the main entry point for the meta-hooks service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use meta_hooks_service::{create_router, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,meta_hooks=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Meta-Hooks Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();
    let listen_addr = config.listen_addr();

    // Update history lives for the lifetime of the process
    let state = AppState::in_memory(config);

    tracing::info!(
        listen_addr = %listen_addr,
        app_secret_configured = state.has_app_secret(),
        verify_token = %state.config.verify_token,
        "Service configuration loaded"
    );

    let app = create_router(state);
    tracing::info!("Router configured with all webhook endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
