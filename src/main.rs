use std::net::SocketAddr;

use tokio::net::TcpListener;
use user_service::{config::Config, observability, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize tracing subscriber
    observability::init_tracing(&config);

    tracing::info!(
        "Starting {} on port {}",
        config.service.name,
        config.service.port
    );

    // Create shared application state and establish the database
    // connection in the background. A connection failure is logged but
    // never prevents the listener from starting.
    let state = AppState::new(config.clone());
    state.spawn_database_init();

    // Build HTTP router with middleware
    let app = routes::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.service.port));

    tracing::info!("HTTP server: http://{}", addr);
    tracing::info!("  GET    /users - List users");
    tracing::info!("  POST   /users - Create user");
    tracing::info!("  GET    /users/{{id}} - Get user");
    tracing::info!("  PUT    /users/{{id}} - Update user");
    tracing::info!("  DELETE /users/{{id}} - Delete user");
    tracing::info!("Swagger docs: http://{}/api-docs", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped gracefully");
    Ok(())
}

/// Wait for shutdown signal (SIGTERM, SIGINT, or Ctrl+C)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        }
    }
}
