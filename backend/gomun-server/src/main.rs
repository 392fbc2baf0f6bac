use gomun_server::error::Result as ServerErrorResult;
use gomun_server::{AppState, build_router, logger};

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // Load and validate configuration
    let config = gomun_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file_path = config.log_file_path()?;
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting gomun-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Stores live for the whole process
    let app_state = AppState::from_config(&config);
    info!(
        "Stores ready: {} users, {} profiles",
        app_state.users.len().await,
        app_state.profiles.len().await
    );

    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Without a signal handler, run until killed
            std::future::pending::<()>().await;
        }
    }
}
