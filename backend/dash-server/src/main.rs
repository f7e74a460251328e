use dash_server::{AppState, Metrics, build_router, build_session_verifier, logger};

use dash_config::Config;
use dash_db::UserRepository;
use dash_storage::ImageStore;

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting dash-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool (runs migrations)
    let pool = dash_db::connect(&config.database_path()?).await?;
    info!("Database connection established");

    // Image storage
    let images = ImageStore::new(config.storage_root()?);
    images.initialize().await?;
    if config.storage.delete_replaced_images {
        info!("Replaced profile pictures will be deleted after each upload");
    }

    let sessions = build_session_verifier(&config)?;
    info!("Session verification: {}", sessions.describe());

    // Build application state
    let app_state = AppState {
        users: Arc::new(UserRepository::new(pool.clone())),
        sessions,
        images,
        image_access: config.storage.image_access,
        delete_replaced_images: config.storage.delete_replaced_images,
        max_upload_bytes: config.storage.max_upload_bytes,
        metrics: Metrics::new(),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
