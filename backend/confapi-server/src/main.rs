use confapi_server::{
    AppState, ServerError, ShutdownSignal, UploadStore, build_router, logger,
    run_retention_loop,
};

use confapi_platform::LocalPlatform;

use std::error::Error;
use std::panic::Location;
use std::path::Path;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{error, info};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;
use tokio::runtime::Handle;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; CONFAPI_* variables may come from there
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = confapi_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file_path = config.log_file_path()?;
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting confapi-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: format!("Failed to install Prometheus recorder: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let export_dir = config.export_path()?;
    let upload_dir = config.upload_path()?;
    ensure_dir(&export_dir)?;
    ensure_dir(&upload_dir)?;
    info!("Exports: {}", export_dir.display());
    info!("Uploads: {}", upload_dir.display());

    let platform = LocalPlatform::new(
        Handle::current(),
        export_dir,
        config.backup.task_retention(),
    );
    let backup = platform
        .backup_service(&config.backup.base_url)
        .map_err(ServerError::from)?;
    let uploads = UploadStore::new(upload_dir, config.backup.max_upload_bytes());

    let shutdown = ShutdownSignal::new();

    // Build application state
    let app_state = AppState {
        backup: Arc::new(backup),
        platform: platform.clone(),
        uploads: uploads.clone(),
        api_config: config.api.clone(),
        metrics: Some(prometheus),
    };

    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.trigger();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    let retention = tokio::spawn(run_retention_loop(
        platform.task_manager.clone(),
        uploads,
        config.backup.reap_interval(),
        config.backup.task_retention(),
        shutdown.listener(),
    ));

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    let stopped = shutdown.listener();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            stopped.triggered().await;
            info!("Graceful shutdown complete");
        })
        .await?;

    if let Err(e) = retention.await {
        error!("Retention loop ended abnormally: {}", e);
    }

    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<(), ServerError> {
    std::fs::create_dir_all(dir).map_err(|e| ServerError::Io {
        path: dir.to_path_buf(),
        source: e,
    })
}
