//! CouponHub Server: one coupon per visitor per cooldown window.
//!
//! Main entry point that wires all crates together and starts the server.

use std::net::SocketAddr;

use tracing_subscriber::{EnvFilter, fmt};

use couponhub_api::{AppState, build_app};
use couponhub_core::config::{AppConfig, LogFormat};
use couponhub_core::error::{AppError, ErrorKind};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file, the environment overlay, and variables
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("COUPONHUB_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    AppConfig::load(&config_path)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .init(),
        LogFormat::Pretty => fmt().pretty().with_env_filter(filter).init(),
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting CouponHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Coupon store ─────────────────────────────────────
    tracing::info!("Connecting coupon store (provider: {})...", config.store.provider);
    let store = couponhub_database::connect_store(&config).await?;
    tracing::info!("Coupon store ready");

    // ── Step 2: Services and router ──────────────────────────────
    if config.auth.password_hash.is_empty() {
        tracing::warn!("auth.password_hash is not set; admin endpoints will reject every login");
    }
    let addr = config.server.bind_addr();
    let grace = config.server.shutdown_grace();
    let state = AppState::new(config, store)?;
    let app = build_app(state);

    // ── Step 3: Serve ────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;
    tracing::info!("Listening on http://{}", addr);

    let (draining_tx, draining_rx) = tokio::sync::oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = draining_tx.send(());
        })
        .await
    });

    let grace_elapsed = async move {
        if draining_rx.await.is_ok() {
            tokio::time::sleep(grace).await;
        } else {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        joined = &mut server => {
            joined
                .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server task failed", e))?
                .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server failed", e))?;
        }
        _ = grace_elapsed => {
            tracing::warn!(
                grace_seconds = grace.as_secs(),
                "Shutdown grace period elapsed, closing remaining connections"
            );
            server.abort();
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections...");
}
