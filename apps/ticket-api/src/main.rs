//! # Ticket API
//!
//! HTTP server for printable sale tickets.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tracing subscriber (RUST_LOG, default "info")                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  TicketConfig::load()   ticket.toml + TICKET_*                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new()        SQLite pool (+ migrations if enabled)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  axum::serve ─── Ctrl+C / SIGTERM ──► drain ──► close pool              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ticket_api::config::TicketConfig;
use ticket_api::{build_router, AppState, RECEIPT_PATH};
use ticket_db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("Starting Ticket API server...");

    let config = TicketConfig::load().context("Failed to load configuration")?;
    let options = config.receipt_options();
    info!(
        addr = %config.bind_address(),
        db = %config.database_path.display(),
        include_seller = options.include_seller,
        include_global_discount = options.include_global_discount,
        discount_display = %options.discount_display,
        concurrent_fetch = options.concurrent_fetch,
        "Configuration loaded"
    );

    let db = Database::new(config.db_config())
        .await
        .context("Failed to open database")?;

    let state = Arc::new(AppState::new(db.clone(), options));
    let app = build_router(state);

    let bind_addr = config.bind_address();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    info!(addr = %bind_addr, path = RECEIPT_PATH, "Ticket API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
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
                error!(error = %e, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received, starting graceful shutdown...");
}
