//! # ticket-api: Printable Sale Tickets over HTTP
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Ticket API Server                                │
//! │                                                                         │
//! │  Browser / POS ──► axum (3000) ──► handler ──► InvoiceReportGenerator  │
//! │                        │                            │                   │
//! │                   TraceLayer                   ReceiptRepository        │
//! │                  (tower-http)                       │                   │
//! │                                                     ▼                   │
//! │                                                  SQLite                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The library half exists so integration tests can build the same
//! [`Router`] that `main` serves.

pub mod config;
pub mod error;
pub mod generator;
pub mod handler;

use std::sync::Arc;

use axum::routing::{any, get};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::generator::InvoiceReportGenerator;
use ticket_core::{ReceiptOptions, SpanishDateFormatter};
use ticket_db::Database;

/// Path of the receipt endpoint.
pub const RECEIPT_PATH: &str = "/api/factura-ticket";

/// Shared application state.
pub struct AppState {
    pub db: Database,
    pub generator: InvoiceReportGenerator<Database>,
}

impl AppState {
    /// State with the Spanish date format.
    pub fn new(db: Database, options: ReceiptOptions) -> Self {
        let generator =
            InvoiceReportGenerator::new(db.clone(), options, Arc::new(SpanishDateFormatter));
        AppState { db, generator }
    }
}

/// Builds the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(RECEIPT_PATH, any(handler::factura_ticket))
        .route("/health", get(handler::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
