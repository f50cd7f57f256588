//! # HTTP Handlers
//!
//! ```text
//! GET  /api/factura-ticket?id=<sale>   → 200 text/html  (ticket)
//!                                      → 400 text/plain (no id)
//!                                      → 500 text/html  (error page)
//! *    /api/factura-ticket             → 405, Allow: GET
//! GET  /health                         → 200 "OK" / 503
//! ```

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use tracing::{error, info_span, warn, Instrument};

use crate::error::TicketError;
use crate::AppState;
use ticket_core::validation::SALE_ID_PARAM;
use ticket_core::ReceiptError;

/// Receipt endpoint.
///
/// Registered for every method so anything but GET gets the plain 405 body
/// with an `Allow` header.
pub async fn factura_ticket(
    method: Method,
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    if method != Method::GET {
        warn!(%method, "Rejected non-GET request");
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "GET")],
            "Method Not Allowed",
        )
            .into_response();
    }

    // First occurrence wins when the parameter is repeated.
    let sale_id = params
        .into_iter()
        .find(|(key, _)| key == SALE_ID_PARAM)
        .map(|(_, value)| value);

    let span = info_span!(
        "factura_ticket",
        sale_id = sale_id.as_deref().unwrap_or_default()
    );

    async move {
        match state.generator.generate(sale_id.as_deref()).await {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                log_failure(&err);
                err.for_sale(sale_id.unwrap_or_default()).into_response()
            }
        }
    }
    .instrument(span)
    .await
}

fn log_failure(err: &TicketError) {
    match err {
        TicketError::Receipt(ReceiptError::MissingParameter(e)) => {
            warn!(error = %e, "Receipt requested without a sale id");
        }
        TicketError::Receipt(e) if e.is_not_found() => {
            warn!(error = %e, "Receipt data not found");
        }
        other => {
            error!(error = %other, "Receipt generation failed");
        }
    }
}

/// Health check endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if state.db.health_check().await {
        (StatusCode::OK, "OK")
    } else {
        warn!("Health check failed: database unavailable");
        (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
    }
}
