//! End-to-end tests for `/api/factura-ticket` against an in-memory database.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::util::ServiceExt;

use ticket_api::{build_router, AppState};
use ticket_core::{DiscountDisplay, ReceiptOptions};
use ticket_db::{Database, DbConfig};

// =============================================================================
// Helpers
// =============================================================================

const FIXTURES: &[&str] = &[
    "INSERT INTO `DATOS DE FACTURA` (`NOMBRE EMPRESA`, `DIRECCION`, `RTN`, `TELEFONO`, `CORREO`, `PAGINA WEB`) \
     VALUES ('Tienda X', 'Calle 1', '0801', '2222', 'x@t.hn', 'www.t.hn')",
    "INSERT INTO CLIENTES (`ID CLIENTE`, CLIENTE, DIRECCION, TELEFONO) VALUES (1, 'Luis & Hijos', 'Col. Centro', '9999')",
    "INSERT INTO VENDEDORES (`ID VENDEDOR`, `NOMBRE VENDEDOR`) VALUES (3, 'Ana')",
    "INSERT INTO PRODUCTO (`ID PRODUCTO`, `NOMBRE PRODUCTO`) VALUES (10, 'Cafe <molido>')",
    "INSERT INTO VENTA (`ID VENTA`, `ID CLIENTE`, `ID VENDEDOR`, `FECHA DE VENTA`, `HORA VENTA`, DESCUENTO) \
     VALUES (42, 1, 3, '2024-03-05', '10:15', 5)",
    "INSERT INTO `DETALLE VENTA` (`ID VENTA`, ID_PRODUCTO, CANTIDAD, `PRECIO UNITARIO`, DESCUENTO) \
     VALUES (42, 10, 2, 10, 1)",
    "INSERT INTO VENTA (`ID VENTA`, `FECHA DE VENTA`) VALUES (7, NULL)",
];

async fn database(with_fixtures: bool) -> Database {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    if with_fixtures {
        for sql in FIXTURES {
            sqlx::query(sql).execute(db.pool()).await.unwrap();
        }
    }
    db
}

async fn app_with(options: ReceiptOptions) -> Router {
    let db = database(true).await;
    build_router(Arc::new(AppState::new(db, options)))
}

async fn app() -> Router {
    app_with(ReceiptOptions::default()).await
}

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

// =============================================================================
// Success
// =============================================================================

#[tokio::test]
async fn test_receipt_reference_sale() {
    let (status, content_type, body) = send(app().await, "GET", "/api/factura-ticket?id=42").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));

    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("<html lang=\"es\">"));
    assert!(body.contains("<title>Factura 42</title>"));
    assert!(body.contains("Tienda X"));
    assert!(body.contains("RECIBO #42<br>5/3/2024 10:15"));
    assert!(body.contains("Vendedor: <span id=\"vendedor\">Ana</span>"));
    assert!(body.contains("Luis &amp; Hijos"));
    assert!(body.contains("Cafe &lt;molido&gt;"));
    assert!(body.contains("<td style=\"text-align: center;\">2</td>"));
    assert!(body.contains("<td style=\"text-align: right;\">20.00</td>"));
    assert!(body.contains(
        "<td id=\"descuento_total_general\" style=\"text-align: right;\">6.00</td>"
    ));
    assert!(body.contains("<td id=\"totalventa\" style=\"text-align: right;\">14.00</td>"));
    assert!(body.contains("window.print()"));
    assert!(body.contains("Imprimir Manualmente"));
}

#[tokio::test]
async fn test_receipt_zero_items() {
    let (status, _, body) = send(app().await, "GET", "/api/factura-ticket?id=7").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<tr class=\"item\">"));
    assert!(body.contains(
        "<td id=\"descuento_total_general\" style=\"text-align: right;\">0.00</td>"
    ));
    assert!(body.contains("<td id=\"totalventa\" style=\"text-align: right;\">0.00</td>"));
    assert!(body.contains("RECIBO #7<br>N/A"));
    assert!(body.contains("Cliente: <span id=\"nomcliente\">N/A</span>"));
}

#[tokio::test]
async fn test_receipt_per_line_layout_without_seller() {
    let options = ReceiptOptions {
        include_seller: false,
        discount_display: DiscountDisplay::PerLine,
        ..Default::default()
    };
    let (status, _, body) = send(app_with(options).await, "GET", "/api/factura-ticket?id=42").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("Vendedor:"));
    assert!(body.contains("<td>Desc.</td>"));
    assert!(body.contains("colspan=\"4\""));
}

#[tokio::test]
async fn test_receipt_concurrent_fetch() {
    let options = ReceiptOptions {
        concurrent_fetch: true,
        ..Default::default()
    };
    let (status, _, body) = send(app_with(options).await, "GET", "/api/factura-ticket?id=42").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("14.00"));
}

#[tokio::test]
async fn test_first_id_wins() {
    let (status, _, body) = send(app().await, "GET", "/api/factura-ticket?id=42&id=7").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("RECIBO #42"));
}

// =============================================================================
// Request errors
// =============================================================================

#[tokio::test]
async fn test_missing_id_is_bad_request() {
    for uri in ["/api/factura-ticket", "/api/factura-ticket?id=", "/api/factura-ticket?other=1"] {
        let (status, content_type, body) = send(app().await, "GET", uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
        assert_eq!(body, "Error: Falta el parámetro \"id\" (ID de Venta) en la URL.");
    }
}

#[tokio::test]
async fn test_non_get_is_method_not_allowed() {
    for method in ["POST", "PUT", "DELETE"] {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/api/factura-ticket?id=42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "GET");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Method Not Allowed");
    }
}

// =============================================================================
// Generation errors
// =============================================================================

#[tokio::test]
async fn test_unknown_sale_is_error_page() {
    let (status, content_type, body) = send(app().await, "GET", "/api/factura-ticket?id=999").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));
    assert!(body.contains("<title>Error</title>"));
    assert!(body.contains("Error al generar la factura"));
    assert!(body.contains("venta ID: 999"));
    assert!(body.contains("Venta con ID 999 no encontrada."));
}

#[tokio::test]
async fn test_script_id_is_escaped() {
    let (status, _, body) = send(
        app().await,
        "GET",
        "/api/factura-ticket?id=%3Cscript%3E",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("&lt;script&gt;"));
    assert!(!body.contains("<script>"));
}

#[tokio::test]
async fn test_empty_company_table_is_error_page() {
    let db = database(false).await;
    let app = build_router(Arc::new(AppState::new(db, ReceiptOptions::default())));

    let (status, _, body) = send(app, "GET", "/api/factura-ticket?id=42").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("No se encontraron datos de la empresa en DATOS DE FACTURA."));
}

#[tokio::test]
async fn test_query_failure_is_error_page() {
    // No migrations: the tables do not exist.
    let db = Database::new(DbConfig::in_memory().run_migrations(false))
        .await
        .unwrap();
    let app = build_router(Arc::new(AppState::new(db, ReceiptOptions::default())));

    let (status, _, body) = send(app, "GET", "/api/factura-ticket?id=42").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("Database error"));
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let (status, _, body) = send(app().await, "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}
