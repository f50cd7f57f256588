//! # Receipt Repository
//!
//! The three reads behind a sale ticket and their mapping into core types.
//!
//! ## Queries
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  fetch_company()          DATOS DE FACTURA            LIMIT 1          │
//! │                                                                         │
//! │  fetch_sale(id, seller)   VENTA v                                      │
//! │                             LEFT JOIN CLIENTES c    (customer)         │
//! │                             LEFT JOIN VENDEDORES s  (only if seller)   │
//! │                           WHERE v.`ID VENTA` = ?                       │
//! │                                                                         │
//! │  fetch_items(id)          DETALLE VENTA d                              │
//! │                             LEFT JOIN PRODUCTO p                       │
//! │                           WHERE d.`ID VENTA` = ?     (row order kept)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sale id is always bound as a parameter. Column aliases
//! (`DESCUENTO_GLOBAL`, `DIRECCION_CLIENTE`, `TELEFONO_CLIENTE`) keep the
//! customer columns from colliding with the sale's own.

use tracing::debug;

use crate::error::DbResult;
use crate::record::{QueryExecutor, Record, SqlValue};
use ticket_core::types::{CompanyProfile, LineItem, SaleRecord};
use ticket_core::Amount;

// =============================================================================
// SQL
// =============================================================================

const COMPANY_SQL: &str = "SELECT `NOMBRE EMPRESA`, `DIRECCION`, `RTN`, `TELEFONO`, `CORREO`, \
     `PAGINA WEB` FROM `DATOS DE FACTURA` LIMIT 1";

const SALE_SQL: &str = "SELECT v.*, v.DESCUENTO AS DESCUENTO_GLOBAL, c.CLIENTE, \
     c.DIRECCION AS DIRECCION_CLIENTE, c.TELEFONO AS TELEFONO_CLIENTE \
     FROM VENTA v \
     LEFT JOIN CLIENTES c ON v.`ID CLIENTE` = c.`ID CLIENTE` \
     WHERE v.`ID VENTA` = ?";

const SALE_WITH_SELLER_SQL: &str = "SELECT v.*, v.DESCUENTO AS DESCUENTO_GLOBAL, c.CLIENTE, \
     c.DIRECCION AS DIRECCION_CLIENTE, c.TELEFONO AS TELEFONO_CLIENTE, \
     s.`NOMBRE VENDEDOR` AS VENDEDOR \
     FROM VENTA v \
     LEFT JOIN CLIENTES c ON v.`ID CLIENTE` = c.`ID CLIENTE` \
     LEFT JOIN VENDEDORES s ON v.`ID VENDEDOR` = s.`ID VENDEDOR` \
     WHERE v.`ID VENTA` = ?";

const ITEMS_SQL: &str = "SELECT d.*, p.`NOMBRE PRODUCTO` \
     FROM `DETALLE VENTA` d \
     LEFT JOIN PRODUCTO p ON d.ID_PRODUCTO = p.`ID PRODUCTO` \
     WHERE d.`ID VENTA` = ?";

// =============================================================================
// Repository
// =============================================================================

/// Reads receipt data through any [`QueryExecutor`].
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.receipts();
/// let company = repo.fetch_company().await?;
/// let sale = repo.fetch_sale("42", true).await?;
/// let items = repo.fetch_items("42").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ReceiptRepository<Q> {
    executor: Q,
}

impl<Q: QueryExecutor> ReceiptRepository<Q> {
    /// Creates a repository over the given executor.
    pub fn new(executor: Q) -> Self {
        ReceiptRepository { executor }
    }

    /// Returns the underlying executor.
    pub fn executor(&self) -> &Q {
        &self.executor
    }

    /// Reads the company profile. `None` when the table is empty.
    pub async fn fetch_company(&self) -> DbResult<Option<CompanyProfile>> {
        let rows = self.executor.query(COMPANY_SQL, &[]).await?;

        debug!(rows = rows.len(), "Fetched company profile");
        Ok(rows.first().map(company_from_record))
    }

    /// Reads the sale joined with its customer, and its seller when asked.
    ///
    /// `None` when no sale has this id.
    pub async fn fetch_sale(
        &self,
        sale_id: &str,
        include_seller: bool,
    ) -> DbResult<Option<SaleRecord>> {
        let sql = if include_seller {
            SALE_WITH_SELLER_SQL
        } else {
            SALE_SQL
        };

        let rows = self
            .executor
            .query(sql, &[SqlValue::from(sale_id)])
            .await?;

        debug!(sale_id, include_seller, found = !rows.is_empty(), "Fetched sale");
        Ok(rows.first().map(|row| sale_from_record(row, sale_id)))
    }

    /// Reads the sale's line items in the order the database returns them.
    pub async fn fetch_items(&self, sale_id: &str) -> DbResult<Vec<LineItem>> {
        let rows = self
            .executor
            .query(ITEMS_SQL, &[SqlValue::from(sale_id)])
            .await?;

        debug!(sale_id, count = rows.len(), "Fetched line items");
        Ok(rows.iter().map(item_from_record).collect())
    }
}

// =============================================================================
// Row Mapping
// =============================================================================

fn company_from_record(row: &Record) -> CompanyProfile {
    CompanyProfile {
        name: row.text("NOMBRE EMPRESA"),
        address: row.text("DIRECCION"),
        tax_id: row.text("RTN"),
        phone: row.text("TELEFONO"),
        email: row.text("CORREO"),
        website: row.text("PAGINA WEB"),
    }
}

fn sale_from_record(row: &Record, requested_id: &str) -> SaleRecord {
    SaleRecord {
        sale_id: row
            .text("ID VENTA")
            .unwrap_or_else(|| requested_id.to_string()),
        sale_date: row.text("FECHA DE VENTA"),
        sale_time: row.text("HORA VENTA"),
        global_discount: Amount::new(row.number("DESCUENTO_GLOBAL")),
        customer_name: row.text("CLIENTE"),
        customer_address: row.text("DIRECCION_CLIENTE"),
        customer_phone: row.text("TELEFONO_CLIENTE"),
        seller_id: row.text("ID VENDEDOR"),
        seller_name: row.text("VENDEDOR"),
    }
}

fn item_from_record(row: &Record) -> LineItem {
    // An empty product name falls back to the id as well.
    let label = row
        .text("NOMBRE PRODUCTO")
        .filter(|name| !name.is_empty())
        .or_else(|| row.text("ID_PRODUCTO"));

    LineItem {
        label,
        quantity: row.number("CANTIDAD"),
        unit_price: Amount::new(row.number("PRECIO UNITARIO")),
        discount: Amount::new(row.number("DESCUENTO")),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
