//! # Repository Module
//!
//! Database repositories for the receipt service.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InvoiceReportGenerator (ticket-api)                                   │
//! │       │                                                                 │
//! │       │  repo.fetch_sale("42", true)                                   │
//! │       ▼                                                                 │
//! │  ReceiptRepository<Q: QueryExecutor>                                   │
//! │  ├── fetch_company()                                                   │
//! │  ├── fetch_sale(id, include_seller)                                    │
//! │  └── fetch_items(id)                                                   │
//! │       │                                                                 │
//! │       │  query(sql, params) → Vec<Record>                              │
//! │       ▼                                                                 │
//! │  Database (SQLite pool) or a test double                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! SQL text and row-to-type mapping live here; nothing above this layer
//! sees a column name.
//!
//! ## Available Repositories
//!
//! - [`ReceiptRepository`](receipt::ReceiptRepository) - Company, sale and line-item reads

pub mod receipt;
