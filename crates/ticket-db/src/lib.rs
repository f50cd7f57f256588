//! # ticket-db: Database Layer for Ticket Receipts
//!
//! This crate provides the reads behind a printed sale ticket. It uses SQLite
//! through sqlx for async access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Ticket Receipt Data Flow                           │
//! │                                                                         │
//! │  GET /api/factura-ticket?id=42                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     ticket-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (receipt.rs)  │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ company       │    │ 001_receipt_ │  │   │
//! │  │   │ QueryExecutor │    │ sale + joins  │    │   schema.sql │  │   │
//! │  │   │               │    │ line items    │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ./ticket.db  (TICKET_DATABASE_PATH)                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`record`] - `QueryExecutor`, `Record` and `SqlValue`
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The receipt repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ticket_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./ticket.db")).await?;
//!
//! let repo = db.receipts();
//! let sale = repo.fetch_sale("42", true).await?;
//! let items = repo.fetch_items("42").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod record;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use record::{QueryExecutor, Record, SqlValue};
pub use repository::receipt::ReceiptRepository;
