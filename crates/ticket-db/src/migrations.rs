//! # Database Migrations
//!
//! Embedded SQL schema for the tables the receipt reads.
//!
//! ## Tables
//! ```text
//! ┌──────────────────────┐        ┌──────────────┐
//! │  DATOS DE FACTURA    │        │  CLIENTES    │◄──┐
//! │  (one company row)   │        └──────────────┘   │ ID CLIENTE
//! └──────────────────────┘        ┌──────────────┐   │
//!                                 │  VENDEDORES  │◄──┤ ID VENDEDOR
//!                                 └──────────────┘   │
//! ┌──────────────┐  ID PRODUCTO   ┌──────────────┐   │
//! │  PRODUCTO    │◄───────────────│ DETALLE VENTA│──►│ VENTA │
//! └──────────────┘                └──────────────┘   └───────┘
//! ```
//!
//! Deployments that point at an existing database leave
//! `TICKET_RUN_MIGRATIONS` off; the schema here exists for tests, the seed
//! binary and fresh installs.
//!
//! ## Adding New Migrations
//!
//! 1. Create a new file in `migrations/sqlite/` with the next sequence number
//! 2. Use `IF NOT EXISTS` so the file is safe against pre-existing tables
//! 3. Never modify an applied migration

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// Embedded migrations from the workspace `migrations/sqlite` directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Runs all pending database migrations.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!(
        available = MIGRATOR.migrations.len(),
        "Checking for pending migrations"
    );

    MIGRATOR.run(pool).await?;

    info!("All migrations applied successfully");
    Ok(())
}
