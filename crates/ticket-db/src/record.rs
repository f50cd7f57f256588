//! # Query Collaborator
//!
//! The receipt only ever needs one capability from the storage engine:
//! run a parameterized SQL statement and hand back the rows.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  QueryExecutor::query(sql, params) → Vec<Record>                       │
//! │                                                                         │
//! │  sql     "SELECT ... WHERE v.`ID VENTA` = ?"   (never concatenated)    │
//! │  params  [SqlValue::Text("42")]                  bound positionally     │
//! │                                                                         │
//! │  Record  ordered (column, value) pairs, as the driver returned them    │
//! │          ┌──────────────────┬──────────────────────┐                   │
//! │          │ "NOMBRE EMPRESA" │ Text("Tienda X")     │                   │
//! │          │ "DESCUENTO"      │ Real(5.0)            │                   │
//! │          │ "CLIENTE"        │ Null                 │                   │
//! │          └──────────────────┴──────────────────────┘                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The repository layer depends only on this trait, so tests can swap in a
//! failing executor without touching SQLite.

use std::future::Future;

use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Arguments, Column, Row, TypeInfo, ValueRef};
use tracing::{debug, warn};

use crate::error::{DbError, DbResult};
use crate::pool::Database;

// =============================================================================
// Values
// =============================================================================

/// A single column value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    /// Reads the value as a float, treating NULL and empty text as 0.
    ///
    /// Text is read up to the end of its leading number, so `"12.5 kg"` is
    /// 12.5. Text with no leading number is reported as `None` so the caller
    /// can decide how loud to be about it.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SqlValue::Null => Some(0.0),
            SqlValue::Integer(i) => Some(*i as f64),
            SqlValue::Real(r) => Some(*r),
            SqlValue::Text(t) => {
                let t = t.trim();
                if t.is_empty() {
                    Some(0.0)
                } else {
                    leading_number(t)
                }
            }
        }
    }

    /// String form of the value; `None` for NULL.
    pub fn as_text(&self) -> Option<String> {
        match self {
            SqlValue::Null => None,
            SqlValue::Integer(i) => Some(i.to_string()),
            SqlValue::Real(r) => Some(ticket_core::money::shortest(*r)),
            SqlValue::Text(t) => Some(t.clone()),
        }
    }

}

/// Parses the longest `[+-]digits[.digits][e[+-]digits]` prefix of `text`.
fn leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    text[..end].parse().ok()
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

// =============================================================================
// Record
// =============================================================================

/// One result row: column names and values in select order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    columns: Vec<(String, SqlValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column (builder style, used by tests and fakes).
    pub fn with(mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.push(column, value);
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<SqlValue>) {
        self.columns.push((column.into(), value.into()));
    }

    /// Value of a column. With duplicate names (e.g. `v.*` plus a join) the
    /// last one wins, as it does for driver-built objects.
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.columns
            .iter()
            .rev()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Text form of a column; missing and NULL are both `None`.
    pub fn text(&self, column: &str) -> Option<String> {
        self.get(column).and_then(SqlValue::as_text)
    }

    /// Numeric form of a column; missing, NULL and unparseable text are 0.
    pub fn number(&self, column: &str) -> f64 {
        match self.get(column) {
            None => 0.0,
            Some(value) => value.as_f64().unwrap_or_else(|| {
                warn!(column, ?value, "Non-numeric value treated as 0");
                0.0
            }),
        }
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SqlValue::Null)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Real(value)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

// =============================================================================
// Query Executor
// =============================================================================

/// Runs a parameterized statement and returns its rows in order.
pub trait QueryExecutor: Send + Sync {
    fn query(
        &self,
        sql: &str,
        params: &[SqlValue],
    ) -> impl Future<Output = DbResult<Vec<Record>>> + Send;
}

impl QueryExecutor for Database {
    async fn query(&self, sql: &str, params: &[SqlValue]) -> DbResult<Vec<Record>> {
        let args = bind_params(params)?;

        let rows = sqlx::query_with(sql, args)
            .fetch_all(self.pool())
            .await
            .map_err(|e| {
                warn!(error = %e, "Query execution failed");
                DbError::from(e)
            })?;

        debug!(rows = rows.len(), "Query returned rows");

        rows.iter().map(decode_row).collect()
    }
}

fn bind_params<'q>(params: &[SqlValue]) -> DbResult<SqliteArguments<'q>> {
    let mut args = SqliteArguments::default();
    for param in params {
        let bound = match param {
            SqlValue::Null => args.add(None::<String>),
            SqlValue::Integer(i) => args.add(*i),
            SqlValue::Real(r) => args.add(*r),
            SqlValue::Text(t) => args.add(t.clone()),
        };
        bound.map_err(|e| DbError::Internal(format!("Failed to bind parameter: {}", e)))?;
    }
    Ok(args)
}

/// Decodes every column by its runtime SQLite storage class.
fn decode_row(row: &SqliteRow) -> DbResult<Record> {
    let mut record = Record::new();

    for (idx, column) in row.columns().iter().enumerate() {
        let name = column.name();

        let storage = {
            let raw = row.try_get_raw(idx)?;
            if raw.is_null() {
                None
            } else {
                Some(raw.type_info().name().to_ascii_uppercase())
            }
        };

        let value = match storage.as_deref() {
            None => SqlValue::Null,
            Some("INTEGER" | "INT" | "INT8" | "BIGINT" | "BOOLEAN") => {
                SqlValue::Integer(row.try_get_unchecked::<i64, _>(idx)?)
            }
            Some("REAL" | "FLOAT" | "DOUBLE" | "NUMERIC") => {
                SqlValue::Real(row.try_get_unchecked::<f64, _>(idx)?)
            }
            Some("BLOB") => {
                let bytes = row.try_get_unchecked::<Vec<u8>, _>(idx)?;
                SqlValue::Text(String::from_utf8_lossy(&bytes).into_owned())
            }
            Some(_) => SqlValue::Text(
                row.try_get_unchecked::<String, _>(idx)
                    .map_err(|e| DbError::decode(name, e))?,
            ),
        };

        record.push(name, value);
    }

    Ok(record)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;

    #[test]
    fn test_number_reads() {
        let record = Record::new()
            .with("CANTIDAD", 2_i64)
            .with("PRECIO UNITARIO", "10.50")
            .with("DESCUENTO", SqlValue::Null)
            .with("RARO", "abc");

        assert_eq!(record.number("CANTIDAD"), 2.0);
        assert_eq!(record.number("PRECIO UNITARIO"), 10.5);
        assert_eq!(record.number("DESCUENTO"), 0.0);
        assert_eq!(record.number("NO EXISTE"), 0.0);
        assert_eq!(record.number("RARO"), 0.0);
    }

    #[test]
    fn test_number_reads_leading_number() {
        let record = Record::new()
            .with("CANTIDAD", "12.5 kg")
            .with("PRECIO UNITARIO", " 3,50")
            .with("DESCUENTO", "-.5%")
            .with("TOTAL", "1e2x")
            .with("PUNTO", "12.")
            .with("SIGNO", "-abc");

        assert_eq!(record.number("CANTIDAD"), 12.5);
        assert_eq!(record.number("PRECIO UNITARIO"), 3.0);
        assert_eq!(record.number("DESCUENTO"), -0.5);
        assert_eq!(record.number("TOTAL"), 100.0);
        assert_eq!(record.number("PUNTO"), 12.0);
        assert_eq!(record.number("SIGNO"), 0.0);
    }

    #[test]
    fn test_text_reads() {
        let record = Record::new()
            .with("ID_PRODUCTO", 7_i64)
            .with("PRECIO", 2.5)
            .with("CLIENTE", SqlValue::Null);

        assert_eq!(record.text("ID_PRODUCTO").as_deref(), Some("7"));
        assert_eq!(record.text("PRECIO").as_deref(), Some("2.5"));
        assert_eq!(record.text("CLIENTE"), None);
    }

    #[test]
    fn test_duplicate_columns_last_wins() {
        let record = Record::new().with("DIRECCION", "venta").with("DIRECCION", "cliente");
        assert_eq!(record.text("DIRECCION").as_deref(), Some("cliente"));
        assert_eq!(record.column_names().count(), 2);
    }

    #[tokio::test]
    async fn test_sqlite_storage_classes() {
        let db = Database::new(DbConfig::in_memory().run_migrations(false))
            .await
            .unwrap();

        let rows = db
            .query(
                "SELECT 1 AS i, 2.5 AS r, 'hola' AS t, NULL AS n, ? AS p",
                &[SqlValue::from("42")],
            )
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.get("i"), Some(&SqlValue::Integer(1)));
        assert_eq!(row.get("r"), Some(&SqlValue::Real(2.5)));
        assert_eq!(row.get("t"), Some(&SqlValue::Text("hola".into())));
        assert_eq!(row.get("n"), Some(&SqlValue::Null));
        assert_eq!(row.text("p").as_deref(), Some("42"));
        assert_eq!(row.column_names().collect::<Vec<_>>(), ["i", "r", "t", "n", "p"]);
    }

    #[tokio::test]
    async fn test_sql_error_maps_to_query_failed() {
        let db = Database::new(DbConfig::in_memory().run_migrations(false))
            .await
            .unwrap();

        let err = db.query("SELECT * FROM no_such_table", &[]).await.unwrap_err();
        assert!(matches!(err, DbError::QueryFailed(_)));
    }
}
