//! Ticket API configuration module.
//!
//! Configuration is loaded from an optional `ticket.toml` in the working
//! directory, then from `TICKET_*` environment variables, with fallback to
//! defaults.
//!
//! | Variable                         | Default        |
//! |----------------------------------|----------------|
//! | `TICKET_BIND_ADDR`               | `0.0.0.0`      |
//! | `TICKET_PORT`                    | `3000`         |
//! | `TICKET_DATABASE_PATH`           | `./ticket.db`  |
//! | `TICKET_MAX_CONNECTIONS`         | `5`            |
//! | `TICKET_RUN_MIGRATIONS`          | `false`        |
//! | `TICKET_INCLUDE_SELLER`          | `true`         |
//! | `TICKET_INCLUDE_GLOBAL_DISCOUNT` | `true`         |
//! | `TICKET_DISCOUNT_DISPLAY`        | `aggregate`    |
//! | `TICKET_CONCURRENT_FETCH`        | `false`        |

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::PathBuf;
use ticket_core::{DiscountDisplay, ReceiptOptions};
use ticket_db::DbConfig;

/// Ticket API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketConfig {
    /// Interface to listen on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// HTTP port
    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLite database file
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Pool size
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Apply the bundled schema on startup
    #[serde(default)]
    pub run_migrations: bool,

    #[serde(default = "default_true")]
    pub include_seller: bool,

    #[serde(default = "default_true")]
    pub include_global_discount: bool,

    #[serde(default)]
    pub discount_display: DiscountDisplay,

    #[serde(default)]
    pub concurrent_fetch: bool,
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_path() -> PathBuf {
    PathBuf::from("./ticket.db")
}

fn default_max_connections() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

impl TicketConfig {
    /// Load configuration from `ticket.toml` (optional) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("ticket").required(false))
            .add_source(Environment::with_prefix("TICKET").try_parsing(true));

        Self::from_builder(builder)
    }

    /// Load configuration from TOML text only.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Self::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: TicketConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                key: "port".to_string(),
                reason: "must be between 1 and 65535".to_string(),
            });
        }

        if self.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_connections".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// `host:port` string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Pool settings for [`ticket_db::Database::new`].
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.database_path.clone())
            .max_connections(self.max_connections)
            .run_migrations(self.run_migrations)
    }

    /// Layout switches handed to the generator.
    pub fn receipt_options(&self) -> ReceiptOptions {
        ReceiptOptions {
            include_global_discount: self.include_global_discount,
            include_seller: self.include_seller,
            discount_display: self.discount_display,
            concurrent_fetch: self.concurrent_fetch,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TicketConfig::from_toml("").unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.database_path, PathBuf::from("./ticket.db"));
        assert_eq!(config.max_connections, 5);
        assert!(!config.run_migrations);
        assert_eq!(config.receipt_options(), ReceiptOptions::default());
    }

    #[test]
    fn test_overrides() {
        let config = TicketConfig::from_toml(
            r#"
            port = 8080
            database_path = "/var/lib/pos/ventas.db"
            include_seller = false
            discount_display = "per_line"
            concurrent_fetch = true
            "#,
        )
        .unwrap();

        assert_eq!(config.port, 8080);
        let options = config.receipt_options();
        assert!(!options.include_seller);
        assert!(options.include_global_discount);
        assert_eq!(options.discount_display, DiscountDisplay::PerLine);
        assert!(options.concurrent_fetch);

        let db = config.db_config();
        assert_eq!(db.database_path, PathBuf::from("/var/lib/pos/ventas.db"));
        assert_eq!(db.max_connections, 5);
    }

    #[test]
    fn test_rejects_port_zero() {
        let err = TicketConfig::from_toml("port = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "port"));
    }

    #[test]
    fn test_rejects_zero_connections() {
        let err = TicketConfig::from_toml("max_connections = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref key, .. } if key == "max_connections"
        ));
    }

    #[test]
    fn test_rejects_unknown_display() {
        let err = TicketConfig::from_toml(r#"discount_display = "sideways""#).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }
}
