//! Configuration loader for the `surfsup-climate` API service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). Every value has a default, so the service starts
//! against the bundled dataset with no environment at all.
//!
use std::{env, net::SocketAddr};

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

/// Default SQLite database location, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://Resources/hawaii.sqlite";

/// Last date present in the bundled dataset.
pub const DEFAULT_REFERENCE_DATE: &str = "2017-08-23";

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env_u32 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<u32>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Read a string environment variable, falling back to a default.
macro_rules! env_or_default {
    ($var_name:expr, $default:expr) => {
        env::var($var_name).unwrap_or_else(|_| $default.to_string())
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// SQLite connection string.
    pub db_url: String,

    /// Maximum number of database connections in the pool.
    pub db_pool_max: u32,

    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,

    /// Treated as the dataset's final day; "last year" ends here.
    pub reference_date: NaiveDate,
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `DATABASE_URL` – SQLite database (default: `sqlite://Resources/hawaii.sqlite`)
/// - `DB_POOL_MAX` – max DB connections (default: 5)
/// - `LISTEN_ADDR` – HTTP bind address (default: `0.0.0.0:8080`)
/// - `REFERENCE_DATE` – dataset's last date, `YYYY-MM-DD` (default: 2017-08-23)
///
/// Returns an error if any variable is set but invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    let db_url = env_or_default!("DATABASE_URL", DEFAULT_DATABASE_URL);
    let db_pool_max = parse_env_u32!("DB_POOL_MAX", 5);

    let listen_addr = env_or_default!("LISTEN_ADDR", "0.0.0.0:8080");
    let listen_addr = listen_addr
        .parse::<SocketAddr>()
        .map_err(|e| anyhow!("Invalid LISTEN_ADDR '{}': {}", listen_addr, e))?;

    let reference_date = env_or_default!("REFERENCE_DATE", DEFAULT_REFERENCE_DATE);
    let reference_date = parse_reference_date(&reference_date)?;

    if db_pool_max == 0 {
        return Err(anyhow!("Invalid DB_POOL_MAX: must be at least 1"));
    }

    Ok(Config {
        db_url,
        db_pool_max,
        listen_addr,
        reference_date,
    })
}

fn parse_reference_date(value: &str) -> Result<NaiveDate> {
    // ---
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| anyhow!("Invalid REFERENCE_DATE '{}': {}", value, e))
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  DATABASE_URL   : {}", self.db_url);
        tracing::info!("  DB_POOL_MAX    : {}", self.db_pool_max);
        tracing::info!("  LISTEN_ADDR    : {}", self.listen_addr);
        tracing::info!("  REFERENCE_DATE : {}", self.reference_date);
    }
}
