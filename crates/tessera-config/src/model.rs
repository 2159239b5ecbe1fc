//! Typed configuration records.
//!
//! # Design
//! - Pure data carriers; IO lives in `loader.rs`, checks in `validate.rs`.
//! - Field names double as the JSON keys served by the API.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Interface or hostname the listener binds to.
    pub host: String,
    /// TCP port the listener binds to.
    pub port: i32,
    /// Whether debug behaviour is enabled.
    pub debug: bool,
    /// Request timeout in seconds.
    pub timeout: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            debug: defaults::DEBUG,
            timeout: defaults::TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Render the `host:port` pair the listener should bind to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Relational database connection parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQL driver identifier (URL scheme).
    pub driver: String,
    /// Database server host.
    pub host: String,
    /// Database server port.
    pub port: u16,
    /// Database name.
    pub database: String,
    /// Login role; omitted from the URL when empty.
    pub username: String,
    /// Login password; only rendered alongside a username.
    pub password: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            driver: defaults::DB_DRIVER.to_string(),
            host: defaults::DB_HOST.to_string(),
            port: defaults::DB_PORT,
            database: defaults::DB_NAME.to_string(),
            username: String::new(),
            password: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Render a connection URL suitable for the SQL driver.
    #[must_use]
    pub fn connection_url(&self) -> String {
        let credentials = match (self.username.is_empty(), self.password.is_empty()) {
            (true, _) => String::new(),
            (false, true) => format!("{}@", self.username),
            (false, false) => format!("{}:{}@", self.username, self.password),
        };
        format!(
            "{}://{}{}:{}/{}?{}",
            self.driver,
            credentials,
            self.host,
            self.port,
            self.database,
            defaults::DB_URL_OPTIONS
        )
    }
}
