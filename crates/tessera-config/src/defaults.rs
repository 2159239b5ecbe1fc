//! Literal default values for configuration records.
//!
//! # Design
//! - Centralize defaults so the server, loader, and tests agree on one set of values.
//! - Database defaults reproduce `postgres://localhost:5432/myapp?sslmode=disable`.

/// Host the HTTP listener binds to by default.
pub(crate) const HOST: &str = "localhost";
/// Port the HTTP listener binds to by default.
pub(crate) const PORT: i32 = 8080;
/// Debug flag default.
pub(crate) const DEBUG: bool = false;
/// Request timeout default, in seconds.
pub(crate) const TIMEOUT_SECS: i64 = 30;

/// SQL driver identifier.
pub(crate) const DB_DRIVER: &str = "postgres";
/// Database server host.
pub(crate) const DB_HOST: &str = "localhost";
/// Database server port.
pub(crate) const DB_PORT: u16 = 5432;
/// Database name.
pub(crate) const DB_NAME: &str = "myapp";
/// Query string appended to rendered connection URLs.
pub(crate) const DB_URL_OPTIONS: &str = "sslmode=disable";
