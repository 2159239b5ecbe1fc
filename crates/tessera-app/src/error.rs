//! # Design
//!
//! - Centralize application-level errors for the startup sequence.
//! - Keep error messages constant while carrying context fields for debugging.

use std::io;

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading or validation failed.
    #[error("configuration operation failed")]
    Config {
        /// Operation identifier.
        operation: &'static str,
        /// Source configuration error.
        source: tessera_config::ConfigError,
    },
    /// Database handle construction failed.
    #[error("database operation failed")]
    Data {
        /// Operation identifier.
        operation: &'static str,
        /// Source data error.
        source: tessera_data::DataError,
    },
    /// Telemetry operations failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: tessera_telemetry::TelemetryError,
    },
    /// API server operations failed.
    #[error("api server operation failed")]
    ApiServer {
        /// Operation identifier.
        operation: &'static str,
        /// Source API server error.
        source: tessera_api::ApiServerError,
    },
    /// The configured `host:port` pair could not be parsed or looked up.
    #[error("invalid bind address")]
    InvalidBindAddress {
        /// Rendered `host:port` pair.
        address: String,
        /// Source resolver error.
        source: io::Error,
    },
    /// The configured host resolved to no addresses.
    #[error("bind address did not resolve")]
    UnresolvedBindAddress {
        /// Rendered `host:port` pair.
        address: String,
    },
}

impl AppError {
    pub(crate) const fn config(
        operation: &'static str,
        source: tessera_config::ConfigError,
    ) -> Self {
        Self::Config { operation, source }
    }

    pub(crate) const fn data(operation: &'static str, source: tessera_data::DataError) -> Self {
        Self::Data { operation, source }
    }

    pub(crate) const fn api_server(
        operation: &'static str,
        source: tessera_api::ApiServerError,
    ) -> Self {
        Self::ApiServer { operation, source }
    }

    pub(crate) const fn telemetry(
        operation: &'static str,
        source: tessera_telemetry::TelemetryError,
    ) -> Self {
        Self::Telemetry { operation, source }
    }
}
