//! Error types for configuration operations.

use thiserror::Error;

/// Primary error type for configuration operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The listener host was empty.
    #[error("host cannot be empty")]
    EmptyHost,
    /// The listener port was zero or negative.
    #[error("port must be positive")]
    NonPositivePort {
        /// Offending port value.
        port: i32,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
