//! Error types for the data access layer.
//!
//! Query failures are not represented here: user queries hand back the
//! driver's `sqlx::Error` untouched. Only handle construction and migrations
//! are wrapped.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Result alias for data layer operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors raised by the data access layer.
#[derive(Debug)]
pub enum DataError {
    /// The connection string could not be parsed into connect options.
    InvalidDsn {
        /// Underlying driver error.
        source: sqlx::Error,
    },
    /// Migration execution failed.
    MigrationFailed {
        /// Underlying migration error.
        source: sqlx::migrate::MigrateError,
    },
}

impl Display for DataError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDsn { .. } => formatter.write_str("invalid database connection string"),
            Self::MigrationFailed { .. } => formatter.write_str("migration failed"),
        }
    }
}

impl Error for DataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDsn { source } => Some(source),
            Self::MigrationFailed { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_error_display_and_source() {
        let dsn = DataError::InvalidDsn {
            source: sqlx::Error::Configuration("bad url".into()),
        };
        assert_eq!(dsn.to_string(), "invalid database connection string");
        assert!(dsn.source().is_some());

        let migration = DataError::MigrationFailed {
            source: sqlx::migrate::MigrateError::VersionMissing(1),
        };
        assert_eq!(migration.to_string(), "migration failed");
        assert!(migration.source().is_some());
    }
}
