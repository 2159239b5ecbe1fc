//! Validation helpers for configuration records.

use crate::error::{ConfigError, ConfigResult};
use crate::model::Config;

/// Check the fields the listener cannot start without.
///
/// Only `host` and `port` are inspected; `debug` and `timeout` accept any value.
///
/// # Errors
///
/// Returns [`ConfigError::EmptyHost`] when the host is empty and
/// [`ConfigError::NonPositivePort`] when the port is zero or negative.
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    if config.host.is_empty() {
        return Err(ConfigError::EmptyHost);
    }
    if config.port <= 0 {
        return Err(ConfigError::NonPositivePort { port: config.port });
    }
    Ok(())
}
