use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tessera_api::ApiServer;
use tessera_config::{Config, DEFAULT_CONFIG_PATH, DatabaseConfig, load_config, validate_config};
use tessera_data::Database;
use tessera_telemetry::{LOG_FORMAT_ENV, LogFormat, LoggingConfig, Metrics, log_format_from_env};
use tracing::{error, info};

use crate::error::{AppError, AppResult};

/// Environment variable naming the configuration file handed to the loader.
pub const CONFIG_PATH_ENV: &str = "TESSERA_CONFIG";
/// Environment variable holding the database connection string.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Inputs gathered from the environment before anything is started.
pub(crate) struct BootstrapDependencies {
    logging: LoggingConfig<'static>,
    config_path: PathBuf,
    database_url: String,
}

impl BootstrapDependencies {
    pub(crate) fn from_env() -> Self {
        Self::from_values(
            std::env::var(CONFIG_PATH_ENV).ok(),
            std::env::var(DATABASE_URL_ENV).ok(),
            std::env::var(LOG_FORMAT_ENV).ok().as_deref(),
        )
    }

    fn from_values(
        config_path: Option<String>,
        database_url: Option<String>,
        log_format: Option<&str>,
    ) -> Self {
        let logging = LoggingConfig {
            format: log_format_from_env(log_format).unwrap_or_else(LogFormat::infer),
            ..LoggingConfig::default()
        };
        Self {
            logging,
            config_path: PathBuf::from(
                config_path.unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string()),
            ),
            database_url: database_url
                .unwrap_or_else(|| DatabaseConfig::default().connection_url()),
        }
    }
}

/// Components built by the startup sequence, ready to serve.
pub(crate) struct PreparedServer {
    config: Config,
    api: ApiServer,
}

/// Entry point for the Tessera boot sequence.
///
/// # Errors
///
/// Returns an error if logging cannot be installed, the configuration is
/// rejected, the database handle cannot be built, or the listener fails.
pub async fn run_app() -> AppResult<()> {
    run_app_with(BootstrapDependencies::from_env()).await
}

pub(crate) async fn run_app_with(dependencies: BootstrapDependencies) -> AppResult<()> {
    tessera_telemetry::init_logging(&dependencies.logging)
        .map_err(|err| AppError::telemetry("telemetry.init", err))?;
    info!("Initializing application...");

    let PreparedServer { config, api } = prepare(&dependencies)?;
    let addr = resolve_bind_address(&config).await?;

    info!("Server starting on {}:{}", config.host, config.port);
    api.serve(addr)
        .await
        .map_err(|err| AppError::api_server("api_server.serve", err))
}

pub(crate) fn prepare(dependencies: &BootstrapDependencies) -> AppResult<PreparedServer> {
    let config = load_config(&dependencies.config_path).map_err(|err| {
        error!(
            error = %err,
            path = %dependencies.config_path.display(),
            "Failed to load config"
        );
        AppError::config("config.load", err)
    })?;
    validate_config(&config).map_err(|err| {
        error!(error = %err, "Invalid config");
        AppError::config("config.validate", err)
    })?;

    let database = Database::new(&dependencies.database_url)
        .map_err(|err| AppError::data("database.new", err))?;
    let telemetry =
        Metrics::new().map_err(|err| AppError::telemetry("telemetry.metrics", err))?;

    let api = ApiServer::new(config.clone(), Arc::new(database), telemetry);
    Ok(PreparedServer { config, api })
}

async fn resolve_bind_address(config: &Config) -> AppResult<SocketAddr> {
    let address = config.bind_address();
    let mut resolved = tokio::net::lookup_host(address.clone())
        .await
        .map_err(|source| AppError::InvalidBindAddress {
            address: address.clone(),
            source,
        })?;
    resolved
        .next()
        .ok_or(AppError::UnresolvedBindAddress { address })
}
