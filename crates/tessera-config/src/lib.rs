#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Configuration records for the Tessera server.
//!
//! Layout: `model.rs` (typed records), `defaults.rs` (literal default values),
//! `loader.rs` (`load_config`), `validate.rs` (`validate_config`).

mod defaults;
pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::{DEFAULT_CONFIG_PATH, load_config};
pub use model::{Config, DatabaseConfig};
pub use validate::validate_config;
