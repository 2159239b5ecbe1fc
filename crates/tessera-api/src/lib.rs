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

//! HTTP surface for Tessera.
//!
//! Layout: `http/router.rs` (route table and server host), `http/handlers.rs`
//! (canned and user handlers), `http/health.rs` (health and metrics),
//! `http/telemetry.rs` (request counting middleware), `http/errors.rs`
//! (problem responses), `state.rs` (shared handler state), `error.rs`
//! (bind/serve failures).

pub mod error;
pub(crate) mod http;
pub(crate) mod state;

pub use error::{ApiServerError, ApiServerResult};
pub use http::router::ApiServer;
