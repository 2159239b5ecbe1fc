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

//! Binary entrypoint for the Tessera server.

use tessera_app::{AppResult, run_app};

/// Boots the server and blocks until the listener fails.
#[tokio::main]
async fn main() -> AppResult<()> {
    run_app().await
}
