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

//! Data access layer for Tessera: the `users` table and batch normalisation helpers.

pub mod batch;
pub mod error;
pub mod users;

pub use batch::{BatchError, BatchProcessor, ProcessorSettings};
pub use error::{DataError, Result as DataResult};
pub use users::{Database, User, UserStore};
