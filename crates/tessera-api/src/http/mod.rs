//! HTTP surface modules (router, handlers, middleware).

/// Shared constants and header names.
pub(crate) mod constants;
/// Problem response helpers and error types.
pub(crate) mod errors;
/// Canned and user-facing handlers.
pub(crate) mod handlers;
/// Health and metrics endpoints.
pub(crate) mod health;
/// Router construction and server host.
pub(crate) mod router;
/// Metrics middleware for HTTP requests.
pub(crate) mod telemetry;
