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
//! Shared HTTP DTOs for the Tessera API.
//!
//! The shapes here are the wire contract: field names and literal values are
//! asserted by the router tests, so changes must be deliberate.
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// RFC9457-compatible problem document surfaced on routing and lookup errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    /// URI reference identifying the problem type.
    pub kind: String,
    /// Short, human-readable summary of the issue.
    pub title: String,
    /// HTTP status code associated with the error.
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Detailed diagnostic message when available.
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// `x-request-id` of the request that produced the problem.
    pub request_id: Option<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Always `"OK"` while the process is serving.
    pub status: String,
    /// RFC3339 timestamp taken when the response was built.
    pub time: String,
}

impl HealthResponse {
    /// Literal status reported by a serving process.
    pub const STATUS_OK: &'static str = "OK";

    /// Build the response for the supplied instant.
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            status: Self::STATUS_OK.to_string(),
            time: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Canned listing returned by `GET /api`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiListing {
    /// Fixed message.
    pub message: String,
    /// Fixed items.
    pub data: Vec<String>,
    /// Number of entries in `data`.
    pub count: usize,
}

impl ApiListing {
    /// The one listing the endpoint ever returns.
    #[must_use]
    pub fn canned() -> Self {
        let data: Vec<String> = ["item1", "item2", "item3"]
            .into_iter()
            .map(str::to_string)
            .collect();
        Self {
            message: "API Response".to_string(),
            count: data.len(),
            data,
        }
    }
}

/// User row as exposed over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    /// Primary key.
    pub id: i32,
    /// Login name.
    pub username: String,
    /// Contact address.
    pub email: String,
}
