//! Shared HTTP constants (headers, problem URIs).

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

pub(crate) const PROBLEM_INTERNAL: &str = "https://tessera.dev/problems/internal";
pub(crate) const PROBLEM_BAD_REQUEST: &str = "https://tessera.dev/problems/bad-request";
pub(crate) const PROBLEM_NOT_FOUND: &str = "https://tessera.dev/problems/not-found";
pub(crate) const PROBLEM_METHOD_NOT_ALLOWED: &str =
    "https://tessera.dev/problems/method-not-allowed";

pub(crate) const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";
