//! Prometheus-backed request counters.
//!
//! # Design
//! - Each [`Metrics`] owns a private registry so tests can build as many as they like.
//! - Only request counting is exposed; handlers never touch collectors directly.

use std::sync::Arc;

use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

use crate::error::{Result, TelemetryError};

const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";

/// Prometheus-backed metrics registry shared across the HTTP stack.
#[derive(Clone)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

struct MetricsInner {
    registry: Registry,
    http_requests_total: IntCounterVec,
}

impl Metrics {
    /// Construct a registry with the request counter registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the collector cannot be built or registered.
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new(HTTP_REQUESTS_TOTAL, "Total HTTP requests received"),
            &["route", "code"],
        )
        .map_err(|source| TelemetryError::MetricsCollector {
            name: HTTP_REQUESTS_TOTAL,
            source,
        })?;

        registry
            .register(Box::new(http_requests_total.clone()))
            .map_err(|source| TelemetryError::MetricsRegister {
                name: HTTP_REQUESTS_TOTAL,
                source,
            })?;

        Ok(Self {
            inner: Arc::new(MetricsInner {
                registry,
                http_requests_total,
            }),
        })
    }

    /// Increment the HTTP request counter for the given route and status code.
    pub fn inc_http_request(&self, route: &str, status: u16) {
        self.inner
            .http_requests_total
            .with_label_values(&[route, &status.to_string()])
            .inc();
    }

    /// Current value of the request counter for one route/status pair.
    #[must_use]
    pub fn http_requests(&self, route: &str, status: u16) -> u64 {
        self.inner
            .http_requests_total
            .with_label_values(&[route, &status.to_string()])
            .get()
    }

    /// Render the registry using the Prometheus text exposition format.
    ///
    /// # Errors
    ///
    /// Returns an error if the metrics cannot be encoded or if the encoded
    /// buffer is not valid UTF-8.
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.inner.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|source| TelemetryError::MetricsEncode { source })?;
        String::from_utf8(buffer).map_err(|source| TelemetryError::MetricsUtf8 { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_counter_tracks_route_and_code() -> Result<()> {
        let metrics = Metrics::new()?;
        metrics.inc_http_request("/health", 200);
        metrics.inc_http_request("/health", 200);
        metrics.inc_http_request("/api", 405);

        assert_eq!(metrics.http_requests("/health", 200), 2);
        assert_eq!(metrics.http_requests("/api", 405), 1);
        assert_eq!(metrics.http_requests("/user", 200), 0);

        let rendered = metrics.render()?;
        assert!(rendered.contains("http_requests_total"));
        assert!(rendered.contains("route=\"/health\""));
        assert!(rendered.contains("code=\"405\""));
        Ok(())
    }

    #[test]
    fn registries_are_independent() -> Result<()> {
        let first = Metrics::new()?;
        let second = Metrics::new()?;
        first.inc_http_request("/config", 200);
        assert_eq!(second.http_requests("/config", 200), 0);
        Ok(())
    }
}
