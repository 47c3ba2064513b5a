//! Prometheus metrics for observability and monitoring.
//!
//! The runtime and the seed loader record metrics through the `metrics`
//! facade unconditionally. Nothing is exported until a recorder is
//! installed; [`MetricsServer::start`] installs the Prometheus exporter with
//! its own HTTP listener.
//!
//! # Example
//!
//! ```rust,no_run
//! use plan_today_runtime::metrics::MetricsServer;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut server = MetricsServer::new("127.0.0.1:9090".parse()?);
//! server.start()?;
//! // Metrics available at http://127.0.0.1:9090/metrics
//! # Ok(())
//! # }
//! ```

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder};
use std::net::SocketAddr;
use thiserror::Error;

// Re-export metrics macros for use in other crates
pub use metrics::{counter, histogram};

/// Errors from metrics operations.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to build metrics exporter
    #[error("Failed to build metrics exporter: {0}")]
    Build(String),
    /// Failed to install metrics exporter
    #[error("Failed to install metrics exporter: {0}")]
    Install(String),
}

/// Prometheus metrics server.
///
/// Exposes metrics on an HTTP endpoint for Prometheus scraping.
#[derive(Debug)]
pub struct MetricsServer {
    addr: SocketAddr,
    started: bool,
}

impl MetricsServer {
    /// Create a new metrics server bound to `addr` once started.
    #[must_use]
    pub const fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            started: false,
        }
    }

    /// Address the listener binds to.
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Whether [`MetricsServer::start`] succeeded.
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.started
    }

    /// Register metric descriptions and install the Prometheus exporter.
    ///
    /// Must be called from within a Tokio runtime; the HTTP listener is
    /// spawned onto it.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::Build`] if the exporter configuration is invalid
    /// and [`MetricsError::Install`] if a recorder is already installed or the
    /// listener cannot be set up.
    pub fn start(&mut self) -> Result<(), MetricsError> {
        register_metrics();

        PrometheusBuilder::new()
            .with_http_listener(self.addr)
            .set_buckets_for_metric(
                Matcher::Suffix("duration_seconds".to_string()),
                &[0.000_01, 0.000_1, 0.001, 0.01, 0.1, 0.5, 1.0, 5.0],
            )
            .map_err(|e| MetricsError::Build(e.to_string()))?
            .install()
            .map_err(|e| MetricsError::Install(e.to_string()))?;

        self.started = true;
        tracing::info!(
            addr = %self.addr,
            "Metrics server started - available at http://{}/metrics",
            self.addr
        );
        Ok(())
    }
}

/// Register all metric descriptions.
fn register_metrics() {
    // Store
    describe_counter!(
        "store.actions.total",
        "Total number of actions applied by the store"
    );
    describe_counter!(
        "store.actions.rejected",
        "Actions sent by callers after teardown"
    );
    describe_counter!(
        "store.actions.discarded",
        "Actions produced by effects that completed after teardown"
    );
    describe_histogram!(
        "store.reducer.duration_seconds",
        "Time taken by a single reducer call"
    );
    describe_counter!(
        "store.effects.executed",
        "Effects started by the store, labelled by type"
    );

    // Seed loader
    describe_counter!(
        "seed.fetch.succeeded",
        "Seed fetches that produced a list of titles"
    );
    describe_counter!("seed.fetch.failed", "Seed fetches that failed");
}
