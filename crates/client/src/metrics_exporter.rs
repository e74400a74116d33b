//! Prometheus metrics exporter.
//!
//! Serves metrics collected through [`crate::metrics::MetricsCollector`] in
//! Prometheus text format at `/metrics` using `metrics-exporter-prometheus`.
//!
//! # Example
//!
//! ```rust,ignore
//! use ticket_client::metrics_exporter::MetricsExporter;
//!
//! let exporter = MetricsExporter::install("127.0.0.1:9090")?;
//! ```

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder};
use tracing::info;

use crate::metrics::METRIC_REQUEST_DURATION;

const REQUEST_DURATION_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0,
];

/// Handle for an installed Prometheus exporter.
///
/// Installing sets the global metrics recorder and starts an HTTP listener
/// on the bind address.
#[derive(Debug)]
pub struct MetricsExporter {
    bind_addr: SocketAddr,
}

impl MetricsExporter {
    /// Install the Prometheus exporter as the global metrics recorder.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns an error if the bind address does not parse or another
    /// recorder is already installed.
    pub fn install(bind_addr: &str) -> Result<Self, MetricsExporterError> {
        let addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| MetricsExporterError::InvalidBindAddress(bind_addr.to_string(), e))?;

        PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(METRIC_REQUEST_DURATION.to_string()),
                REQUEST_DURATION_BUCKETS,
            )?
            .with_http_listener(addr)
            .install()
            .map_err(|e| match e {
                BuildError::FailedToSetGlobalRecorder(_) => {
                    MetricsExporterError::RecorderAlreadyInstalled
                }
                other => other.into(),
            })?;

        info!(%addr, "Prometheus metrics exporter listening on /metrics");

        Ok(Self { bind_addr: addr })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// Errors that can occur when installing the metrics exporter.
#[derive(Debug, thiserror::Error)]
pub enum MetricsExporterError {
    #[error("Invalid bind address '{0}': {1}")]
    InvalidBindAddress(String, std::net::AddrParseError),

    #[error("A metrics recorder is already installed")]
    RecorderAlreadyInstalled,

    #[error("Failed to build Prometheus recorder: {0}")]
    BuildError(String),
}

impl From<BuildError> for MetricsExporterError {
    fn from(err: BuildError) -> Self {
        MetricsExporterError::BuildError(err.to_string())
    }
}
