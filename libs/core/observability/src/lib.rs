//! Observability utilities for the sizing calculator.
//!
//! This crate provides:
//! - A process-wide Prometheus recorder
//! - Pricing calculation counters and histograms
//!
//! # Example
//!
//! ```rust,ignore
//! use observability::{init_metrics, render_metrics, PricingTimer};
//!
//! init_metrics()?;
//!
//! let mut timer = PricingTimer::new("licensing", "openshift");
//! // ... run the calculation ...
//! timer.stop();
//!
//! println!("{}", render_metrics());
//! ```

pub mod pricing;

pub use pricing::{PricingMetrics, PricingTimer};

// Re-export metrics macros for convenience
pub use metrics::{counter, gauge, histogram};
pub use metrics_exporter_prometheus::BuildError;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus metrics recorder.
///
/// The first successful call installs the recorder; later calls return the
/// same handle. Fails when another global recorder is already installed.
pub fn init_metrics() -> Result<&'static PrometheusHandle, BuildError> {
    METRICS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new().install_recorder()?;

        info!("Prometheus metrics recorder initialized");
        register_metric_descriptions();

        Ok(handle)
    })
}

/// Get the metrics handle (must call init_metrics first)
pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Prometheus text exposition of everything recorded so far
pub fn render_metrics() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

fn register_metric_descriptions() {
    use metrics::describe_counter;
    use metrics::describe_gauge;
    use metrics::describe_histogram;

    describe_counter!(
        "pricing_calculations_total",
        "Pricing calculations by kind and target"
    );
    describe_histogram!(
        "pricing_calculation_duration_seconds",
        "Pricing calculation duration in seconds"
    );
    describe_counter!(
        "pricing_region_fallbacks_total",
        "Lookups of unknown regions priced at the base rate"
    );
    describe_counter!(
        "pricing_data_errors_total",
        "Low-code pricing tables that failed to load"
    );
    describe_gauge!(
        "pricing_catalog_entries",
        "Entries in a loaded pricing catalog"
    );
}
