//! Pricing calculation metrics.

use metrics::{counter, gauge, histogram};
use std::time::{Duration, Instant};

/// Pricing metrics recorder
pub struct PricingMetrics;

impl PricingMetrics {
    /// Record one finished calculation.
    ///
    /// `kind` is the calculator (`cloud`, `licensing`, `mendix`, ...) and
    /// `target` the provider, distribution or edition it ran for.
    pub fn record_calculation(kind: &str, target: &str, duration: Duration) {
        counter!(
            "pricing_calculations_total",
            "kind" => kind.to_string(),
            "target" => target.to_string()
        )
        .increment(1);
        histogram!("pricing_calculation_duration_seconds", "kind" => kind.to_string())
            .record(duration.as_secs_f64());

        tracing::debug!(
            kind = kind,
            target = target,
            duration_us = duration.as_micros() as u64,
            "Pricing calculation finished"
        );
    }

    /// Record a region that is not in the provider's catalogue
    pub fn record_region_fallback(provider: &str) {
        counter!("pricing_region_fallbacks_total", "provider" => provider.to_string())
            .increment(1);
    }

    /// Record a pricing table that could not be loaded
    pub fn record_data_error(table: &str) {
        counter!("pricing_data_errors_total", "table" => table.to_string()).increment(1);

        tracing::error!(table = table, "Pricing table unavailable");
    }

    /// Set the number of entries (regions, add-ons, ...) in a loaded catalog
    pub fn set_catalog_entries(catalog: &str, count: usize) {
        gauge!("pricing_catalog_entries", "catalog" => catalog.to_string()).set(count as f64);
    }
}

/// Timer guard for automatic calculation recording.
///
/// Records the calculation when `stop()` is called or when dropped.
pub struct PricingTimer {
    start: Instant,
    kind: String,
    target: String,
    stopped: bool,
}

impl PricingTimer {
    pub fn new(kind: &str, target: &str) -> Self {
        Self {
            start: Instant::now(),
            kind: kind.to_string(),
            target: target.to_string(),
            stopped: false,
        }
    }

    /// Stop the timer and record the calculation. Returns the elapsed time.
    pub fn stop(&mut self) -> Duration {
        if self.stopped {
            return Duration::ZERO;
        }
        self.stopped = true;

        let elapsed = self.start.elapsed();
        PricingMetrics::record_calculation(&self.kind, &self.target, elapsed);
        elapsed
    }
}

impl Drop for PricingTimer {
    fn drop(&mut self) {
        if !self.stopped {
            self.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_recorder_is_noop() {
        PricingMetrics::record_calculation("licensing", "openshift", Duration::from_millis(1));
        PricingMetrics::record_region_fallback("aws");
        PricingMetrics::record_data_error("mendix");
        PricingMetrics::set_catalog_entries("regions", 12);
    }

    #[test]
    fn test_timer_stops_once() {
        let mut timer = PricingTimer::new("cloud", "hetzner");
        timer.stop();
        assert_eq!(timer.stop(), Duration::ZERO);
    }

    #[test]
    fn test_timer_records_on_drop() {
        let timer = PricingTimer::new("estimate", "gcp");
        drop(timer);
    }
}
