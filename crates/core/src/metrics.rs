//! Prometheus metrics for the engine.
//!
//! Covers order creation and completion, bulk processing rounds, and
//! backup submissions.

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounter};

/// Orders created total.
pub static ORDERS_CREATED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("brigade_orders_created_total", "Total orders created").unwrap()
});

/// Orders cooked to completion.
pub static ORDERS_COMPLETED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "brigade_orders_completed_total",
        "Total orders cooked to ready",
    )
    .unwrap()
});

/// Bulk processing rounds completed.
pub static BATCHES_PROCESSED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "brigade_batches_processed_total",
        "Total process-all rounds completed",
    )
    .unwrap()
});

/// Backup jobs handed to the external facility.
pub static BACKUPS_SCHEDULED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "brigade_backups_scheduled_total",
        "Total backup jobs submitted",
    )
    .unwrap()
});

/// Wall-clock time from cook start to ready, in seconds.
pub static COOK_DURATION: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new("brigade_cook_duration_seconds", "Duration of cooking runs")
            .buckets(vec![0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0]),
    )
    .unwrap()
});

/// Get all engine metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(ORDERS_CREATED.clone()),
        Box::new(ORDERS_COMPLETED.clone()),
        Box::new(BATCHES_PROCESSED.clone()),
        Box::new(BACKUPS_SCHEDULED.clone()),
        Box::new(COOK_DURATION.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_metrics_register_cleanly() {
        let registry = prometheus::Registry::new();
        for metric in all_metrics() {
            registry.register(metric).unwrap();
        }
    }
}
