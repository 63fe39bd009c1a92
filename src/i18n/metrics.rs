//! Language switch metrics.
//!
//! Counters are owned by each switcher rather than shared globally, so two
//! pages localized in one process report independently.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for apply passes and notifications.
#[derive(Debug, Default)]
pub struct SwitchMetrics {
    /// Number of apply passes run
    applies: AtomicUsize,

    /// Number of element texts written (including `None` writes)
    texts_updated: AtomicUsize,

    /// Number of placeholders written (including `None` writes)
    placeholders_updated: AtomicUsize,

    /// Number of writes where the element had no variant for the language
    missing_variants: AtomicUsize,

    /// Number of change notifications emitted
    notifications: AtomicUsize,

    /// Number of failed preference writes
    store_failures: AtomicUsize,
}

impl SwitchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_apply(&self) {
        self.applies.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_text_update(&self) {
        self.texts_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_placeholder_update(&self) {
        self.placeholders_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_missing_variant(&self) {
        self.missing_variants.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_notification(&self) {
        self.notifications.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_failure(&self) {
        self.store_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn applies(&self) -> usize {
        self.applies.load(Ordering::Relaxed)
    }

    pub fn texts_updated(&self) -> usize {
        self.texts_updated.load(Ordering::Relaxed)
    }

    pub fn placeholders_updated(&self) -> usize {
        self.placeholders_updated.load(Ordering::Relaxed)
    }

    pub fn missing_variants(&self) -> usize {
        self.missing_variants.load(Ordering::Relaxed)
    }

    pub fn notifications(&self) -> usize {
        self.notifications.load(Ordering::Relaxed)
    }

    pub fn store_failures(&self) -> usize {
        self.store_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let texts = self.texts_updated();
        let placeholders = self.placeholders_updated();
        let missing = self.missing_variants();

        let writes = texts + placeholders;
        let variant_coverage = if writes > 0 {
            (writes.saturating_sub(missing) as f64 / writes as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            applies: self.applies(),
            texts_updated: texts,
            placeholders_updated: placeholders,
            missing_variants: missing,
            variant_coverage,
            notifications: self.notifications(),
            store_failures: self.store_failures(),
        }
    }
}

/// Snapshot of switch statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub applies: usize,
    pub texts_updated: usize,
    pub placeholders_updated: usize,
    pub missing_variants: usize,

    /// Share of writes that found a variant, as a percentage (0-100)
    pub variant_coverage: f64,

    pub notifications: usize,
    pub store_failures: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = SwitchMetrics::new();
        assert_eq!(metrics.applies(), 0);
        assert_eq!(metrics.notifications(), 0);
        assert_eq!(metrics.store_failures(), 0);
    }

    #[test]
    fn test_record_apply_and_notification() {
        let metrics = SwitchMetrics::new();
        metrics.record_apply();
        metrics.record_apply();
        metrics.record_notification();

        assert_eq!(metrics.applies(), 2);
        assert_eq!(metrics.notifications(), 1);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = SwitchMetrics::new().report();
        assert_eq!(report.texts_updated, 0);
        assert_eq!(report.variant_coverage, 0.0);
    }

    #[test]
    fn test_report_variant_coverage() {
        let metrics = SwitchMetrics::new();

        // 3 text writes + 1 placeholder write, 1 missing = 75% coverage
        metrics.record_text_update();
        metrics.record_text_update();
        metrics.record_text_update();
        metrics.record_placeholder_update();
        metrics.record_missing_variant();

        let report = metrics.report();
        assert_eq!(report.texts_updated, 3);
        assert_eq!(report.placeholders_updated, 1);
        assert_eq!(report.missing_variants, 1);
        assert_eq!(report.variant_coverage, 75.0);
    }

    #[test]
    fn test_report_full_coverage() {
        let metrics = SwitchMetrics::new();
        metrics.record_text_update();
        metrics.record_text_update();
        assert_eq!(metrics.report().variant_coverage, 100.0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = SwitchMetrics::new();
        metrics.record_store_failure();
        let json = serde_json::to_value(metrics.report()).unwrap();
        assert_eq!(json["store_failures"], 1);
    }
}
