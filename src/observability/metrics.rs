//! Metrics registry for vitrine
//!
//! Counters only, monotonic, reset on process start. Increments use
//! relaxed atomics; exact cross-thread ordering is not needed for
//! operational counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters for the query service.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Catalog list queries served
    list_queries: AtomicU64,
    /// Single-item lookups served
    item_lookups: AtomicU64,
    /// Single-item lookups that found nothing
    lookup_misses: AtomicU64,
    /// Facet queries served (featured, distinct listings, grouping)
    facet_queries: AtomicU64,
}

/// Point-in-time copy of all counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub list_queries: u64,
    pub item_lookups: u64,
    pub lookup_misses: u64,
    pub facet_queries: u64,
}

impl MetricsRegistry {
    /// New registry with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_list_queries(&self) {
        self.list_queries.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_item_lookups(&self) {
        self.item_lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_lookup_misses(&self) {
        self.lookup_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_facet_queries(&self) {
        self.facet_queries.fetch_add(1, Ordering::Relaxed);
    }

    /// Copies all counters at once.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            list_queries: self.list_queries.load(Ordering::Relaxed),
            item_lookups: self.item_lookups.load(Ordering::Relaxed),
            lookup_misses: self.lookup_misses.load(Ordering::Relaxed),
            facet_queries: self.facet_queries.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let snapshot = MetricsRegistry::new().snapshot();
        assert_eq!(snapshot.list_queries, 0);
        assert_eq!(snapshot.item_lookups, 0);
        assert_eq!(snapshot.lookup_misses, 0);
        assert_eq!(snapshot.facet_queries, 0);
    }

    #[test]
    fn test_increments_are_monotonic() {
        let metrics = MetricsRegistry::new();
        metrics.increment_list_queries();
        metrics.increment_list_queries();
        metrics.increment_lookup_misses();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.list_queries, 2);
        assert_eq!(snapshot.lookup_misses, 1);
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let metrics = MetricsRegistry::new();
        metrics.increment_facet_queries();

        let json = serde_json::to_value(metrics.snapshot()).unwrap();
        assert_eq!(json["facet_queries"], 1);
    }
}
