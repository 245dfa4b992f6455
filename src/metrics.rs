use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters for dashboard loads. Atomic so clones share one set.
#[derive(Clone, Default)]
pub struct Metrics {
    /// Snapshot cache hits
    pub cache_hit_count: Arc<AtomicU64>,
    /// Snapshot cache misses
    pub cache_miss_count: Arc<AtomicU64>,
    /// Loads started
    pub loads_started: Arc<AtomicU64>,
    /// Loads that fell back to empty state after a fetch error
    pub fetch_failures: Arc<AtomicU64>,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub cache_hit_count: u64,
    pub cache_miss_count: u64,
    pub loads_started: u64,
    pub fetch_failures: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_cache_hit(&self) {
        self.cache_hit_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_miss_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_load_started(&self) {
        self.loads_started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fetch_failure(&self) {
        self.fetch_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            cache_hit_count: self.cache_hit_count.load(Ordering::Relaxed),
            cache_miss_count: self.cache_miss_count.load(Ordering::Relaxed),
            loads_started: self.loads_started.load(Ordering::Relaxed),
            fetch_failures: self.fetch_failures.load(Ordering::Relaxed),
        }
    }
}
