use std::sync::Arc;
use std::num::NonZeroUsize;
use parking_lot::RwLock;
use lru::LruCache;
use crate::analytics::dashboard::DashboardSnapshot;
use crate::metrics::Metrics;
use crate::reports::model::{DailyReport, ProgressStats};

const DEFAULT_SNAPSHOT_CAPACITY: usize = 16;

/// Load lifecycle of the dashboard view.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// Nothing requested yet
    Idle,
    /// A fetch is outstanding; the engine must not run on partial data
    Loading,
    /// Data is in; `reports` may be empty after a failed fetch
    Ready {
        stats: ProgressStats,
        reports: Vec<DailyReport>,
    },
}

/// Application-wide state container.
/// All mutable state is centralized here and passed explicitly to functions.
#[derive(Clone)]
pub struct AppState {
    /// Where the view is in its load cycle
    pub load_state: Arc<RwLock<LoadState>>,
    /// Derived snapshots keyed by input content (LRU with bounded size)
    pub snapshot_cache: Arc<RwLock<LruCache<String, DashboardSnapshot>>>,
    pub metrics: Metrics,
}

impl AppState {
    /// Create a new AppState with default values
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SNAPSHOT_CAPACITY)
    }

    /// A zero capacity is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        AppState {
            load_state: Arc::new(RwLock::new(LoadState::Idle)),
            snapshot_cache: Arc::new(RwLock::new(LruCache::new(capacity))),
            metrics: Metrics::new(),
        }
    }

    pub fn get_load_state(&self) -> LoadState {
        self.load_state.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.load_state.read(), LoadState::Loading)
    }

    /// Enter `Loading`. Returns false if a load is already outstanding.
    pub fn begin_load(&self) -> bool {
        let mut guard = self.load_state.write();
        if matches!(*guard, LoadState::Loading) {
            return false;
        }
        *guard = LoadState::Loading;
        self.metrics.record_load_started();
        true
    }

    pub fn finish_load(&self, stats: ProgressStats, reports: Vec<DailyReport>) {
        *self.load_state.write() = LoadState::Ready { stats, reports };
    }

    pub fn cached_snapshot_count(&self) -> usize {
        self.snapshot_cache.read().len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
