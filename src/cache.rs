use sha2::{Sha256, Digest};
use crate::analytics::dashboard::{build_dashboard, DashboardSnapshot};
use crate::error::ProgressError;
use crate::logging::log_snapshot_cache;
use crate::reports::model::{DailyReport, ProgressStats};
use crate::state::app::AppState;

/// Content hash of the inputs. Reports are keyed in `day` order so the
/// caller's ordering never produces a distinct entry.
pub fn snapshot_key(stats: &ProgressStats, reports: &[DailyReport]) -> Result<String, ProgressError> {
    let mut ordered: Vec<&DailyReport> = reports.iter().collect();
    ordered.sort_by_key(|r| r.day);

    let encoded = serde_json::to_vec(&(stats, &ordered))
        .map_err(|e| ProgressError::new(
            format!("Failed to encode snapshot inputs: {}", e),
            "json_serialize"
        ))?;

    let mut hasher = Sha256::new();
    hasher.update(&encoded);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Check cache and return if found
pub fn get_cached(state: &AppState, key: &str) -> Option<DashboardSnapshot> {
    let mut cache = state.snapshot_cache.write();
    let hit = cache.get(key).cloned();
    log_snapshot_cache(key, hit.is_some());
    if hit.is_some() {
        state.metrics.record_cache_hit();
    } else {
        state.metrics.record_cache_miss();
    }
    hit
}

/// Store snapshot in cache
pub fn cache_snapshot(state: &AppState, key: String, snapshot: DashboardSnapshot) {
    state.snapshot_cache.write().put(key, snapshot);
}

/// Build the dashboard, reusing a previous result for identical inputs.
pub fn memoized_dashboard(
    state: &AppState,
    stats: &ProgressStats,
    reports: &[DailyReport],
) -> DashboardSnapshot {
    let key = match snapshot_key(stats, reports) {
        Ok(key) => key,
        Err(e) => {
            tracing::warn!(error = %e, "Snapshot key unavailable, computing uncached");
            return build_dashboard(stats, reports);
        }
    };

    if let Some(snapshot) = get_cached(state, &key) {
        return snapshot;
    }

    let snapshot = build_dashboard(stats, reports);
    cache_snapshot(state, key, snapshot.clone());
    snapshot
}
