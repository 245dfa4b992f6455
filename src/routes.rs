use serde::Serialize;
use crate::analytics::dashboard::DashboardSnapshot;
use crate::cache::memoized_dashboard;
use crate::reports::model::ProgressStats;
use crate::source::ReportSource;
use crate::state::app::{AppState, LoadState};

/// What the presentation layer should render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "dashboard", rename_all = "lowercase")]
pub enum DashboardView {
    /// Show the loading indicator; no engine output yet
    Loading,
    /// Loaded, but there were no reports to show
    Empty,
    Ready(DashboardSnapshot),
}

/// Fetch reports and stats, then publish the derived view.
///
/// Fetch errors never reach the caller: they are logged and the view falls
/// back to empty data. A call made while another load is outstanding
/// returns `Loading` without fetching.
pub async fn load_dashboard(state: &AppState, source: &ReportSource, limit: usize) -> DashboardView {
    if !state.begin_load() {
        tracing::debug!(source = source.name(), "Load already in progress");
        return DashboardView::Loading;
    }

    let (reports, stats) = tokio::join!(
        source.fetch_recent_reports(limit),
        source.fetch_stats()
    );

    let reports = reports.unwrap_or_else(|e| {
        tracing::warn!(source = source.name(), error = %e, "Could not load reports");
        state.metrics.record_fetch_failure();
        Vec::new()
    });
    let stats = stats.unwrap_or_else(|e| {
        tracing::warn!(source = source.name(), error = %e, "Could not load stats");
        state.metrics.record_fetch_failure();
        ProgressStats::default()
    });

    tracing::info!(
        source = source.name(),
        reports = reports.len(),
        total_days = stats.total_days,
        "Dashboard data loaded"
    );
    state.finish_load(stats, reports);
    current_view(state)
}

/// Derive the view from whatever the state currently holds.
pub fn current_view(state: &AppState) -> DashboardView {
    match state.get_load_state() {
        LoadState::Idle | LoadState::Loading => DashboardView::Loading,
        LoadState::Ready { reports, .. } if reports.is_empty() => DashboardView::Empty,
        LoadState::Ready { stats, reports } => {
            DashboardView::Ready(memoized_dashboard(state, &stats, &reports))
        }
    }
}
