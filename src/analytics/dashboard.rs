use serde::{Serialize, Deserialize};
use crate::analytics::charts::{
    achievement_velocity, build_heatmap, build_mood_distribution, build_mood_radar,
    build_trend_series, consistency_percent, streak_ratio, DistributionSeries, HeatmapCell,
    RadarSeries, TrendSeries,
};
use crate::analytics::trend::{report_trend, Trend};
use crate::gamification::{compute_xp, evaluate_badges, resolve_level, Badge, UserLevel};
use crate::perf::PerfTimer;
use crate::reports::model::{DailyReport, ProgressStats};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub streak_ratio: f64,
    pub average_productivity: f64,
    pub trend: Trend,
    pub trend_label: String,
    pub trend_color: String,
    pub total_achievements: u32,
    pub achievement_velocity: String,
    pub total_days: u32,
    pub consistency_percent: u32,
}

/// Everything the dashboard renders, derived from one `(stats, reports)` pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub level: UserLevel,
    pub badges: Vec<Badge>,
    pub kpis: Kpis,
    pub trend_series: TrendSeries,
    pub mood_radar: RadarSeries,
    pub mood_distribution: DistributionSeries,
    pub heatmap: Vec<HeatmapCell>,
}

pub fn build_kpis(stats: &ProgressStats, reports: &[DailyReport]) -> Kpis {
    let trend = report_trend(reports);
    Kpis {
        current_streak: stats.current_streak,
        longest_streak: stats.best_streak(),
        streak_ratio: streak_ratio(stats),
        average_productivity: stats.average_productivity,
        trend,
        trend_label: trend.label().to_string(),
        trend_color: trend.color().to_string(),
        total_achievements: stats.total_achievements,
        achievement_velocity: achievement_velocity(stats),
        total_days: stats.total_days,
        consistency_percent: consistency_percent(stats),
    }
}

/// Pure; identical inputs give structurally equal snapshots.
pub fn build_dashboard(stats: &ProgressStats, reports: &[DailyReport]) -> DashboardSnapshot {
    let _perf = PerfTimer::new("build_dashboard");

    let xp = compute_xp(reports);
    let snapshot = DashboardSnapshot {
        level: resolve_level(xp),
        badges: evaluate_badges(stats, reports),
        kpis: build_kpis(stats, reports),
        trend_series: build_trend_series(reports),
        mood_radar: build_mood_radar(stats),
        mood_distribution: build_mood_distribution(stats),
        heatmap: build_heatmap(reports),
    };

    tracing::debug!(
        reports = reports.len(),
        xp = xp,
        level = snapshot.level.current_level,
        unlocked = snapshot.badges.iter().filter(|b| b.is_unlocked).count(),
        "Dashboard snapshot built"
    );
    snapshot
}
