use chrono::NaiveDate;
use serde::{Serialize, Deserialize};
use crate::analytics::mood::{mood_color, MoodBucket, DEFAULT_MOOD_COLOR};
use crate::reports::model::{DailyReport, ProgressStats};

/// Mood shown on heatmap cells whose report has an empty mood. Ingested
/// reports never have one (a blank mood becomes "good"); only reports built
/// directly in code reach this.
const HEATMAP_DEFAULT_MOOD: &str = "neutral";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub scores: Vec<u8>,
    pub point_colors: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RadarSeries {
    pub labels: Vec<String>,
    pub values: Vec<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSeries {
    pub labels: Vec<String>,
    pub values: Vec<u32>,
    pub colors: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub score: u8,
    pub achievements: u32,
    pub mood: String,
}

/// Caller order never matters; every series is built in `day` order.
fn sorted_by_day(reports: &[DailyReport]) -> Vec<&DailyReport> {
    let mut ordered: Vec<&DailyReport> = reports.iter().collect();
    ordered.sort_by_key(|r| r.day);
    ordered
}

/// Short axis label such as "Jan 5".
pub fn chart_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn build_trend_series(reports: &[DailyReport]) -> TrendSeries {
    let mut series = TrendSeries::default();
    for report in sorted_by_day(reports) {
        series.labels.push(chart_label(report.date));
        series.scores.push(report.productivity_score);
        series.point_colors.push(mood_color(&report.mood).to_string());
    }
    series
}

/// Counts for the five canonical buckets; absent keys read as zero.
pub fn build_mood_radar(stats: &ProgressStats) -> RadarSeries {
    RadarSeries {
        labels: MoodBucket::ALL.iter().map(|b| b.label().to_string()).collect(),
        values: MoodBucket::ALL
            .iter()
            .map(|b| stats.mood_distribution.get(b.as_str()).copied().unwrap_or(0))
            .collect(),
    }
}

/// One slice per key present in the distribution. Canonical buckets come
/// first in canonical order, then any other keys as supplied.
pub fn build_mood_distribution(stats: &ProgressStats) -> DistributionSeries {
    let mut series = DistributionSeries::default();

    let canonical = MoodBucket::ALL
        .iter()
        .filter_map(|b| stats.mood_distribution.get_key_value(b.as_str()));
    let others = stats
        .mood_distribution
        .iter()
        .filter(|(key, _)| MoodBucket::ALL.iter().all(|b| b.as_str() != key.as_str()));

    for (key, count) in canonical.chain(others) {
        series.labels.push(capitalize(key));
        series.values.push(*count);
        let color = MoodBucket::from_text(key)
            .map(|b| b.color())
            .unwrap_or(DEFAULT_MOOD_COLOR);
        series.colors.push(color.to_string());
    }
    series
}

pub fn build_heatmap(reports: &[DailyReport]) -> Vec<HeatmapCell> {
    sorted_by_day(reports)
        .into_iter()
        .map(|report| HeatmapCell {
            date: report.date,
            score: report.productivity_score,
            achievements: report.achievement_count(),
            mood: if report.mood.trim().is_empty() {
                HEATMAP_DEFAULT_MOOD.to_string()
            } else {
                report.mood.clone()
            },
        })
        .collect()
}

/// Achievements per logged day with one decimal; "0.0" with no days.
pub fn achievement_velocity(stats: &ProgressStats) -> String {
    if stats.total_days == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", stats.total_achievements as f64 / stats.total_days as f64)
}

/// Current streak as a rounded percentage of all logged days.
pub fn consistency_percent(stats: &ProgressStats) -> u32 {
    let days = stats.total_days.max(1) as f64;
    (stats.current_streak as f64 / days * 100.0).round() as u32
}

/// Fill ratio of the streak bar, current over best streak.
pub fn streak_ratio(stats: &ProgressStats) -> f64 {
    stats.current_streak as f64 / stats.best_streak().max(1) as f64
}
