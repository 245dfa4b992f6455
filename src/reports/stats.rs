use std::collections::BTreeMap;
use chrono::NaiveDate;
use crate::analytics::mood::{normalize_mood, MoodBucket};
use crate::reports::model::{DailyReport, ProgressStats};

/// Key used in the mood distribution when a mood normalizes to nothing.
const UNKNOWN_MOOD_KEY: &str = "unknown";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakStats {
    /// Run of consecutive dates ending at the most recent report.
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Calculate streaks over report dates. Duplicate dates collapse.
pub fn calculate_streaks(reports: &[DailyReport]) -> StreakStats {
    let mut dates: Vec<NaiveDate> = reports.iter().map(|r| r.date).collect();
    dates.sort();
    dates.dedup();

    if dates.is_empty() {
        return StreakStats::default();
    }

    let mut longest = 1u32;
    let mut run = 1u32;
    for window in dates.windows(2) {
        if window[0].succ_opt() == Some(window[1]) {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }

    StreakStats {
        // `run` ends on the last date after the scan.
        current_streak: run,
        longest_streak: longest,
    }
}

impl ProgressStats {
    /// Derive the aggregate snapshot locally from a full report set.
    pub fn from_reports(reports: &[DailyReport]) -> Self {
        let total_days = reports.len() as u32;
        let total_achievements = reports.iter().map(DailyReport::achievement_count).sum();

        let average_productivity = if reports.is_empty() {
            0.0
        } else {
            let sum: u32 = reports.iter().map(|r| r.productivity_score as u32).sum();
            let mean = sum as f64 / reports.len() as f64;
            (mean * 10.0).round() / 10.0
        };

        let mut mood_distribution: BTreeMap<String, u32> = BTreeMap::new();
        for report in reports {
            let key = match MoodBucket::from_text(&report.mood) {
                Some(bucket) => bucket.as_str().to_string(),
                None => {
                    let normalized = normalize_mood(&report.mood);
                    if normalized.is_empty() {
                        UNKNOWN_MOOD_KEY.to_string()
                    } else {
                        normalized
                    }
                }
            };
            *mood_distribution.entry(key).or_insert(0) += 1;
        }

        let streaks = calculate_streaks(reports);

        ProgressStats {
            total_days,
            total_achievements,
            average_productivity,
            current_streak: streaks.current_streak,
            longest_streak: Some(streaks.longest_streak),
            mood_distribution,
        }
    }
}
