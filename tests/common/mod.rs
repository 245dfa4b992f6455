#![allow(dead_code)]

use chrono::{DateTime, Duration, FixedOffset, NaiveDate};
use progresslog_lib::reports::DailyReport;

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// Report for `day`, dated `day - 1` days after 2025-01-01.
pub fn report(day: u32, score: u8, mood: &str) -> DailyReport {
    DailyReport {
        day,
        date: start_date() + Duration::days(day as i64 - 1),
        title: format!("Day {}", day),
        content: format!("# Day {}\n\nNotes.", day),
        productivity_score: score,
        mood: mood.to_string(),
        achievements: Vec::new(),
        logged_at: None,
    }
}

pub fn with_achievements(mut report: DailyReport, count: usize) -> DailyReport {
    report.achievements = (0..count).map(|i| format!("achievement {}", i)).collect();
    report
}

pub fn logged_at(mut report: DailyReport, rfc3339: &str) -> DailyReport {
    report.logged_at = Some(DateTime::<FixedOffset>::parse_from_rfc3339(rfc3339).unwrap());
    report
}

/// Reports for days 1..=n with the given scores.
pub fn reports_with_scores(scores: &[u8]) -> Vec<DailyReport> {
    scores
        .iter()
        .enumerate()
        .map(|(i, score)| report(i as u32 + 1, *score, "good"))
        .collect()
}
