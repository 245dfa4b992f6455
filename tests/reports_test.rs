mod common;

use chrono::NaiveDate;
use common::{report, with_achievements};
use progresslog_lib::reports::stats::calculate_streaks;
use progresslog_lib::reports::{ProgressStats, RawReport};

fn raw(json: &str) -> RawReport {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_ingest_full_record() {
    let report = raw(r#"{
        "day": 4,
        "date": "2025-03-09",
        "title": "Parser work",
        "content": "- finished lexer",
        "productivityScore": 8,
        "mood": "Good",
        "achievements": ["lexer", "tests"],
        "loggedAt": "2025-03-09T23:15:00+01:00"
    }"#)
    .into_report()
    .unwrap();

    assert_eq!(report.day, 4);
    assert_eq!(report.date, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
    assert_eq!(report.productivity_score, 8);
    assert_eq!(report.mood, "Good");
    assert_eq!(report.achievement_count(), 2);
    assert!(report.logged_at.is_some());
}

#[test]
fn test_ingest_defaults_missing_fields() {
    let report = raw(r#"{"day": 2, "date": "2025-03-09T08:00:00Z"}"#)
        .into_report()
        .unwrap();

    assert_eq!(report.date, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
    assert_eq!(report.productivity_score, 0);
    assert_eq!(report.mood, "good");
    assert!(report.achievements.is_empty());
    assert!(report.title.is_empty());
    assert!(report.logged_at.is_none());
}

#[test]
fn test_ingest_clamps_scores() {
    let high = raw(r#"{"day": 1, "date": "2025-01-01", "productivityScore": 14}"#)
        .into_report()
        .unwrap();
    assert_eq!(high.productivity_score, 10);

    let negative = raw(r#"{"day": 1, "date": "2025-01-01", "productivityScore": -3}"#)
        .into_report()
        .unwrap();
    assert_eq!(negative.productivity_score, 0);

    let fractional = raw(r#"{"day": 1, "date": "2025-01-01", "productivityScore": 7.6}"#)
        .into_report()
        .unwrap();
    assert_eq!(fractional.productivity_score, 8);
}

#[test]
fn test_ingest_rejects_unidentifiable_records() {
    let no_day = raw(r#"{"date": "2025-01-01"}"#).into_report().unwrap_err();
    assert_eq!(no_day.stage, "ingest");

    let zero_day = raw(r#"{"day": 0, "date": "2025-01-01"}"#).into_report();
    assert!(zero_day.is_err());

    let bad_date = raw(r#"{"day": 3, "date": "yesterday"}"#).into_report().unwrap_err();
    assert!(bad_date.message.contains("yesterday"));
}

#[test]
fn test_stats_deserialize_with_defaults() {
    let stats: ProgressStats = serde_json::from_str(r#"{"totalDays": 4, "currentStreak": 2}"#).unwrap();
    assert_eq!(stats.total_days, 4);
    assert_eq!(stats.total_achievements, 0);
    assert_eq!(stats.longest_streak, None);
    assert!(stats.mood_distribution.is_empty());
    assert_eq!(stats.best_streak(), 2);
}

#[test]
fn test_stats_deserialize_nulls_as_defaults() {
    let stats: ProgressStats = serde_json::from_str(
        r#"{"totalDays": 5, "totalAchievements": null, "averageProductivity": null,
            "currentStreak": null, "longestStreak": null, "moodDistribution": null}"#,
    )
    .unwrap();
    assert_eq!(stats.total_days, 5);
    assert_eq!(stats.total_achievements, 0);
    assert_eq!(stats.average_productivity, 0.0);
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.longest_streak, None);
    assert!(stats.mood_distribution.is_empty());
}

#[test]
fn test_streaks_over_dates() {
    // days 1,2,3 then a gap, then 6,7
    let reports = vec![
        report(7, 5, "good"),
        report(1, 5, "good"),
        report(3, 5, "good"),
        report(2, 5, "good"),
        report(6, 5, "good"),
    ];
    let streaks = calculate_streaks(&reports);
    assert_eq!(streaks.longest_streak, 3);
    assert_eq!(streaks.current_streak, 2);

    assert_eq!(calculate_streaks(&[]).current_streak, 0);
    assert_eq!(calculate_streaks(&[report(1, 5, "good")]).longest_streak, 1);
}

#[test]
fn test_stats_from_reports() {
    let reports = vec![
        with_achievements(report(1, 7, "Excellent!"), 2),
        with_achievements(report(2, 8, "good"), 1),
        report(3, 6, "GOOD"),
        report(4, 9, "Bored?"),
    ];
    let stats = ProgressStats::from_reports(&reports);

    assert_eq!(stats.total_days, 4);
    assert_eq!(stats.total_achievements, 3);
    assert_eq!(stats.average_productivity, 7.5);
    assert_eq!(stats.current_streak, 4);
    assert_eq!(stats.longest_streak, Some(4));
    assert_eq!(stats.mood_distribution.get("excellent"), Some(&1));
    assert_eq!(stats.mood_distribution.get("good"), Some(&2));
    assert_eq!(stats.mood_distribution.get("bored"), Some(&1));
}

#[test]
fn test_stats_from_no_reports() {
    let stats = ProgressStats::from_reports(&[]);
    assert_eq!(stats.total_days, 0);
    assert_eq!(stats.average_productivity, 0.0);
    assert_eq!(stats.longest_streak, Some(0));
}
