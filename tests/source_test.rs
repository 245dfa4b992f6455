use std::path::Path;
use std::time::Duration;
use progresslog_lib::config::{Settings, SourceConfig};
use progresslog_lib::source::{DirectorySource, HttpSource, ReportSource};

fn write_report(dir: &Path, name: &str, day: u32, score: u8, mood: &str) {
    let body = serde_json::json!({
        "day": day,
        "date": format!("2025-02-{:02}", day),
        "title": format!("Day {}", day),
        "content": "notes",
        "productivityScore": score,
        "mood": mood,
        "achievements": ["shipped"]
    });
    std::fs::write(dir.join(name), body.to_string()).unwrap();
}

#[tokio::test]
async fn test_directory_missing_is_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let source = DirectorySource::new(tmp.path().join("does-not-exist"));

    let reports = source.fetch_recent_reports(10).await.unwrap();
    assert!(reports.is_empty());

    let stats = source.fetch_stats().await.unwrap();
    assert_eq!(stats.total_days, 0);
}

#[tokio::test]
async fn test_directory_recent_first_and_limited() {
    let tmp = tempfile::tempdir().unwrap();
    for day in 1..=5 {
        write_report(tmp.path(), &format!("day-{}.json", day), day, 6, "good");
    }
    let source = DirectorySource::new(tmp.path().to_path_buf());

    let reports = source.fetch_recent_reports(3).await.unwrap();
    let days: Vec<u32> = reports.iter().map(|r| r.day).collect();
    assert_eq!(days, vec![5, 4, 3]);

    // Stats cover everything on disk, not only the window.
    let stats = source.fetch_stats().await.unwrap();
    assert_eq!(stats.total_days, 5);
    assert_eq!(stats.total_achievements, 5);
    assert_eq!(stats.current_streak, 5);
}

#[tokio::test]
async fn test_directory_skips_bad_files() {
    let tmp = tempfile::tempdir().unwrap();
    write_report(tmp.path(), "good.json", 1, 7, "okay");
    std::fs::write(tmp.path().join("broken.json"), "{ not json").unwrap();
    std::fs::write(tmp.path().join("undated.json"), r#"{"day": 9}"#).unwrap();
    std::fs::write(tmp.path().join("notes.md"), "# not a report").unwrap();

    let source = DirectorySource::new(tmp.path().to_path_buf());
    let reports = source.fetch_recent_reports(50).await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].day, 1);
}

#[tokio::test]
async fn test_directory_duplicate_day_keeps_first_by_path() {
    let tmp = tempfile::tempdir().unwrap();
    write_report(tmp.path(), "b-duplicate.json", 4, 2, "tough");
    write_report(tmp.path(), "a-first.json", 4, 7, "okay");

    let source = DirectorySource::new(tmp.path().to_path_buf());
    for _ in 0..3 {
        let reports = source.fetch_recent_reports(50).await.unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].productivity_score, 7);
        assert_eq!(reports[0].mood, "okay");
    }
}

#[tokio::test]
async fn test_directory_path_not_a_directory_errors() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("reports.json");
    std::fs::write(&file, "[]").unwrap();

    let source = DirectorySource::new(file);
    let err = source.load_all().await.unwrap_err();
    assert_eq!(err.stage, "io");
    assert!(source.fetch_stats().await.is_err());
}

#[tokio::test]
async fn test_http_source_unreachable_errors() {
    let source = HttpSource::new("http://127.0.0.1:9/".to_string(), Duration::from_secs(2));
    let result = source.fetch_recent_reports(5).await;
    assert!(result.is_err());
    assert!(source.fetch_stats().await.is_err());
}

#[test]
fn test_settings_from_toml() {
    let settings = Settings::from_toml_str(
        r#"
        recent_limit = 20

        [source]
        kind = "http"
        base_url = "http://localhost:8080/api"
        "#,
    )
    .unwrap();

    assert_eq!(settings.recent_limit, 20);
    assert_eq!(settings.fetch_timeout_secs, 10);
    assert_eq!(
        settings.source,
        SourceConfig::Http { base_url: "http://localhost:8080/api".to_string() }
    );
    assert_eq!(ReportSource::from_settings(&settings).name(), "http");
}

#[test]
fn test_settings_defaults_and_errors() {
    let settings = Settings::from_toml_str("").unwrap();
    assert_eq!(settings, Settings::default());
    assert!(matches!(settings.source, SourceConfig::Directory { .. }));

    let err = Settings::from_toml_str("recent_limit = \"many\"").unwrap_err();
    assert_eq!(err.stage, "config");
}
