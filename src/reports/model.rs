use std::collections::BTreeMap;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Serialize, Deserialize};
use crate::error::ProgressError;

pub const MAX_PRODUCTIVITY_SCORE: u8 = 10;

/// Mood assumed when a report does not state one.
pub const DEFAULT_MOOD: &str = "good";

/// One daily progress report, immutable once ingested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub day: u32,
    pub date: NaiveDate,
    pub title: String,
    /// Raw markdown body, never interpreted here.
    pub content: String,
    /// Always within 0..=10 after ingestion.
    pub productivity_score: u8,
    pub mood: String,
    pub achievements: Vec<String>,
    /// Wall-clock time the entry was written, when the source knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_at: Option<DateTime<FixedOffset>>,
}

impl DailyReport {
    pub fn achievement_count(&self) -> u32 {
        self.achievements.len() as u32
    }
}

/// Report record as delivered by a source, before defaults are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawReport {
    pub day: Option<u32>,
    pub date: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub productivity_score: Option<f64>,
    pub mood: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub logged_at: Option<DateTime<FixedOffset>>,
}

impl RawReport {
    /// Apply ingestion defaults. Only a missing `day` or an unreadable `date`
    /// rejects the record; every numeric gap becomes zero.
    pub fn into_report(self) -> Result<DailyReport, ProgressError> {
        let day = self.day
            .filter(|d| *d > 0)
            .ok_or_else(|| ProgressError::new("Report has no positive day", "ingest"))?;

        let raw_date = self.date
            .ok_or_else(|| ProgressError::new("Report has no date", "ingest")
                .with_context(format!("day: {}", day)))?;
        let date = parse_report_date(&raw_date)
            .ok_or_else(|| ProgressError::new(
                format!("Unreadable report date '{}'", raw_date),
                "ingest"
            ).with_context(format!("day: {}", day)))?;

        let mood = self.mood
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MOOD.to_string());

        Ok(DailyReport {
            day,
            date,
            title: self.title.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            productivity_score: clamp_score(self.productivity_score),
            mood,
            achievements: self.achievements.unwrap_or_default(),
            logged_at: self.logged_at,
        })
    }
}

fn clamp_score(score: Option<f64>) -> u8 {
    match score {
        Some(s) if s.is_finite() && s > 0.0 => {
            s.round().min(MAX_PRODUCTIVITY_SCORE as f64) as u8
        }
        _ => 0,
    }
}

/// Accepts a plain ISO date or a full RFC 3339 timestamp.
fn parse_report_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

/// Aggregate snapshot over all reports, as supplied by a report source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total_days: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_achievements: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub average_productivity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub current_streak: u32,
    pub longest_streak: Option<u32>,
    /// Mood bucket name (lowercase) to occurrence count.
    #[serde(deserialize_with = "null_as_default")]
    pub mood_distribution: BTreeMap<String, u32>,
}

/// Explicit `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProgressStats {
    /// Longest streak known, never below the current one.
    pub fn best_streak(&self) -> u32 {
        self.longest_streak.unwrap_or(0).max(self.current_streak)
    }
}
