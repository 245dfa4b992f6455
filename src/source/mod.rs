pub mod directory;
pub mod http;

use std::collections::HashSet;
use std::time::Duration;
use crate::config::{Settings, SourceConfig};
use crate::error::ProgressError;
use crate::reports::model::{DailyReport, ProgressStats, RawReport};

pub use directory::DirectorySource;
pub use http::HttpSource;

/// Failure kinds a source can report before they are folded into `ProgressError`.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("report source timed out after {0}s")]
    Timeout(u64),
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("failed to decode {what}: {detail}")]
    Decode { what: String, detail: String },
}

impl From<FetchError> for ProgressError {
    fn from(err: FetchError) -> Self {
        let stage = match err {
            FetchError::Timeout(_) => "timeout",
            FetchError::Status { .. } => "fetch",
            FetchError::Decode { .. } => "json_parse",
        };
        ProgressError::new(err.to_string(), stage).with_source("source")
    }
}

/// Where `DailyReport`s and `ProgressStats` come from.
#[derive(Debug, Clone)]
pub enum ReportSource {
    Directory(DirectorySource),
    Http(HttpSource),
}

impl ReportSource {
    pub fn from_settings(settings: &Settings) -> Self {
        match &settings.source {
            SourceConfig::Directory { path } => {
                ReportSource::Directory(DirectorySource::new(path.clone()))
            }
            SourceConfig::Http { base_url } => ReportSource::Http(HttpSource::new(
                base_url.clone(),
                Duration::from_secs(settings.fetch_timeout_secs),
            )),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReportSource::Directory(_) => "directory",
            ReportSource::Http(_) => "http",
        }
    }

    /// Up to `limit` reports, most recent first.
    pub async fn fetch_recent_reports(&self, limit: usize) -> Result<Vec<DailyReport>, ProgressError> {
        match self {
            ReportSource::Directory(source) => source.fetch_recent_reports(limit).await,
            ReportSource::Http(source) => source.fetch_recent_reports(limit).await,
        }
    }

    pub async fn fetch_stats(&self) -> Result<ProgressStats, ProgressError> {
        match self {
            ReportSource::Directory(source) => source.fetch_stats().await,
            ReportSource::Http(source) => source.fetch_stats().await,
        }
    }
}

/// Apply ingestion defaults, dropping unreadable records and repeated days.
pub(crate) fn ingest_reports(raws: Vec<RawReport>, origin: &str) -> Vec<DailyReport> {
    let mut seen_days = HashSet::new();
    let mut reports = Vec::with_capacity(raws.len());

    for raw in raws {
        match raw.into_report() {
            Ok(report) => {
                if seen_days.insert(report.day) {
                    reports.push(report);
                } else {
                    tracing::warn!(origin = origin, day = report.day, "Duplicate report day, skipping");
                }
            }
            Err(e) => {
                tracing::warn!(origin = origin, error = %e, "Skipping unreadable report");
            }
        }
    }
    reports
}

pub(crate) fn most_recent_first(mut reports: Vec<DailyReport>, limit: usize) -> Vec<DailyReport> {
    reports.sort_by(|a, b| b.day.cmp(&a.day));
    reports.truncate(limit);
    reports
}
