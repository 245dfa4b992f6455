use std::path::PathBuf;
use crate::error::ProgressError;
use crate::reports::model::{DailyReport, ProgressStats, RawReport};
use crate::source::{ingest_reports, most_recent_first};

/// Reads one JSON report per `*.json` file in a directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: PathBuf) -> Self {
        DirectorySource { dir }
    }

    /// Load every readable report. A missing directory is an empty source.
    /// Files are ingested in path order, so a repeated day keeps the record
    /// from the file that sorts first.
    pub async fn load_all(&self) -> Result<Vec<DailyReport>, ProgressError> {
        let mut raws: Vec<(PathBuf, RawReport)> = Vec::new();

        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = ?self.dir, "Reports directory does not exist yet");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(ProgressError::new(
                    format!("Failed to read reports directory: {}", e),
                    "io"
                ).with_context(format!("path: {:?}", self.dir)));
            }
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    return Err(ProgressError::new(
                        format!("Failed to list reports directory: {}", e),
                        "io"
                    ).with_context(format!("path: {:?}", self.dir)));
                }
            };
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            match tokio::fs::read_to_string(&path).await {
                Ok(text) => match serde_json::from_str::<RawReport>(&text) {
                    Ok(raw) => raws.push((path, raw)),
                    Err(e) => {
                        tracing::warn!(
                            path = ?path,
                            error = %e,
                            "Failed to parse report file, skipping"
                        );
                    }
                },
                Err(e) => {
                    tracing::warn!(
                        path = ?path,
                        error = %e,
                        "Failed to read report file, skipping"
                    );
                }
            }
        }

        raws.sort_by(|a, b| a.0.cmp(&b.0));
        let origin = self.dir.to_string_lossy();
        Ok(ingest_reports(raws.into_iter().map(|(_, raw)| raw).collect(), &origin))
    }

    pub async fn fetch_recent_reports(&self, limit: usize) -> Result<Vec<DailyReport>, ProgressError> {
        let reports = self.load_all().await?;
        Ok(most_recent_first(reports, limit))
    }

    /// Stats are derived over every report on disk, not just the recent window.
    pub async fn fetch_stats(&self) -> Result<ProgressStats, ProgressError> {
        let reports = self.load_all().await?;
        Ok(ProgressStats::from_reports(&reports))
    }
}
