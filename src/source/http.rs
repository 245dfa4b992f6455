use std::sync::OnceLock;
use anyhow::Context;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::time::{timeout, Duration};
use crate::error::ProgressError;
use crate::logging::log_fetch;
use crate::reports::model::{DailyReport, ProgressStats, RawReport};
use crate::source::{ingest_reports, most_recent_first, FetchError};

/// Reusable HTTP client singleton (created once, reused for all requests)
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

fn get_http_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| {
        Client::builder()
            .tcp_keepalive(Duration::from_secs(30))
            .pool_max_idle_per_host(4)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            })
    })
}

/// Fetches reports from a service exposing `GET /reports?limit=N` and `GET /stats`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        HttpSource { base_url, timeout }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ProgressError> {
        let url = self.url(path);
        let start = std::time::Instant::now();

        let result = timeout(self.timeout, async {
            let response = get_http_client()
                .get(&url)
                .send()
                .await
                .with_context(|| format!("Failed to reach report source at '{}'", url))?;

            let status = response.status();
            if !status.is_success() {
                return Err(anyhow::Error::new(FetchError::Status {
                    status: status.as_u16(),
                    url: url.clone(),
                }));
            }

            let body = response
                .text()
                .await
                .with_context(|| format!("Failed to read body from '{}'", url))?;

            serde_json::from_str::<T>(&body).map_err(|e| {
                anyhow::Error::new(FetchError::Decode {
                    what: path.to_string(),
                    detail: e.to_string(),
                })
            })
        })
        .await;

        let latency_ms = start.elapsed().as_millis() as u64;
        match result {
            Ok(Ok(value)) => {
                log_fetch(&url, true, latency_ms);
                Ok(value)
            }
            Ok(Err(e)) => {
                log_fetch(&url, false, latency_ms);
                match e.downcast::<FetchError>() {
                    Ok(fetch_error) => Err(fetch_error.into()),
                    Err(other) => Err(ProgressError::from(other).with_context(format!("url: {}", url))),
                }
            }
            Err(_) => {
                log_fetch(&url, false, latency_ms);
                Err(FetchError::Timeout(self.timeout.as_secs()).into())
            }
        }
    }

    pub async fn fetch_recent_reports(&self, limit: usize) -> Result<Vec<DailyReport>, ProgressError> {
        let raws: Vec<RawReport> = self.get_json(&format!("reports?limit={}", limit)).await?;
        let reports = ingest_reports(raws, &self.base_url);
        Ok(most_recent_first(reports, limit))
    }

    pub async fn fetch_stats(&self) -> Result<ProgressStats, ProgressError> {
        self.get_json("stats").await
    }
}
