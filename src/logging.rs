use crate::error::ProgressError;

/// Initialize structured logging with tracing.
/// Call once at startup; a second call reports an error instead of panicking.
pub fn init_logging() -> Result<(), ProgressError> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr)
                .json()
        );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ProgressError::new(
            format!("Failed to set global tracing subscriber: {}", e),
            "startup"
        ))?;

    tracing::info!("Structured logging initialized");
    Ok(())
}

pub fn log_fetch(source: &str, success: bool, latency_ms: u64) {
    if success {
        tracing::info!(source = source, latency_ms = latency_ms, "Report fetch");
    } else {
        tracing::warn!(source = source, latency_ms = latency_ms, "Report fetch failed");
    }
}

pub fn log_snapshot_cache(key: &str, hit: bool) {
    tracing::debug!(key = key, hit = hit, "Snapshot cache lookup");
}
