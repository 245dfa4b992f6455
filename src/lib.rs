pub mod analytics;
pub mod cache;
pub mod config;
pub mod error;
pub mod gamification;
pub mod logging;
pub mod metrics;
pub mod perf;
pub mod reports;
pub mod routes;
pub mod source;
pub mod state;

#[cfg(test)]
#[path = "../tests/error_handling_test.rs"]
mod error_handling_test;

/// Load the configured reports once and print the dashboard as JSON.
pub fn run() -> Result<(), error::ProgressError> {
    // Initialize structured logging first
    if let Err(e) = logging::init_logging() {
        eprintln!("{}", e);
    }
    tracing::info!("progresslog starting");

    let settings = config::get_settings();
    let source = source::ReportSource::from_settings(settings);
    let app_state = state::app::AppState::with_capacity(settings.snapshot_cache_capacity);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| error::ProgressError::new(
            format!("Failed to create async runtime: {}", e),
            "startup"
        ))?;

    let view = rt.block_on(routes::load_dashboard(&app_state, &source, settings.recent_limit));

    let json = serde_json::to_string_pretty(&view)?;
    println!("{}", json);
    Ok(())
}
