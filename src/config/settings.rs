use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use lazy_static::lazy_static;
use crate::error::ProgressError;

const APP_DIR: &str = "com.progresslog.app";
const SETTINGS_FILE: &str = "settings.toml";

/// Where reports come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    /// A directory of one-report-per-file JSON documents.
    Directory { path: PathBuf },
    /// A service exposing `/reports` and `/stats`.
    Http { base_url: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source: SourceConfig,
    /// How many of the most recent reports a load asks for.
    pub recent_limit: usize,
    pub fetch_timeout_secs: u64,
    pub snapshot_cache_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            source: SourceConfig::Directory { path: app_data_dir().join("reports") },
            recent_limit: 50,
            fetch_timeout_secs: 10,
            snapshot_cache_capacity: 16,
        }
    }
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self, ProgressError> {
        let settings: Settings = toml::from_str(content)?;
        Ok(settings)
    }
}

/// Platform-specific app data directory
pub fn app_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push("Library/Application Support");
            dir.push(APP_DIR);
            return dir;
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            let mut dir = PathBuf::from(appdata);
            dir.push(APP_DIR);
            return dir;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push(".local/share");
            dir.push(APP_DIR);
            return dir;
        }
    }

    // Fallback
    PathBuf::from(".")
}

fn settings_path() -> PathBuf {
    app_data_dir().join(SETTINGS_FILE)
}

fn load_settings_internal() -> Settings {
    let path = settings_path();

    match std::fs::read_to_string(&path) {
        Ok(content) => match Settings::from_toml_str(&content) {
            Ok(settings) => {
                tracing::info!(path = ?path, "Loaded settings");
                settings
            }
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "Failed to parse settings, using defaults");
                Settings::default()
            }
        },
        Err(e) => {
            tracing::debug!(path = ?path, error = %e, "No settings file, using defaults");
            Settings::default()
        }
    }
}

lazy_static! {
    static ref SETTINGS: Settings = load_settings_internal();
}

/// Get the cached settings (loaded once, on first use)
pub fn get_settings() -> &'static Settings {
    &SETTINGS
}
