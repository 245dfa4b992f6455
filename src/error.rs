use serde::{Serialize, Deserialize};
use std::fmt;

/// Unified error type for the crate.
/// Fallible operations return Result<T, ProgressError> instead of String errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressError {
    pub message: String,
    pub stage: String,
    pub context: Option<String>,
    pub source: Option<String>,
}

impl ProgressError {
    /// Create a new error with stage and message
    pub fn new<S: Into<String>>(message: S, stage: &'static str) -> Self {
        ProgressError {
            message: message.into(),
            stage: stage.to_string(),
            context: None,
            source: None,
        }
    }

    /// Add additional context information
    pub fn with_context<S: Into<String>>(mut self, context: S) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add source error information
    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for ProgressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.stage, self.message)?;
        if let Some(ref context) = self.context {
            write!(f, " (context: {})", context)?;
        }
        if let Some(ref source) = self.source {
            write!(f, " (source: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProgressError {}

impl From<anyhow::Error> for ProgressError {
    fn from(err: anyhow::Error) -> Self {
        ProgressError::new(
            format!("{:#}", err),
            "unknown"
        ).with_source("anyhow")
    }
}

impl From<serde_json::Error> for ProgressError {
    fn from(err: serde_json::Error) -> Self {
        ProgressError::new(
            format!("JSON error: {}", err),
            "json_parse"
        ).with_source("serde_json")
    }
}

impl From<toml::de::Error> for ProgressError {
    fn from(err: toml::de::Error) -> Self {
        ProgressError::new(
            format!("TOML error: {}", err),
            "config"
        ).with_source("toml")
    }
}
