pub mod settings;

pub use settings::{get_settings, Settings, SourceConfig};
