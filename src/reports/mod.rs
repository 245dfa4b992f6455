pub mod model;
pub mod stats;

pub use model::{DailyReport, ProgressStats, RawReport};
