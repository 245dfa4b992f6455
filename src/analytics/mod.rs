pub mod charts;
pub mod dashboard;
pub mod mood;
pub mod trend;

pub use dashboard::{build_dashboard, DashboardSnapshot, Kpis};
pub use trend::{classify_trend, Trend};
