use serde::{Serialize, Deserialize};
use crate::reports::model::DailyReport;

/// Points averaged on each side of the comparison.
const TREND_WINDOW: usize = 3;
/// Minimum change in mean score before a trend counts as moving.
const TREND_MARGIN: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Up => "Improving",
            Trend::Down => "Declining",
            Trend::Stable => "Stable",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Trend::Up => "#00cc66",
            Trend::Down => "#cc4444",
            Trend::Stable => "#ccaa00",
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Compare the mean of the last three scores with the three before them.
pub fn classify_trend(scores: &[f64]) -> Trend {
    if scores.len() < 2 {
        return Trend::Stable;
    }

    let n = scores.len();
    let recent = &scores[n.saturating_sub(TREND_WINDOW)..];
    let previous = &scores[n.saturating_sub(2 * TREND_WINDOW)..n.saturating_sub(TREND_WINDOW)];
    if previous.is_empty() {
        return Trend::Stable;
    }

    let delta = mean(recent) - mean(previous);
    if delta > TREND_MARGIN {
        Trend::Up
    } else if delta < -TREND_MARGIN {
        Trend::Down
    } else {
        Trend::Stable
    }
}

/// Productivity scores in ascending `day` order, whatever order the caller holds.
pub fn scores_by_day(reports: &[DailyReport]) -> Vec<f64> {
    let mut ordered: Vec<&DailyReport> = reports.iter().collect();
    ordered.sort_by_key(|r| r.day);
    ordered.iter().map(|r| r.productivity_score as f64).collect()
}

pub fn report_trend(reports: &[DailyReport]) -> Trend {
    classify_trend(&scores_by_day(reports))
}
