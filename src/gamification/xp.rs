use crate::reports::model::{DailyReport, MAX_PRODUCTIVITY_SCORE};

/// XP rewards for a logged report
pub struct XpRewards;

impl XpRewards {
    /// Every report, regardless of content.
    pub const PER_REPORT: u32 = 10;

    /// Score from which a report counts as high-productivity.
    pub const HIGH_SCORE: u8 = 8;
    pub const HIGH_SCORE_BONUS: u32 = 5;

    /// Stacks on top of the high-score bonus.
    pub const PERFECT_SCORE_BONUS: u32 = 10;
}

pub fn report_xp(report: &DailyReport) -> u32 {
    let mut xp = XpRewards::PER_REPORT;
    if report.productivity_score >= XpRewards::HIGH_SCORE {
        xp += XpRewards::HIGH_SCORE_BONUS;
    }
    if report.productivity_score == MAX_PRODUCTIVITY_SCORE {
        xp += XpRewards::PERFECT_SCORE_BONUS;
    }
    xp
}

/// Total XP over a report set. Order does not matter; streaks earn nothing.
pub fn compute_xp(reports: &[DailyReport]) -> u32 {
    reports
        .iter()
        .map(report_xp)
        .fold(0u32, |total, xp| total.saturating_add(xp))
}
