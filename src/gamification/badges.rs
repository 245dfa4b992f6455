use chrono::Timelike;
use serde::{Serialize, Deserialize};
use crate::reports::model::{DailyReport, ProgressStats, MAX_PRODUCTIVITY_SCORE};

const FIRST_STREAK_DAYS: u32 = 3;
const WEEK_STREAK_DAYS: u32 = 7;
const SCHOLAR_ENTRIES: usize = 10;
/// Entries logged before this hour count as early.
const EARLY_BIRD_BEFORE_HOUR: u32 = 10;
/// Entries logged at or after this hour count as late.
const NIGHT_OWL_FROM_HOUR: u32 = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeId {
    FirstStreak,
    WeekWarrior,
    #[serde(rename = "perfect_10")]
    Perfect10,
    EarlyBird,
    NightOwl,
    Scholar,
}

impl BadgeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeId::FirstStreak => "first_streak",
            BadgeId::WeekWarrior => "week_warrior",
            BadgeId::Perfect10 => "perfect_10",
            BadgeId::EarlyBird => "early_bird",
            BadgeId::NightOwl => "night_owl",
            BadgeId::Scholar => "scholar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeIcon {
    Fire,
    Star,
    Sun,
    Moon,
    Grad,
}

/// Cosmetic only; never consulted by unlock logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

#[derive(Debug, Clone, Copy)]
pub struct BadgeDefinition {
    pub id: BadgeId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: BadgeIcon,
    pub rarity: Rarity,
}

/// Static template data; evaluation hands out owned copies.
pub static BADGE_CATALOG: &[BadgeDefinition] = &[
    BadgeDefinition {
        id: BadgeId::FirstStreak,
        name: "Momentum",
        description: "Hit a 3-day streak",
        icon: BadgeIcon::Fire,
        rarity: Rarity::Common,
    },
    BadgeDefinition {
        id: BadgeId::WeekWarrior,
        name: "Week Warrior",
        description: "Hit a 7-day streak",
        icon: BadgeIcon::Fire,
        rarity: Rarity::Rare,
    },
    BadgeDefinition {
        id: BadgeId::Perfect10,
        name: "Perfectionist",
        description: "Score a perfect 10/10",
        icon: BadgeIcon::Star,
        rarity: Rarity::Epic,
    },
    BadgeDefinition {
        id: BadgeId::EarlyBird,
        name: "Early Bird",
        description: "Log an entry before 10 AM",
        icon: BadgeIcon::Sun,
        rarity: Rarity::Common,
    },
    BadgeDefinition {
        id: BadgeId::NightOwl,
        name: "Night Owl",
        description: "Log an entry after 10 PM",
        icon: BadgeIcon::Moon,
        rarity: Rarity::Common,
    },
    BadgeDefinition {
        id: BadgeId::Scholar,
        name: "Scholar",
        description: "Log 10 learning entries",
        icon: BadgeIcon::Grad,
        rarity: Rarity::Rare,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: BadgeId,
    pub name: String,
    pub description: String,
    pub icon: BadgeIcon,
    pub rarity: Rarity,
    pub is_unlocked: bool,
}

impl BadgeDefinition {
    fn to_badge(&self, is_unlocked: bool) -> Badge {
        Badge {
            id: self.id,
            name: self.name.to_string(),
            description: self.description.to_string(),
            icon: self.icon,
            rarity: self.rarity,
            is_unlocked,
        }
    }
}

fn streak_reached(stats: &ProgressStats, days: u32) -> bool {
    stats.current_streak >= days || stats.longest_streak.unwrap_or(0) >= days
}

/// Reports without `logged_at` never match.
fn any_logged_hour(reports: &[DailyReport], pred: impl Fn(u32) -> bool) -> bool {
    reports
        .iter()
        .filter_map(|r| r.logged_at)
        .any(|at| pred(at.hour()))
}

pub fn is_unlocked(id: BadgeId, stats: &ProgressStats, reports: &[DailyReport]) -> bool {
    match id {
        BadgeId::FirstStreak => streak_reached(stats, FIRST_STREAK_DAYS),
        BadgeId::WeekWarrior => streak_reached(stats, WEEK_STREAK_DAYS),
        BadgeId::Perfect10 => reports
            .iter()
            .any(|r| r.productivity_score == MAX_PRODUCTIVITY_SCORE),
        BadgeId::EarlyBird => any_logged_hour(reports, |h| h < EARLY_BIRD_BEFORE_HOUR),
        BadgeId::NightOwl => any_logged_hour(reports, |h| h >= NIGHT_OWL_FROM_HOUR),
        BadgeId::Scholar => reports.len() >= SCHOLAR_ENTRIES,
    }
}

/// One badge per catalog entry, in catalog order.
pub fn evaluate_badges(stats: &ProgressStats, reports: &[DailyReport]) -> Vec<Badge> {
    BADGE_CATALOG
        .iter()
        .map(|def| def.to_badge(is_unlocked(def.id, stats, reports)))
        .collect()
}
