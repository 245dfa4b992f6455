use serde::{Serialize, Deserialize};

/// Level definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub level: u32,
    pub xp_required: u32,
    pub name: &'static str,
}

/// All level definitions, strictly increasing in level and threshold.
pub static LEVELS: &[Level] = &[
    Level { level: 1, xp_required: 0, name: "Beginner" },
    Level { level: 2, xp_required: 100, name: "Novice" },
    Level { level: 3, xp_required: 300, name: "Apprentice" },
    Level { level: 4, xp_required: 600, name: "Skilled" },
    Level { level: 5, xp_required: 1000, name: "Expert" },
    Level { level: 6, xp_required: 1500, name: "Master" },
    Level { level: 7, xp_required: 2200, name: "Legend" },
];

impl Level {
    /// Highest level whose threshold is within `xp`.
    pub fn for_xp(xp: u32) -> (usize, &'static Level) {
        LEVELS
            .iter()
            .enumerate()
            .rev()
            .find(|(_, l)| xp >= l.xp_required)
            .unwrap_or((0, &LEVELS[0]))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLevel {
    pub current_level: u32,
    #[serde(rename = "currentXP")]
    pub current_xp: u32,
    /// Threshold of the next level; `None` once the table is exhausted.
    #[serde(rename = "nextLevelXP")]
    pub next_level_xp: Option<u32>,
    pub level_name: String,
}

impl UserLevel {
    /// Share of the next threshold already reached, in percent (0-100).
    /// Max level always reads as full.
    pub fn progress_percent(&self) -> f64 {
        match self.next_level_xp {
            Some(next) if next > 0 => {
                (self.current_xp as f64 / next as f64 * 100.0).min(100.0)
            }
            _ => 100.0,
        }
    }

    pub fn xp_to_next(&self) -> Option<u32> {
        self.next_level_xp.map(|next| next.saturating_sub(self.current_xp))
    }

    pub fn is_max_level(&self) -> bool {
        self.next_level_xp.is_none()
    }
}

pub fn resolve_level(xp: u32) -> UserLevel {
    let (index, level) = Level::for_xp(xp);
    UserLevel {
        current_level: level.level,
        current_xp: xp,
        next_level_xp: LEVELS.get(index + 1).map(|next| next.xp_required),
        level_name: level.name.to_string(),
    }
}
