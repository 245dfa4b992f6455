use serde::{Serialize, Deserialize};

/// Color for moods outside the canonical buckets.
pub const DEFAULT_MOOD_COLOR: &str = "#ff9500ff";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodBucket {
    Excellent,
    Good,
    Okay,
    Challenging,
    Tough,
}

impl MoodBucket {
    /// Canonical display order.
    pub const ALL: [MoodBucket; 5] = [
        MoodBucket::Excellent,
        MoodBucket::Good,
        MoodBucket::Okay,
        MoodBucket::Challenging,
        MoodBucket::Tough,
    ];

    pub fn from_text(text: &str) -> Option<Self> {
        match normalize_mood(text).as_str() {
            "excellent" => Some(MoodBucket::Excellent),
            "good" => Some(MoodBucket::Good),
            "okay" => Some(MoodBucket::Okay),
            "challenging" => Some(MoodBucket::Challenging),
            "tough" => Some(MoodBucket::Tough),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodBucket::Excellent => "excellent",
            MoodBucket::Good => "good",
            MoodBucket::Okay => "okay",
            MoodBucket::Challenging => "challenging",
            MoodBucket::Tough => "tough",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodBucket::Excellent => "Excellent",
            MoodBucket::Good => "Good",
            MoodBucket::Okay => "Okay",
            MoodBucket::Challenging => "Challenging",
            MoodBucket::Tough => "Tough",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MoodBucket::Excellent => "#00cc66",
            MoodBucket::Good => "#3e1919ff",
            MoodBucket::Okay => "#ccaa00",
            MoodBucket::Challenging => "#cc6600",
            MoodBucket::Tough => "#cc4444",
        }
    }
}

/// Lowercase and keep only `a-z`.
pub fn normalize_mood(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

pub fn mood_color(text: &str) -> &'static str {
    MoodBucket::from_text(text)
        .map(|bucket| bucket.color())
        .unwrap_or(DEFAULT_MOOD_COLOR)
}
