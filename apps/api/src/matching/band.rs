use serde::{Deserialize, Serialize};

/// Coarse label for a 0–100 match score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    High,
    Medium,
    Low,
}

impl MatchBand {
    pub const HIGH_THRESHOLD: u8 = 80;
    pub const MEDIUM_THRESHOLD: u8 = 60;

    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= Self::HIGH_THRESHOLD => MatchBand::High,
            s if s >= Self::MEDIUM_THRESHOLD => MatchBand::Medium,
            _ => MatchBand::Low,
        }
    }
}
