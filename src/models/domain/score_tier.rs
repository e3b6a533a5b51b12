use std::fmt;

use async_graphql::Enum;
use serde::{Deserialize, Serialize};

/// Qualitative label shown next to a percentage score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Enum)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Excellent,
    Great,
    Good,
    Fair,
    NeedsWork,
    NotTaken,
}

impl ScoreTier {
    /// Thresholds are checked top-down. Never yields `NotTaken`.
    pub fn classify(percent: u8) -> Self {
        match percent {
            90.. => ScoreTier::Excellent,
            80..=89 => ScoreTier::Great,
            70..=79 => ScoreTier::Good,
            60..=69 => ScoreTier::Fair,
            _ => ScoreTier::NeedsWork,
        }
    }

    pub fn for_best_score(best_score_percent: Option<u8>) -> Self {
        best_score_percent.map_or(ScoreTier::NotTaken, Self::classify)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent",
            ScoreTier::Great => "Great",
            ScoreTier::Good => "Good",
            ScoreTier::Fair => "Fair",
            ScoreTier::NeedsWork => "Needs work",
            ScoreTier::NotTaken => "Not taken",
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        assert_eq!(ScoreTier::classify(100), ScoreTier::Excellent);
        assert_eq!(ScoreTier::classify(90), ScoreTier::Excellent);
        assert_eq!(ScoreTier::classify(89), ScoreTier::Great);
        assert_eq!(ScoreTier::classify(80), ScoreTier::Great);
        assert_eq!(ScoreTier::classify(79), ScoreTier::Good);
        assert_eq!(ScoreTier::classify(70), ScoreTier::Good);
        assert_eq!(ScoreTier::classify(69), ScoreTier::Fair);
        assert_eq!(ScoreTier::classify(60), ScoreTier::Fair);
        assert_eq!(ScoreTier::classify(59), ScoreTier::NeedsWork);
        assert_eq!(ScoreTier::classify(0), ScoreTier::NeedsWork);
    }

    #[test]
    fn classify_never_returns_not_taken() {
        assert!((0..=100u8).all(|p| ScoreTier::classify(p) != ScoreTier::NotTaken));
    }

    #[test]
    fn absent_best_score_is_not_taken() {
        assert_eq!(ScoreTier::for_best_score(None), ScoreTier::NotTaken);
        assert_eq!(ScoreTier::for_best_score(Some(0)), ScoreTier::NeedsWork);
        assert_eq!(ScoreTier::for_best_score(Some(95)), ScoreTier::Excellent);
    }

    #[test]
    fn labels_match_display() {
        assert_eq!(ScoreTier::NeedsWork.to_string(), "Needs work");
        assert_eq!(ScoreTier::NotTaken.label(), "Not taken");
    }
}
