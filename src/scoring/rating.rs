//! Coarse rating bands for ride scores

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall rating for a ride score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScoreRating {
    /// Score < 40
    Poor,
    /// Score >= 40
    Fair,
    /// Score >= 55
    Good,
    /// Score >= 70
    Great,
    /// Score >= 85
    Perfect,
}

impl ScoreRating {
    /// Rating band for a 0-100 score
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => ScoreRating::Perfect,
            70..=84 => ScoreRating::Great,
            55..=69 => ScoreRating::Good,
            40..=54 => ScoreRating::Fair,
            _ => ScoreRating::Poor,
        }
    }
}

impl From<u8> for ScoreRating {
    fn from(score: u8) -> Self {
        Self::from_score(score)
    }
}

impl fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreRating::Perfect => write!(f, "Perfect"),
            ScoreRating::Great => write!(f, "Great"),
            ScoreRating::Good => write!(f, "Good"),
            ScoreRating::Fair => write!(f, "Fair"),
            ScoreRating::Poor => write!(f, "Poor"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100, ScoreRating::Perfect)]
    #[case(85, ScoreRating::Perfect)]
    #[case(84, ScoreRating::Great)]
    #[case(70, ScoreRating::Great)]
    #[case(69, ScoreRating::Good)]
    #[case(55, ScoreRating::Good)]
    #[case(54, ScoreRating::Fair)]
    #[case(40, ScoreRating::Fair)]
    #[case(39, ScoreRating::Poor)]
    #[case(0, ScoreRating::Poor)]
    fn test_rating_bands(#[case] score: u8, #[case] expected: ScoreRating) {
        assert_eq!(ScoreRating::from_score(score), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(ScoreRating::Great.to_string(), "Great");
        assert_eq!(ScoreRating::from(12).to_string(), "Poor");
    }

    #[test]
    fn test_ratings_are_ordered() {
        assert!(ScoreRating::Perfect > ScoreRating::Great);
        assert!(ScoreRating::Fair > ScoreRating::Poor);
    }
}
