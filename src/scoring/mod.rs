//! Scoring module
//!
//! - Ride score engine: temperature comfort, rain and wind impact, severity penalty
//! - Condition descriptions for WMO weather codes
//! - Rating bands for presenting scores

pub mod conditions;
pub mod rating;
pub mod ride_score;

pub use conditions::{ConditionDescriber, UNKNOWN_CONDITIONS};
pub use rating::ScoreRating;
pub use ride_score::{RideScoreEngine, ScoreBreakdown};
