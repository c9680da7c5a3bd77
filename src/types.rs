//! Shared types and constants used across the scoring modules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Upper bound of the recognition confidence scale
pub const MAX_CONFIDENCE: f64 = 100.0;

/// Consecutive top-rated attempts required for mastery
pub const DEFAULT_MASTERY_COUNT: usize = 3;

/// Attempts retained per learning record
pub const MAX_ATTEMPT_HISTORY: usize = 99;

// ==================== Star Rating ====================

/// Star rating awarded for one spoken attempt.
///
/// Every attempt earns at least one star; a zero-star outcome does not
/// exist in this app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum StarRating {
    One = 1,
    Two = 2,
    Three = 3,
}

impl StarRating {
    /// Highest awardable rating
    pub const MAX: StarRating = StarRating::Three;

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(StarRating::One),
            2 => Some(StarRating::Two),
            3 => Some(StarRating::Three),
            _ => None,
        }
    }
}

impl TryFrom<u8> for StarRating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        StarRating::from_u8(value).ok_or_else(|| format!("invalid star rating: {value}"))
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.as_u8()
    }
}

// ==================== Attempt Types ====================

/// One completed spoken attempt at a vocabulary item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningAttempt {
    /// Recognition confidence (0-100)
    pub confidence: f64,
    /// Star rating awarded for this attempt
    pub rating: StarRating,
    /// Text the recognizer heard
    pub recognized_text: String,
    /// Text the learner was asked to say
    pub target_text: String,
    /// Recording duration in milliseconds
    pub recording_duration_ms: u64,
    /// Whether a hint was shown before the attempt
    pub used_hint: bool,
    /// When the attempt completed
    pub timestamp: DateTime<Utc>,
}

/// Rewards granted for one rated attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRewards {
    pub fuel: u32,
    pub points: u32,
    /// The rating the rewards were looked up for, echoed back
    pub stars: StarRating,
}

/// Scoring result handed to the presentation layer after one attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PronunciationScore {
    pub stars: StarRating,
    pub fuel: u32,
    pub points: u32,
    /// Recognition confidence (0-100)
    pub confidence: f64,
    /// Short feedback line for the learner
    pub feedback: String,
}

// ==================== Tests ====================
