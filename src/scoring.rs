//! Star rating, rewards and mastery evaluation.
//!
//! Everything here is a pure, total function: no I/O, no shared state, no
//! error paths. Configuration arrives through explicit arguments, so the
//! functions can be called from any context, concurrently included.

use tracing::debug;

use crate::config::{AppConfig, ConfidenceThresholds, MasteryPolicy, RewardTable};
use crate::types::{AttemptRewards, PronunciationScore, StarRating};

/// Map a recognition confidence onto a star rating.
///
/// Compares against the cut points from highest to lowest. Confidence below
/// the one-star cut point still earns one star: every attempt is rewarded
/// and a zero-star outcome does not exist. Out-of-range input goes through
/// the same comparisons rather than being rejected.
pub fn compute_star_rating(confidence: f64, thresholds: &ConfidenceThresholds) -> StarRating {
    if confidence >= thresholds.three_star {
        StarRating::Three
    } else if confidence >= thresholds.two_star {
        StarRating::Two
    } else {
        // encouragement floor below the one-star cut point
        StarRating::One
    }
}

/// Look up the rewards for a rating.
///
/// Pure table lookup; the rating is echoed back so the result can be handed
/// to the UI as one value. The match is exhaustive over [`StarRating`], so a
/// rating without a table entry cannot occur.
pub fn compute_rewards(rating: StarRating, table: &RewardTable) -> AttemptRewards {
    AttemptRewards {
        fuel: table.fuel_per_star.amount(rating),
        points: table.points_per_star.amount(rating),
        stars: rating,
    }
}

/// Whether the most recent attempts form a qualifying mastery streak.
///
/// `recent` is ordered most-recent-first. Histories shorter than the
/// policy's streak length are never mastered. One non-qualifying rating
/// anywhere in the window breaks the streak; older history is not searched.
pub fn check_mastery(recent: &[StarRating], policy: &MasteryPolicy) -> bool {
    if recent.len() < policy.required_count {
        return false;
    }
    recent[..policy.required_count]
        .iter()
        .all(|rating| *rating == policy.required_rating)
}

fn feedback_for(rating: StarRating) -> &'static str {
    match rating {
        StarRating::Three => "Perfect! You sound like a real astronaut!",
        StarRating::Two => "Great job! Almost perfect!",
        StarRating::One => "Good try! Let's practice again!",
    }
}

/// Score one completed attempt end to end: rate the confidence, look up the
/// rewards and attach the feedback line for the score card.
pub fn score_attempt(confidence: f64, config: &AppConfig) -> PronunciationScore {
    let rating = compute_star_rating(confidence, &config.recognition.thresholds);
    let rewards = compute_rewards(rating, &config.rewards);
    debug!(
        confidence,
        stars = rating.as_u8(),
        fuel = rewards.fuel,
        points = rewards.points,
        "attempt scored"
    );
    PronunciationScore {
        stars: rating,
        fuel: rewards.fuel,
        points: rewards.points,
        confidence,
        feedback: feedback_for(rating).to_string(),
    }
}

// ==================== Tests ====================
