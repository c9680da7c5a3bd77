//! Property-Based Tests for the Scoring Core
//!
//! Tests the following invariants:
//! - Every confidence value maps to exactly one rating, never below one star
//! - Band membership follows the configured cut points
//! - Reward lookup is idempotent and echoes the rating
//! - Mastery requires a full window of qualifying recent ratings
//! - Progress snapshot: to_json -> from_json preserves data

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use taikong_algo::{
    check_mastery, compute_rewards, compute_star_rating, score_attempt, AppConfig,
    ConfidenceThresholds, LearningAttempt, MasteryPolicy, RewardTable, StarRating, UserProgress,
};

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_star_rating() -> impl Strategy<Value = StarRating> {
    prop_oneof![
        Just(StarRating::One),
        Just(StarRating::Two),
        Just(StarRating::Three),
    ]
}

fn arb_thresholds() -> impl Strategy<Value = ConfidenceThresholds> {
    (0u64..=1000u64, 0u64..=1000u64, 0u64..=1000u64).prop_map(|(a, b, c)| {
        let mut cuts = [a, b, c];
        cuts.sort_unstable();
        ConfidenceThresholds {
            one_star: cuts[0] as f64 / 10.0,
            two_star: cuts[1] as f64 / 10.0,
            three_star: cuts[2] as f64 / 10.0,
        }
    })
}

fn make_attempt(confidence: f64, rating: StarRating, millis: i64) -> LearningAttempt {
    LearningAttempt {
        confidence,
        rating,
        recognized_text: "cat".to_string(),
        target_text: "cat".to_string(),
        recording_duration_ms: 1500,
        used_hint: false,
        timestamp: Utc.timestamp_millis_opt(millis).unwrap(),
    }
}

fn arb_attempt() -> impl Strategy<Value = LearningAttempt> {
    (
        0.0f64..100.0,              // confidence
        arb_star_rating(),          // rating (overwritten by scoring below)
        0i64..=4_102_444_800_000,   // timestamp millis, up to year 2100
    )
        .prop_map(|(confidence, rating, millis)| make_attempt(confidence, rating, millis))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_rating_bands(thresholds in arb_thresholds(), confidence in -50.0f64..150.0) {
        let rating = compute_star_rating(confidence, &thresholds);
        if confidence >= thresholds.three_star {
            prop_assert_eq!(rating, StarRating::Three);
        } else if confidence >= thresholds.two_star {
            prop_assert_eq!(rating, StarRating::Two);
        } else {
            prop_assert_eq!(rating, StarRating::One);
        }
    }

    #[test]
    fn prop_rating_never_below_one_star(confidence in proptest::num::f64::ANY) {
        // total over all input, NaN and infinities included
        let rating = compute_star_rating(confidence, &ConfidenceThresholds::default());
        prop_assert!(rating >= StarRating::One);
    }

    #[test]
    fn prop_rating_monotonic(
        thresholds in arb_thresholds(),
        a in 0.0f64..100.0,
        b in 0.0f64..100.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            compute_star_rating(lo, &thresholds) <= compute_star_rating(hi, &thresholds)
        );
    }

    #[test]
    fn prop_rewards_idempotent_and_echo(rating in arb_star_rating()) {
        let table = RewardTable::default();
        let first = compute_rewards(rating, &table);
        let second = compute_rewards(rating, &table);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.stars, rating);
    }

    #[test]
    fn prop_short_history_never_mastered(
        ratings in proptest::collection::vec(arb_star_rating(), 0..3),
    ) {
        prop_assert!(!check_mastery(&ratings, &MasteryPolicy::default()));
    }

    #[test]
    fn prop_mastery_window(
        ratings in proptest::collection::vec(arb_star_rating(), 3..20),
    ) {
        let policy = MasteryPolicy::default();
        let expected = ratings[..3].iter().all(|r| *r == StarRating::Three);
        prop_assert_eq!(check_mastery(&ratings, &policy), expected);
    }

    #[test]
    fn prop_one_weak_attempt_breaks_mastery(index in 0usize..3) {
        let policy = MasteryPolicy::default();
        let mut ratings = vec![StarRating::Three; 3];
        ratings[index] = StarRating::Two;
        prop_assert!(!check_mastery(&ratings, &policy));
    }

    #[test]
    fn prop_progress_snapshot_roundtrip(
        attempts in proptest::collection::vec(arb_attempt(), 1..20),
    ) {
        let config = AppConfig::production();
        let mut progress = UserProgress::new("learner", Utc.timestamp_millis_opt(0).unwrap());

        for mut attempt in attempts {
            let score = score_attempt(attempt.confidence, &config);
            attempt.rating = score.stars;
            progress.apply("item", attempt, &score, &config);
        }

        let json = progress.to_json().unwrap();
        let restored = UserProgress::from_json(&json).unwrap();
        prop_assert_eq!(restored, progress);
    }

    #[test]
    fn prop_every_attempt_grows_totals(
        confidences in proptest::collection::vec(0.0f64..100.0, 1..30),
    ) {
        let config = AppConfig::production();
        let mut progress = UserProgress::new("learner", Utc.timestamp_millis_opt(0).unwrap());

        for (i, confidence) in confidences.iter().enumerate() {
            let score = score_attempt(*confidence, &config);
            let attempt = make_attempt(*confidence, score.stars, i as i64 * 1000);
            progress.apply("item", attempt, &score, &config);
        }

        let n = confidences.len() as u32;
        // one to three stars per attempt, fuel and points track the table
        prop_assert!(progress.total_stars >= n);
        prop_assert!(progress.total_stars <= 3 * n);
        prop_assert_eq!(progress.total_fuel, progress.total_stars);
        prop_assert_eq!(progress.records["item"].attempt_count, n);
    }
}
