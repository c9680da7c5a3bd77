//! # taikong-algo - Scoring core for the Taikong vocabulary app
//!
//! Pure Rust implementation of the scoring and progress logic behind the
//! space-themed early-learner English app:
//!
//! - **Star rating** - confidence-to-stars mapping with the one-star floor
//! - **Rewards** - per-star fuel and points lookup
//! - **Mastery** - streak check over the most recent attempts
//! - **Progress** - per-item records, user totals, streak days
//! - **Unlocks** - star-gated content tier decisions
//!
//! ## Design goals
//!
//! - **Pure core** - every scoring operation is a total function of its
//!   arguments; no I/O, no global state, safe to call from any context
//! - **Config as a value** - production and development presets built once
//!   at startup and passed around immutably
//! - **Narrow external seams** - recognition and storage stay behind small
//!   surfaces ([`ConfidenceSource`], JSON snapshots)
//!
//! ## Modules
//!
//! - [`types`] - star ratings, attempts, score results, shared constants
//! - [`config`] - presets, environment selection, load-time validation
//! - [`scoring`] - rating, rewards and mastery evaluation
//! - [`progress`] - learning records and user progress aggregation
//! - [`unlocks`] - star-gated unlock tiers
//! - [`recognition`] - confidence source seam and the mock recognizer
//!
//! ## Usage
//!
//! ```rust
//! use taikong_algo::{score_attempt, AppConfig, StarRating};
//!
//! let config = AppConfig::production();
//! let score = score_attempt(95.0, &config);
//! assert_eq!(score.stars, StarRating::Three);
//! assert_eq!(score.fuel, 3);
//! ```

pub mod config;
pub mod progress;
pub mod recognition;
pub mod scoring;
pub mod types;
pub mod unlocks;

pub use config::{
    AppConfig, ConfidenceThresholds, ConfigError, ConfigOverrides, Environment, MasteryPolicy,
    PerStar, RecognitionConfig, RewardTable, UiConfig,
};
pub use progress::{LearningRecord, UserProgress};
pub use recognition::{ConfidenceSource, MockRecognizer, RecognitionError};
pub use scoring::{check_mastery, compute_rewards, compute_star_rating, score_attempt};
pub use types::{AttemptRewards, LearningAttempt, PronunciationScore, StarRating};
pub use unlocks::{
    is_unlocked, next_locked_tier, tiers_in_order, unlock_progress, unlocked_tiers, UnlockTier,
};
