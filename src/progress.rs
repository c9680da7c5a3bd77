//! Per-item learning records and whole-user progress aggregation.
//!
//! Nothing here persists anything. [`UserProgress`] is a plain value the
//! host application folds scored attempts into and hands to its own storage
//! layer; the JSON snapshot helpers are the exchange format for that
//! hand-off.

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{AppConfig, ConfidenceThresholds, MasteryPolicy};
use crate::scoring::check_mastery;
use crate::types::{LearningAttempt, PronunciationScore, StarRating, MAX_ATTEMPT_HISTORY};

/// Learning history for one vocabulary item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningRecord {
    pub item_id: String,
    /// Best rating ever achieved for this item
    pub best_rating: StarRating,
    /// Total attempts, including ones evicted from the retained history
    pub attempt_count: u32,
    /// Attempts whose confidence met the one-star cut point (the
    /// encouragement floor does not count here)
    pub success_count: u32,
    /// Running average confidence over all attempts
    pub average_confidence: f64,
    pub first_studied_at: DateTime<Utc>,
    pub last_studied_at: DateTime<Utc>,
    /// Cached result of the mastery check after the latest attempt
    pub is_mastered: bool,
    /// Most-recent-first, capped at [`MAX_ATTEMPT_HISTORY`]
    pub attempts: VecDeque<LearningAttempt>,
}

impl LearningRecord {
    pub fn new(item_id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            item_id: item_id.into(),
            best_rating: StarRating::One,
            attempt_count: 0,
            success_count: 0,
            average_confidence: 0.0,
            first_studied_at: created_at,
            last_studied_at: created_at,
            is_mastered: false,
            attempts: VecDeque::new(),
        }
    }

    /// Fold one attempt into the record: push it to the front of the
    /// history, maintain the cap, update the aggregates and recompute the
    /// mastery flag over the recent window.
    pub fn record_attempt(
        &mut self,
        attempt: LearningAttempt,
        thresholds: &ConfidenceThresholds,
        policy: &MasteryPolicy,
    ) {
        self.attempt_count += 1;
        if attempt.confidence >= thresholds.one_star {
            self.success_count += 1;
        }
        self.best_rating = self.best_rating.max(attempt.rating);
        // incremental mean over attempt_count, independent of the history cap
        self.average_confidence +=
            (attempt.confidence - self.average_confidence) / self.attempt_count as f64;
        self.last_studied_at = attempt.timestamp;

        self.attempts.push_front(attempt);
        self.attempts.truncate(MAX_ATTEMPT_HISTORY);

        let recent = self.recent_ratings(policy.required_count);
        self.is_mastered = check_mastery(&recent, policy);
    }

    /// Ratings of the most recent `count` attempts, newest first.
    pub fn recent_ratings(&self, count: usize) -> Vec<StarRating> {
        self.attempts.iter().take(count).map(|a| a.rating).collect()
    }
}

/// Whole-user progress across all vocabulary items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub user_id: String,
    pub total_stars: u32,
    pub total_fuel: u32,
    pub total_points: u32,
    pub records: HashMap<String, LearningRecord>,
    /// Consecutive calendar days with at least one attempt
    pub streak_days: u32,
    pub last_study_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProgress {
    pub fn new(user_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            total_stars: 0,
            total_fuel: 0,
            total_points: 0,
            records: HashMap::new(),
            streak_days: 0,
            last_study_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Fold one scored attempt into the aggregate: bump the reward totals,
    /// update the per-item record and the streak bookkeeping.
    pub fn apply(
        &mut self,
        item_id: &str,
        attempt: LearningAttempt,
        score: &PronunciationScore,
        config: &AppConfig,
    ) {
        self.total_stars += u32::from(score.stars.as_u8());
        self.total_fuel += score.fuel;
        self.total_points += score.points;
        self.updated_at = attempt.timestamp;
        self.touch_study_day(attempt.timestamp.date_naive());

        let created_at = attempt.timestamp;
        let record = self
            .records
            .entry(item_id.to_string())
            .or_insert_with(|| LearningRecord::new(item_id, created_at));
        let was_mastered = record.is_mastered;
        record.record_attempt(attempt, &config.recognition.thresholds, &config.mastery);

        debug!(
            item_id,
            attempts = record.attempt_count,
            total_stars = self.total_stars,
            "attempt recorded"
        );
        if record.is_mastered && !was_mastered {
            info!(item_id, attempts = record.attempt_count, "item mastered");
        }
    }

    /// Streak bookkeeping: studying on the same day is a no-op, on the next
    /// calendar day extends the streak, any gap resets it to 1.
    pub fn touch_study_day(&mut self, today: NaiveDate) {
        match self.last_study_date {
            Some(last) if last == today => {}
            Some(last) if last.succ_opt() == Some(today) => self.streak_days += 1,
            _ => self.streak_days = 1,
        }
        self.last_study_date = Some(today);
    }

    /// How many of the tracked items are currently mastered.
    pub fn mastered_count(&self) -> usize {
        self.records.values().filter(|r| r.is_mastered).count()
    }

    /// Snapshot for the external storage collaborator.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ==================== Tests ====================
