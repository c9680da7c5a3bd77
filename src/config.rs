//! Application configuration: named presets, environment selection,
//! load-time validation.
//!
//! Two presets exist. Production is the baseline; development lowers the
//! confidence thresholds for easier manual testing and speeds up the UI
//! timings, by shallow-merging a set of section overrides onto the
//! production values. Selection happens once at startup and the resulting
//! value is immutable afterwards.

use serde::{Deserialize, Serialize};

use crate::types::{StarRating, DEFAULT_MASTERY_COUNT};

/// Name of the process variable that selects the development preset
pub const ENV_VAR: &str = "TAIKONG_ENV";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("confidence thresholds must be ascending, got {one_star}/{two_star}/{three_star}")]
    NonMonotonicThresholds {
        one_star: f64,
        two_star: f64,
        three_star: f64,
    },
    #[error("recording bounds inverted: min {min_ms}ms > max {max_ms}ms")]
    InvertedRecordingBounds { min_ms: u64, max_ms: u64 },
}

/// Confidence cut points separating the star-rating bands.
///
/// Must be ascending (`one_star <= two_star <= three_star`). Checked when a
/// configuration is loaded, never in the rating hot path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceThresholds {
    pub one_star: f64,
    pub two_star: f64,
    pub three_star: f64,
}

impl ConfidenceThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.one_star <= self.two_star && self.two_star <= self.three_star {
            Ok(())
        } else {
            Err(ConfigError::NonMonotonicThresholds {
                one_star: self.one_star,
                two_star: self.two_star,
                three_star: self.three_star,
            })
        }
    }
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            one_star: 50.0,
            two_star: 70.0,
            three_star: 90.0,
        }
    }
}

/// Speech recognition settings, tuned for early-learner voices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig {
    /// BCP-47 language tag passed to the recognizer
    pub language: String,
    /// Shortest recording accepted (ms), guards against accidental taps
    pub min_recording_ms: u64,
    /// Longest recording accepted (ms)
    pub max_recording_ms: u64,
    pub thresholds: ConfidenceThresholds,
}

impl RecognitionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_recording_ms > self.max_recording_ms {
            return Err(ConfigError::InvertedRecordingBounds {
                min_ms: self.min_recording_ms,
                max_ms: self.max_recording_ms,
            });
        }
        self.thresholds.validate()
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            min_recording_ms: 500,
            max_recording_ms: 5000,
            thresholds: ConfidenceThresholds::default(),
        }
    }
}

/// Reward amount per star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerStar {
    pub one: u32,
    pub two: u32,
    pub three: u32,
}

impl PerStar {
    pub fn amount(&self, rating: StarRating) -> u32 {
        match rating {
            StarRating::One => self.one,
            StarRating::Two => self.two,
            StarRating::Three => self.three,
        }
    }
}

/// Reward lookup table. A table rather than a formula so fuel and points
/// can be tuned independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardTable {
    pub fuel_per_star: PerStar,
    pub points_per_star: PerStar,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            fuel_per_star: PerStar {
                one: 1,
                two: 2,
                three: 3,
            },
            points_per_star: PerStar {
                one: 1,
                two: 2,
                three: 3,
            },
        }
    }
}

/// UI timing knobs. Carried with the rest of the configuration because the
/// front-end reads them from the same object; the scoring functions never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    pub animation_duration_ms: u64,
    pub auto_play_interval_ms: u64,
    pub haptic_feedback: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: 300,
            auto_play_interval_ms: 2000,
            haptic_feedback: true,
        }
    }
}

/// Streak required before an item counts as mastered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryPolicy {
    /// Length of the most-recent window that must qualify
    pub required_count: usize,
    /// Rating every attempt in the window must equal
    pub required_rating: StarRating,
}

impl Default for MasteryPolicy {
    fn default() -> Self {
        Self {
            required_count: DEFAULT_MASTERY_COUNT,
            required_rating: StarRating::MAX,
        }
    }
}

/// Runtime environment indicator, read once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    /// Reads `TAIKONG_ENV`. Anything other than an explicit development
    /// marker selects production.
    pub fn from_env() -> Self {
        match std::env::var(ENV_VAR) {
            Ok(value) => match value.to_lowercase().as_str() {
                "development" | "dev" => Environment::Development,
                _ => Environment::Production,
            },
            Err(_) => Environment::Production,
        }
    }

    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

/// Section-level overrides merged onto the production baseline.
///
/// A section left as `None` keeps its production value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub recognition: Option<RecognitionConfig>,
    pub rewards: Option<RewardTable>,
    pub ui: Option<UiConfig>,
    pub mastery: Option<MasteryPolicy>,
}

impl ConfigOverrides {
    /// Development overrides: lower cut points so manual testing does not
    /// require perfect pronunciation, faster UI timings. Rewards and the
    /// mastery policy keep their production values.
    pub fn development() -> Self {
        Self {
            recognition: Some(RecognitionConfig {
                thresholds: ConfidenceThresholds {
                    one_star: 30.0,
                    two_star: 50.0,
                    three_star: 70.0,
                },
                ..RecognitionConfig::default()
            }),
            ui: Some(UiConfig {
                animation_duration_ms: 150,
                auto_play_interval_ms: 1000,
                ..UiConfig::default()
            }),
            ..Self::default()
        }
    }
}

/// Aggregate application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub recognition: RecognitionConfig,
    pub rewards: RewardTable,
    pub ui: UiConfig,
    pub mastery: MasteryPolicy,
}

impl AppConfig {
    /// Production baseline.
    pub fn production() -> Self {
        Self::default()
    }

    /// Development preset: production with [`ConfigOverrides::development`]
    /// merged on top.
    pub fn development() -> Self {
        Self::production().merge(ConfigOverrides::development())
    }

    /// Pure preset selection from the environment indicator.
    pub fn select(environment: Environment) -> Self {
        match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        }
    }

    /// Preset for the environment the process runs in.
    pub fn from_env() -> Self {
        Self::select(Environment::from_env())
    }

    /// Shallow per-section merge: overridden sections replace the current
    /// ones wholesale, everything else is kept.
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(recognition) = overrides.recognition {
            self.recognition = recognition;
        }
        if let Some(rewards) = overrides.rewards {
            self.rewards = rewards;
        }
        if let Some(ui) = overrides.ui {
            self.ui = ui;
        }
        if let Some(mastery) = overrides.mastery {
            self.mastery = mastery;
        }
        self
    }

    /// Load-time sanity check for caller-built configurations. The shipped
    /// presets always pass.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.recognition.validate()
    }
}

// ==================== Tests ====================
