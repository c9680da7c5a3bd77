//! Confidence source seam and the mocked recognizer.
//!
//! How a real recognition service delivers confidence (synchronously,
//! with partial results, with its own failure modes) is not pinned down by
//! any existing integration, so the trait keeps that surface as narrow as
//! possible. The shipped implementation reproduces the mocked client-side
//! behavior: a uniform random confidence for any recording inside the
//! configured duration bounds.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::config::RecognitionConfig;
use crate::types::MAX_CONFIDENCE;

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("recording too short: {actual_ms}ms, minimum {min_ms}ms")]
    RecordingTooShort { actual_ms: u64, min_ms: u64 },
    #[error("recording too long: {actual_ms}ms, maximum {max_ms}ms")]
    RecordingTooLong { actual_ms: u64, max_ms: u64 },
}

/// Supplies a pronunciation confidence (0-100) for a finished recording.
pub trait ConfidenceSource {
    fn recognize(&mut self, target_text: &str, recording_ms: u64) -> Result<f64, RecognitionError>;
}

/// Mock recognizer: checks the recording against the configured duration
/// bounds, then draws a uniform confidence in [0, 100).
#[derive(Debug, Clone)]
pub struct MockRecognizer {
    config: RecognitionConfig,
    rng: ChaCha8Rng,
}

impl MockRecognizer {
    pub fn new(config: RecognitionConfig) -> Self {
        let seed = {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(42)
        };
        Self::with_seed(config, seed)
    }

    /// Deterministic instance for tests.
    pub fn with_seed(config: RecognitionConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl ConfidenceSource for MockRecognizer {
    fn recognize(&mut self, target_text: &str, recording_ms: u64) -> Result<f64, RecognitionError> {
        if recording_ms < self.config.min_recording_ms {
            return Err(RecognitionError::RecordingTooShort {
                actual_ms: recording_ms,
                min_ms: self.config.min_recording_ms,
            });
        }
        if recording_ms > self.config.max_recording_ms {
            return Err(RecognitionError::RecordingTooLong {
                actual_ms: recording_ms,
                max_ms: self.config.max_recording_ms,
            });
        }

        let confidence = self.rng.gen_range(0.0..MAX_CONFIDENCE);
        debug!(word = target_text, recording_ms, confidence, "mock recognition result");
        Ok(confidence)
    }
}

// ==================== Tests ====================
