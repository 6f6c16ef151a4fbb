//! Classification service reply and its interpretation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::outcome::{ClassificationOutcome, PredictionFailure};

/// Probability above which a lesion is reported as likely malignant.
pub const DEFAULT_MALIGNANCY_THRESHOLD: f64 = 0.3;

/// JSON reply from the classification service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// `"success"`, `"error"`, or anything else (treated as an error)
    pub status: String,
    /// Human-readable text
    pub message: String,
    /// Malignancy probability; missing and `null` both mean absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
}

/// Parsed form of [`PredictionResponse::status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseStatus {
    Success,
    Error,
    Other(String),
}

impl From<&str> for ResponseStatus {
    fn from(status: &str) -> Self {
        match status {
            "success" => ResponseStatus::Success,
            "error" => ResponseStatus::Error,
            other => ResponseStatus::Other(other.to_string()),
        }
    }
}

impl PredictionResponse {
    /// Decode a reply body.
    pub fn from_slice(body: &[u8]) -> Result<Self, PredictionFailure> {
        serde_json::from_slice(body).map_err(|e| PredictionFailure::Decode(e.to_string()))
    }

    /// Get the parsed status.
    pub fn status(&self) -> ResponseStatus {
        ResponseStatus::from(self.status.as_str())
    }

    /// Turn the reply into an outcome.
    ///
    /// On success the probability wins when present; otherwise the message is
    /// passed through as informational text.
    pub fn interpret(self, threshold: MalignancyThreshold) -> ClassificationOutcome {
        match self.status() {
            ResponseStatus::Success => match self.probability {
                Some(probability) if threshold.is_exceeded_by(probability) => {
                    ClassificationOutcome::LikelyMalignant
                }
                Some(_) => ClassificationOutcome::Healthy,
                None => ClassificationOutcome::Informational(self.message),
            },
            ResponseStatus::Error => {
                ClassificationOutcome::Failed(PredictionFailure::ServerReported(self.message))
            }
            ResponseStatus::Other(status) => {
                ClassificationOutcome::Failed(PredictionFailure::UnexpectedStatus(status))
            }
        }
    }
}

/// Threshold must be a finite number in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("malignancy threshold must be within [0, 1], got {0}")]
pub struct InvalidThreshold(pub f64);

/// Validated malignancy threshold.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MalignancyThreshold(f64);

impl MalignancyThreshold {
    /// Create a threshold, rejecting values outside [0, 1].
    pub fn new(value: f64) -> Result<Self, InvalidThreshold> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidThreshold(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Strict comparison: a probability equal to the threshold is not malignant.
    pub fn is_exceeded_by(&self, probability: f64) -> bool {
        probability > self.0
    }
}

impl Default for MalignancyThreshold {
    fn default() -> Self {
        Self(DEFAULT_MALIGNANCY_THRESHOLD)
    }
}
