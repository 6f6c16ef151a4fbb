//! Classification outcomes and failure kinds.
//!
//! A [`ClassificationOutcome`] is the single value a front end receives for
//! each submitted photo. Failures carry their kind so callers can tell a
//! transport problem apart from a verdict the server reported itself.

use thiserror::Error;

/// Headline shown when the probability is at or below the threshold.
pub const HEALTHY_HEADLINE: &str = "You have no cancer! Your skin is healthy!";

/// Headline shown when the probability exceeds the threshold.
pub const MALIGNANT_HEADLINE: &str = "High probability of malignancy. See a doctor.";

/// Why a single prediction request did not yield a verdict.
///
/// The `Display` text of each variant is the reason string surfaced to users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionFailure {
    /// No response reached the client.
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered with a status code outside 200..=299.
    #[error("invalid server response ({0})")]
    HttpStatus(u16),

    /// The body was not valid JSON or did not match the reply shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// The server replied with `status == "error"`; holds its message verbatim.
    #[error("{0}")]
    ServerReported(String),

    /// The server replied with a status string this client does not know.
    #[error("unexpected status: {0}")]
    UnexpectedStatus(String),
}

impl PredictionFailure {
    /// Get the failure classification.
    pub fn kind(&self) -> FailureKind {
        match self {
            PredictionFailure::Transport(_) => FailureKind::Transport,
            PredictionFailure::HttpStatus(_) => FailureKind::HttpStatus,
            PredictionFailure::Decode(_) => FailureKind::Decode,
            PredictionFailure::ServerReported(_) => FailureKind::ServerReported,
            PredictionFailure::UnexpectedStatus(_) => FailureKind::UnexpectedStatus,
        }
    }
}

/// Failure classification, one per [`PredictionFailure`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Transport,
    HttpStatus,
    Decode,
    ServerReported,
    UnexpectedStatus,
}

impl FailureKind {
    /// Get string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::HttpStatus => "http_status",
            FailureKind::Decode => "decode",
            FailureKind::ServerReported => "server_reported",
            FailureKind::UnexpectedStatus => "unexpected_status",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Visual feedback a front end should play alongside the headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Feedback {
    /// Celebratory effect (healthy verdict).
    Celebrate,
    /// Somber effect (likely malignant, or the server reported an error).
    Somber,
    /// No effect.
    #[default]
    None,
}

/// Result of classifying one photo.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationOutcome {
    /// Probability at or below the malignancy threshold.
    Healthy,
    /// Probability strictly above the malignancy threshold.
    LikelyMalignant,
    /// Successful reply without a probability; holds the server message.
    Informational(String),
    /// The request failed or the server reported an error.
    Failed(PredictionFailure),
}

impl ClassificationOutcome {
    /// Check if this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, ClassificationOutcome::Failed(_))
    }

    /// Get the failure, if any.
    pub fn failure(&self) -> Option<&PredictionFailure> {
        match self {
            ClassificationOutcome::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// User-facing text for this outcome.
    pub fn headline(&self) -> String {
        match self {
            ClassificationOutcome::Healthy => HEALTHY_HEADLINE.to_string(),
            ClassificationOutcome::LikelyMalignant => MALIGNANT_HEADLINE.to_string(),
            ClassificationOutcome::Informational(message) => message.clone(),
            ClassificationOutcome::Failed(failure) => format!("Error: {failure}"),
        }
    }

    /// Feedback effect matching this outcome.
    pub fn feedback(&self) -> Feedback {
        match self {
            ClassificationOutcome::Healthy => Feedback::Celebrate,
            ClassificationOutcome::LikelyMalignant => Feedback::Somber,
            ClassificationOutcome::Failed(PredictionFailure::ServerReported(_)) => Feedback::Somber,
            ClassificationOutcome::Informational(_) | ClassificationOutcome::Failed(_) => {
                Feedback::None
            }
        }
    }
}

impl From<PredictionFailure> for ClassificationOutcome {
    fn from(failure: PredictionFailure) -> Self {
        ClassificationOutcome::Failed(failure)
    }
}
