//! Plain-text rendering of outcomes.

use std::path::Path;

use skinscan_client::ClientError;
use skinscan_models::{ClassificationOutcome, Feedback};

pub fn heading(path: &Path) -> String {
    format!("==> {}", path.display())
}

/// Headline prefixed with the feedback marker, if any.
pub fn outcome_line(outcome: &ClassificationOutcome) -> String {
    let headline = outcome.headline();
    match outcome.feedback() {
        Feedback::Celebrate => format!("🎉 {headline}"),
        Feedback::Somber => format!("😢 {headline}"),
        Feedback::None => headline,
    }
}

/// Line for a photo that could not be submitted.
pub fn error_line(error: &ClientError) -> String {
    format!("Error: {error}")
}

#[cfg(test)]
mod tests {
    use skinscan_models::PredictionFailure;

    use super::*;

    #[test]
    fn test_outcome_lines() {
        assert_eq!(
            outcome_line(&ClassificationOutcome::Healthy),
            "🎉 You have no cancer! Your skin is healthy!"
        );
        assert_eq!(
            outcome_line(&ClassificationOutcome::LikelyMalignant),
            "😢 High probability of malignancy. See a doctor."
        );
        assert_eq!(
            outcome_line(&ClassificationOutcome::Failed(PredictionFailure::ServerReported(
                "no face region detected".into()
            ))),
            "😢 Error: no face region detected"
        );
        assert_eq!(
            outcome_line(&ClassificationOutcome::Failed(PredictionFailure::Transport(
                "connection refused".into()
            ))),
            "Error: network error: connection refused"
        );
    }

    #[test]
    fn test_error_line() {
        assert_eq!(error_line(&ClientError::Busy), "Error: A prediction is already in progress");
        assert_eq!(heading(Path::new("photos/mole.png")), "==> photos/mole.png");
    }
}
