//! Presentation state of a prediction session.

use crate::outcome::{ClassificationOutcome, Feedback};

/// Prompt shown before any photo has been submitted.
pub const IDLE_TEXT: &str = "Select an image";

/// Text shown while a request is in flight.
pub const PREDICTING_TEXT: &str = "Predicting...";

/// What a front end should currently display.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A request is in flight
    Predicting,
    /// The last request finished
    Done(ClassificationOutcome),
}

impl ViewState {
    /// Status line for this state.
    pub fn status_text(&self) -> String {
        match self {
            ViewState::Idle => IDLE_TEXT.to_string(),
            ViewState::Predicting => PREDICTING_TEXT.to_string(),
            ViewState::Done(outcome) => outcome.headline(),
        }
    }

    /// Check if a request is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, ViewState::Predicting)
    }

    pub fn feedback(&self) -> Feedback {
        match self {
            ViewState::Done(outcome) => outcome.feedback(),
            _ => Feedback::None,
        }
    }

    pub fn outcome(&self) -> Option<&ClassificationOutcome> {
        match self {
            ViewState::Done(outcome) => Some(outcome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(ViewState::default().status_text(), "Select an image");
        assert_eq!(ViewState::Predicting.status_text(), "Predicting...");
        assert_eq!(
            ViewState::Done(ClassificationOutcome::Informational("retake".into())).status_text(),
            "retake"
        );
    }

    #[test]
    fn test_busy_and_feedback() {
        assert!(ViewState::Predicting.is_busy());
        assert!(!ViewState::Idle.is_busy());
        assert_eq!(ViewState::Predicting.feedback(), Feedback::None);

        let done = ViewState::Done(ClassificationOutcome::Healthy);
        assert!(!done.is_busy());
        assert_eq!(done.feedback(), Feedback::Celebrate);
        assert_eq!(done.outcome(), Some(&ClassificationOutcome::Healthy));
    }
}
