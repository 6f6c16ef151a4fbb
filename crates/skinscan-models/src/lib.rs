//! Shared data models for the SkinScan prediction client.
//!
//! This crate provides:
//! - The wire shape of the classification service's JSON reply
//! - Interpretation of a reply into a classification outcome
//! - Failure kinds and presentation hints consumed by front ends

pub mod outcome;
pub mod response;
pub mod view;

// Re-export common types
pub use outcome::{ClassificationOutcome, FailureKind, Feedback, PredictionFailure};
pub use response::{
    InvalidThreshold, MalignancyThreshold, PredictionResponse, ResponseStatus,
    DEFAULT_MALIGNANCY_THRESHOLD,
};
pub use view::ViewState;
