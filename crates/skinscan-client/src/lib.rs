//! Client for the remote skin lesion classification service.
//!
//! This crate uploads a photo as a single-part multipart form, reads the
//! service's JSON verdict and turns it into a [`ClassificationOutcome`].
//! At most one request runs at a time per [`RequestGate`].

pub mod client;
pub mod config;
pub mod error;
pub mod gate;
pub mod payload;
pub mod session;

pub use client::PredictionClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use gate::{RequestGate, RequestPermit};
pub use payload::ImagePayload;
pub use session::PredictionSession;

pub use skinscan_models::{ClassificationOutcome, FailureKind, Feedback, PredictionFailure, ViewState};
