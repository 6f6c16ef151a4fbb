//! Client error types.
//!
//! These cover problems that stop a request from being issued at all.
//! Once a request is sent, every failure becomes a
//! [`ClassificationOutcome::Failed`](skinscan_models::ClassificationOutcome::Failed) instead.

use skinscan_models::InvalidThreshold;
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("A prediction is already in progress")]
    Busy,

    #[error("Could not convert image to JPEG: {0}")]
    Payload(#[from] image::ImageError),

    #[error("Could not read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Background task failed: {0}")]
    Task(String),
}

impl From<InvalidThreshold> for ClientError {
    fn from(e: InvalidThreshold) -> Self {
        ClientError::InvalidConfig(e.to_string())
    }
}

impl ClientError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn task(e: tokio::task::JoinError) -> Self {
        Self::Task(e.to_string())
    }

    /// Check if the caller may simply try again once the current request ends.
    pub fn is_busy(&self) -> bool {
        matches!(self, ClientError::Busy)
    }
}
