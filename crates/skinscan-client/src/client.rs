//! Prediction service HTTP client.

use reqwest::{Client, Url};
use skinscan_models::{ClassificationOutcome, MalignancyThreshold, PredictionFailure, PredictionResponse};
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::gate::RequestGate;
use crate::payload::ImagePayload;

/// Client for the remote classification service.
///
/// Requests are sent once: no retries and no timeout beyond reqwest's defaults.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: Client,
    endpoint: Url,
    threshold: MalignancyThreshold,
    jpeg_quality: u8,
}

impl PredictionClient {
    /// Create a new prediction client.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let http = Client::builder().build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint()?,
            threshold: config.threshold()?,
            jpeg_quality: config.jpeg_quality,
        })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(&ClientConfig::from_env())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn threshold(&self) -> MalignancyThreshold {
        self.threshold
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }

    /// Classify a photo.
    ///
    /// An `Err` means nothing was sent. Once the request is sent, every result
    /// (including transport and decode failures) comes back as an outcome.
    pub async fn classify(&self, payload: ImagePayload) -> ClientResult<ClassificationOutcome> {
        let request_id = Uuid::new_v4();
        let span = info_span!("predict", request_id = %request_id);

        self.send_and_interpret(payload).instrument(span).await
    }

    async fn send_and_interpret(&self, payload: ImagePayload) -> ClientResult<ClassificationOutcome> {
        let size = payload.len();
        let form = payload.into_form()?;

        debug!(endpoint = %self.endpoint, size, "Sending prediction request");

        let outcome = match self.exchange(form).await {
            Ok(response) => response.interpret(self.threshold),
            Err(failure) => ClassificationOutcome::Failed(failure),
        };

        match outcome.failure() {
            Some(failure) => warn!(kind = %failure.kind(), "Prediction failed: {}", failure),
            None => info!(outcome = ?outcome, "Prediction complete"),
        }

        Ok(outcome)
    }

    /// Classify a photo if `gate` is free, holding it until the request ends.
    pub async fn classify_gated(
        &self,
        gate: &RequestGate,
        payload: ImagePayload,
    ) -> ClientResult<ClassificationOutcome> {
        let _permit = gate.try_acquire()?;
        self.classify(payload).await
    }

    /// POST the form and decode the reply.
    async fn exchange(
        &self,
        form: reqwest::multipart::Form,
    ) -> Result<PredictionResponse, PredictionFailure> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| PredictionFailure::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionFailure::HttpStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| PredictionFailure::Transport(e.to_string()))?;

        PredictionResponse::from_slice(&body)
    }
}
