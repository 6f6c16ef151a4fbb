//! Prediction session: client, gate and published view state.
//!
//! A session is what a front end owns. It refuses overlapping submissions and
//! publishes every state change on a `watch` channel, so observers see
//! `Predicting` and then exactly one `Done` per accepted submission.
//!
//! An accepted request runs on its own task. Dropping the future returned by
//! [`PredictionSession::submit`] does not stop it: the gate stays held and the
//! outcome is still published when the request ends.

use std::path::Path;
use std::sync::Arc;

use skinscan_models::{ClassificationOutcome, ViewState};
use tokio::sync::watch;
use tracing::debug;

use crate::client::PredictionClient;
use crate::error::{ClientError, ClientResult};
use crate::gate::{RequestGate, RequestPermit};
use crate::payload::ImagePayload;

pub struct PredictionSession {
    client: PredictionClient,
    gate: RequestGate,
    state: Arc<watch::Sender<ViewState>>,
}

impl PredictionSession {
    /// Create a new session in the idle state.
    pub fn new(client: PredictionClient) -> Self {
        let (state, _) = watch::channel(ViewState::Idle);
        Self {
            client,
            gate: RequestGate::new(),
            state: Arc::new(state),
        }
    }

    /// Subscribe to view state changes.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Get a snapshot of the current view state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Check if a submission is in flight.
    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    pub fn client(&self) -> &PredictionClient {
        &self.client
    }

    /// Submit an already prepared payload.
    ///
    /// Fails with [`ClientError::Busy`] while another submission is running.
    pub async fn submit(&self, payload: ImagePayload) -> ClientResult<ClassificationOutcome> {
        let permit = self.gate.try_acquire()?;
        self.run(permit, payload).await
    }

    /// Read, convert and submit an image file.
    ///
    /// The gate is taken before the file is read; a file that cannot be
    /// converted leaves the view state untouched.
    pub async fn submit_path(&self, path: impl AsRef<Path>) -> ClientResult<ClassificationOutcome> {
        let permit = self.gate.try_acquire()?;
        let payload = ImagePayload::from_path(path, self.client.jpeg_quality()).await?;
        self.run(permit, payload).await
    }

    async fn run(
        &self,
        permit: RequestPermit,
        payload: ImagePayload,
    ) -> ClientResult<ClassificationOutcome> {
        let previous = self.state.send_replace(ViewState::Predicting);

        let client = self.client.clone();
        let state = Arc::clone(&self.state);

        let task = tokio::spawn(async move {
            // Held until the request ends, even if the caller went away
            let _permit = permit;

            match client.classify(payload).await {
                Ok(outcome) => {
                    debug!(status = %outcome.headline(), "Publishing outcome");
                    state.send_replace(ViewState::Done(outcome.clone()));
                    Ok(outcome)
                }
                Err(e) => {
                    state.send_replace(previous);
                    Err(e)
                }
            }
        });

        task.await.map_err(ClientError::task)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn session() -> PredictionSession {
        let config = ClientConfig::default().with_endpoint("http://127.0.0.1:9/api/predict");
        PredictionSession::new(PredictionClient::new(&config).unwrap())
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = session();
        assert_eq!(session.state(), ViewState::Idle);
        assert_eq!(session.state().status_text(), "Select an image");
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_unreadable_file_keeps_state() {
        let session = session();
        let rx = session.subscribe();

        let result = session.submit_path("/nonexistent/lesion.jpg").await;
        assert!(result.is_err());
        assert_eq!(*rx.borrow(), ViewState::Idle);
        assert!(!session.is_busy());
    }
}
