//! Single-flight request gate.

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::error::{ClientError, ClientResult};

/// Allows at most one prediction request at a time.
///
/// Owned by the calling component; clones share the same permit.
#[derive(Debug, Clone)]
pub struct RequestGate {
    semaphore: Arc<Semaphore>,
}

/// Proof that the holder may issue a request. Frees the gate on drop.
#[derive(Debug)]
pub struct RequestPermit {
    _permit: OwnedSemaphorePermit,
}

impl Default for RequestGate {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestGate {
    pub fn new() -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(1)),
        }
    }

    /// Take the gate without waiting. Fails with [`ClientError::Busy`] if held.
    pub fn try_acquire(&self) -> ClientResult<RequestPermit> {
        Arc::clone(&self.semaphore)
            .try_acquire_owned()
            .map(|permit| RequestPermit { _permit: permit })
            .map_err(|_| ClientError::Busy)
    }

    /// Check if a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.semaphore.available_permits() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_permit() {
        let gate = RequestGate::new();
        assert!(!gate.is_busy());

        let permit = gate.try_acquire().unwrap();
        assert!(gate.is_busy());
        assert!(matches!(gate.try_acquire(), Err(ClientError::Busy)));

        // Clones share state
        assert!(gate.clone().try_acquire().is_err());

        drop(permit);
        assert!(!gate.is_busy());
        assert!(gate.try_acquire().is_ok());
    }
}
