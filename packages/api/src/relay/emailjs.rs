//! # EmailJS relay
//!
//! Posts the payload as JSON to the EmailJS REST endpoint
//! (`POST /api/v1.0/email/send`). EmailJS answers `200 OK` with a plain-text
//! body on success; anything else is a failure. The body is never inspected.

use reqwest::Client;

use super::{Relay, RelayPayload, SubmissionError};

/// Relay backed by the EmailJS REST API.
#[derive(Clone, Debug)]
pub struct EmailJsRelay {
    client: Client,
    endpoint: String,
}

impl EmailJsRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Relay for EmailJsRelay {
    async fn send(&self, payload: &RelayPayload) -> Result<(), SubmissionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Rejected(status.as_u16()));
        }
        Ok(())
    }
}
