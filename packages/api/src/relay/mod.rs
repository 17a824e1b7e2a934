//! # Message relay
//!
//! The relay is the third-party service that turns a form payload into an
//! email. [`SubmissionClient`] owns the credentials ([`RelayConfig`]) and
//! shapes a [`FormInput`] into the [`RelayPayload`] the relay expects; the
//! [`Relay`] implementation only moves bytes.
//!
//! One call to [`SubmissionClient::submit`] makes exactly one relay request.
//! There is no retry and no cancellation: a caller that has gone away simply
//! drops the future.

mod emailjs;
pub use emailjs::EmailJsRelay;

use content::RelayConfig;
use serde::Serialize;

use crate::validation::FormInput;

/// Why a message could not be sent.
///
/// The UI shows the same text for every variant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmissionError {
    #[error("relay unreachable: {0}")]
    Transport(String),

    #[error("relay rejected the message with status {0}")]
    Rejected(u16),
}

/// Template variables, named the way the email template refers to them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Request body for the relay.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RelayPayload {
    pub service_id: String,
    pub template_id: String,
    /// EmailJS calls the public key `user_id`.
    #[serde(rename = "user_id")]
    pub public_key: String,
    pub template_params: TemplateParams,
}

impl RelayPayload {
    pub fn new(config: &RelayConfig, input: &FormInput) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            template_params: TemplateParams {
                name: input.name.trim().to_string(),
                email: input.email.trim().to_string(),
                message: input.message.clone(),
            },
        }
    }
}

/// Delivers a payload to the relay.
pub trait Relay {
    fn send(
        &self,
        payload: &RelayPayload,
    ) -> impl std::future::Future<Output = Result<(), SubmissionError>>;
}

/// Sends validated contact form input through a [`Relay`].
#[derive(Clone, Debug)]
pub struct SubmissionClient<R: Relay> {
    config: RelayConfig,
    relay: R,
}

impl SubmissionClient<EmailJsRelay> {
    /// Client talking to the endpoint named in `config`.
    pub fn emailjs(config: RelayConfig) -> Self {
        let relay = EmailJsRelay::new(config.endpoint.clone());
        Self::new(config, relay)
    }
}

impl<R: Relay> SubmissionClient<R> {
    pub fn new(config: RelayConfig, relay: R) -> Self {
        Self { config, relay }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    pub fn relay(&self) -> &R {
        &self.relay
    }

    /// Send `input` once. The input is assumed to be valid already.
    pub async fn submit(&self, input: &FormInput) -> Result<(), SubmissionError> {
        let payload = RelayPayload::new(&self.config, input);
        match self.relay.send(&payload).await {
            Ok(()) => {
                tracing::info!("Contact message relayed");
                Ok(())
            }
            Err(e) => {
                tracing::error!("Contact message failed: {e}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Relay that records payloads and answers with a scripted result.
    #[derive(Clone, Debug)]
    pub struct FakeRelay {
        pub sent: Arc<Mutex<Vec<RelayPayload>>>,
        result: Result<(), SubmissionError>,
    }

    impl FakeRelay {
        pub fn ok() -> Self {
            Self {
                sent: Arc::default(),
                result: Ok(()),
            }
        }

        pub fn failing(err: SubmissionError) -> Self {
            Self {
                sent: Arc::default(),
                result: Err(err),
            }
        }

        pub fn calls(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    impl Relay for FakeRelay {
        async fn send(&self, payload: &RelayPayload) -> Result<(), SubmissionError> {
            self.sent.lock().unwrap().push(payload.clone());
            self.result.clone()
        }
    }
}
