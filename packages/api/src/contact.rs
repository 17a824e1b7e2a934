//! Page-level controller for the contact form.
//!
//! [`ContactForm`] is the single owner of the form input, the field errors and
//! the status line. The view drives it in three steps around the one await
//! point (the relay call):
//!
//! ```text
//! let input = form.begin_submit()?;          // validate, go Pending
//! let result = client.submit(&input).await;  // one relay request
//! let ticket = form.finish(result);          // Success / Failure
//! sleep(form.clear_after()).await;
//! form.expire(ticket);                       // back to Idle unless superseded
//! ```

use std::time::Duration;

use crate::relay::{Relay, SubmissionClient, SubmissionError};
use crate::status::{ClearTicket, StatusNotifier, SubmissionStatus};
use crate::validation::{validate, Field, FormInput, ValidationResult};

/// Why a submit did not start.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("a message is already being sent")]
    Busy,

    #[error("{} field(s) need attention", .0.len())]
    Invalid(ValidationResult),
}

/// State of the contact form for one page session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    input: FormInput,
    errors: ValidationResult,
    notifier: StatusNotifier,
    /// Set by the first submit; from then on every keystroke re-validates.
    attempted: bool,
}

impl ContactForm {
    /// Form whose status line clears after `clear_after`.
    pub fn new(clear_after: Duration) -> Self {
        Self {
            input: FormInput::default(),
            errors: ValidationResult::default(),
            notifier: StatusNotifier::new(clear_after),
            attempted: false,
        }
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        self.notifier.status()
    }

    pub fn is_pending(&self) -> bool {
        self.status().is_pending()
    }

    pub fn clear_after(&self) -> Duration {
        self.notifier.clear_after()
    }

    /// Record a keystroke.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.input.set(field, value);
        if self.attempted {
            self.errors = validate(&self.input);
        }
    }

    /// Validate and, if the input is clean, mark the form `Pending`.
    ///
    /// Returns the input to send. Field errors are recomputed on every call.
    pub fn begin_submit(&mut self) -> Result<FormInput, SubmitRejected> {
        if self.is_pending() {
            return Err(SubmitRejected::Busy);
        }
        self.attempted = true;
        self.errors = validate(&self.input);
        if !self.errors.is_valid() {
            return Err(SubmitRejected::Invalid(self.errors.clone()));
        }
        self.notifier.set_pending();
        Ok(self.input.clone())
    }

    /// Record the relay outcome.
    ///
    /// Success empties the form; failure keeps what the visitor typed so they
    /// can resubmit.
    pub fn finish(&mut self, result: Result<(), SubmissionError>) -> ClearTicket {
        match result {
            Ok(()) => {
                self.input = FormInput::default();
                self.attempted = false;
                self.notifier.set(SubmissionStatus::success())
            }
            Err(_) => self.notifier.set(SubmissionStatus::failure()),
        }
    }

    /// Clear the status line if `ticket` is still current.
    pub fn expire(&mut self, ticket: ClearTicket) -> bool {
        self.notifier.clear(ticket)
    }

    /// Run a whole submission against `client` without the timed clear.
    pub async fn submit<R: Relay>(
        &mut self,
        client: &SubmissionClient<R>,
    ) -> Result<ClearTicket, SubmitRejected> {
        let input = self.begin_submit()?;
        let result = client.submit(&input).await;
        Ok(self.finish(result))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use content::RelayConfig;

    use super::*;
    use crate::relay::testing::FakeRelay;
    use crate::status::{FAILURE_MESSAGE, SUCCESS_MESSAGE};

    const DELAY: Duration = Duration::from_millis(5000);

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new(DELAY);
        form.set_field(Field::Name, "Ada".to_string());
        form.set_field(Field::Email, "ada@example.com".to_string());
        form.set_field(Field::Message, "Hello".to_string());
        form
    }

    fn client(relay: FakeRelay) -> SubmissionClient<FakeRelay> {
        SubmissionClient::new(RelayConfig::new("svc", "tpl", "key"), relay)
    }

    /// Schedule the clear the way the view does: sleep, then redeem the ticket.
    ///
    /// Yields once so the timer is registered at the current instant.
    async fn schedule_clear(
        form: &Arc<Mutex<ContactForm>>,
        ticket: ClearTicket,
        clears: &Arc<Mutex<usize>>,
    ) -> tokio::task::JoinHandle<()> {
        let form = form.clone();
        let clears = clears.clone();
        let delay = form.lock().unwrap().clear_after();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if form.lock().unwrap().expire(ticket) {
                *clears.lock().unwrap() += 1;
            }
        });
        tokio::task::yield_now().await;
        handle
    }

    #[test]
    fn test_invalid_input_never_reaches_pending() {
        let mut form = ContactForm::new(DELAY);
        form.set_field(Field::Email, "not-an-email".to_string());

        let err = form.begin_submit().unwrap_err();
        let SubmitRejected::Invalid(errors) = err else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.len(), 3);
        assert_eq!(form.errors(), &errors);
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_no_errors_before_first_submit() {
        let mut form = ContactForm::new(DELAY);
        form.set_field(Field::Email, "nope".to_string());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_errors_track_edits_after_failed_submit() {
        let mut form = ContactForm::new(DELAY);
        assert!(form.begin_submit().is_err());
        assert_eq!(form.errors().len(), 3);

        form.set_field(Field::Name, "Ada".to_string());
        assert_eq!(form.errors().len(), 2);
        assert_eq!(form.errors().get(Field::Name), None);

        form.set_field(Field::Email, "ada@".to_string());
        assert_eq!(form.errors().get(Field::Email), Some(crate::FieldError::InvalidFormat));

        form.set_field(Field::Email, "ada@example.com".to_string());
        form.set_field(Field::Message, "Hi".to_string());
        assert!(form.errors().is_empty());
        form.begin_submit().unwrap();
    }

    #[test]
    fn test_second_submit_while_pending_is_rejected() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        assert!(form.is_pending());
        assert_eq!(form.begin_submit(), Err(SubmitRejected::Busy));
    }

    #[tokio::test]
    async fn test_success_empties_form() {
        let mut form = filled_form();
        let relay = FakeRelay::ok();
        let client = client(relay.clone());

        form.submit(&client).await.unwrap();

        assert_eq!(form.status(), &SubmissionStatus::success());
        assert_eq!(form.status().message(), Some(SUCCESS_MESSAGE));
        assert!(form.input().is_empty());
        assert_eq!(relay.calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_keeps_user_text() {
        let mut form = filled_form();
        let client = client(FakeRelay::failing(SubmissionError::Transport(
            "offline".to_string(),
        )));

        form.submit(&client).await.unwrap();

        assert_eq!(form.status(), &SubmissionStatus::failure());
        assert_eq!(form.status().message(), Some(FAILURE_MESSAGE));
        assert_eq!(form.input(), filled_form().input());
    }

    #[tokio::test]
    async fn test_resubmit_after_failure() {
        let mut form = filled_form();
        let failing = client(FakeRelay::failing(SubmissionError::Rejected(500)));
        form.submit(&failing).await.unwrap();

        let ok = client(FakeRelay::ok());
        form.submit(&ok).await.unwrap();
        assert_eq!(form.status(), &SubmissionStatus::success());
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_cleared_once_after_delay() {
        let form = Arc::new(Mutex::new(filled_form()));
        let clears = Arc::new(Mutex::new(0));

        let input = form.lock().unwrap().begin_submit().unwrap();
        let result = client(FakeRelay::ok()).submit(&input).await;
        let ticket = form.lock().unwrap().finish(result);
        assert_eq!(form.lock().unwrap().status(), &SubmissionStatus::success());

        let timer = schedule_clear(&form, ticket, &clears).await;

        tokio::time::advance(DELAY - Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(form.lock().unwrap().status(), &SubmissionStatus::success());
        assert_eq!(*clears.lock().unwrap(), 0);

        tokio::time::advance(Duration::from_millis(1)).await;
        timer.await.unwrap();
        assert_eq!(form.lock().unwrap().status(), &SubmissionStatus::Idle);
        assert_eq!(*clears.lock().unwrap(), 1);

        // A late duplicate redemption changes nothing.
        assert!(!form.lock().unwrap().expire(ticket));
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_status_is_not_cleared_early() {
        let form = Arc::new(Mutex::new(filled_form()));
        let clears = Arc::new(Mutex::new(0));

        // First attempt fails at t=0.
        let failing = client(FakeRelay::failing(SubmissionError::Rejected(502)));
        let input = form.lock().unwrap().begin_submit().unwrap();
        let result = failing.submit(&input).await;
        let first = form.lock().unwrap().finish(result);
        let first_timer = schedule_clear(&form, first, &clears).await;

        // Second attempt succeeds at t=3s, while the failure is still showing.
        tokio::time::advance(Duration::from_secs(3)).await;
        let input = form.lock().unwrap().begin_submit().unwrap();
        let result = client(FakeRelay::ok()).submit(&input).await;
        let second = form.lock().unwrap().finish(result);
        let second_timer = schedule_clear(&form, second, &clears).await;

        // t=5s: the first timer fires but the success message stays.
        tokio::time::advance(Duration::from_secs(2)).await;
        first_timer.await.unwrap();
        assert_eq!(form.lock().unwrap().status(), &SubmissionStatus::success());
        assert_eq!(*clears.lock().unwrap(), 0);

        // t=8s: the second timer clears it.
        tokio::time::advance(Duration::from_secs(3)).await;
        second_timer.await.unwrap();
        assert_eq!(form.lock().unwrap().status(), &SubmissionStatus::Idle);
        assert_eq!(*clears.lock().unwrap(), 1);
    }
}
