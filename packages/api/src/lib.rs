//! # API crate — the contact form flow
//!
//! Everything the Contact page does besides rendering: checking what the
//! visitor typed, sending it to the email relay, and tracking the status line
//! shown afterwards. Nothing here depends on Dioxus, so the whole flow is
//! testable without a browser.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`validation`] | Per-field rules turning a [`FormInput`] into a [`ValidationResult`] |
//! | [`relay`] | The [`Relay`] trait, the EmailJS implementation and the [`SubmissionClient`] |
//! | [`status`] | [`SubmissionStatus`] and the auto-clearing [`StatusNotifier`] |
//! | [`contact`] | [`ContactForm`], the page-level controller tying the three together |
//!
//! ## Flow
//!
//! 1. [`ContactForm::begin_submit`] validates the input and moves to `Pending`.
//! 2. The caller awaits [`SubmissionClient::submit`] (one relay call, no retry).
//! 3. [`ContactForm::finish`] records `Success` or `Failure` and hands back a
//!    [`ClearTicket`].
//! 4. After [`ContactForm::clear_after`] the caller passes the ticket to
//!    [`ContactForm::expire`]; stale tickets are ignored.

pub mod contact;
pub mod relay;
pub mod status;
pub mod validation;

pub use contact::{ContactForm, SubmitRejected};
pub use relay::{EmailJsRelay, Relay, RelayPayload, SubmissionClient, SubmissionError, TemplateParams};
pub use status::{ClearTicket, StatusNotifier, SubmissionStatus, FAILURE_MESSAGE, SUCCESS_MESSAGE};
pub use validation::{validate, Field, FieldError, FormInput, ValidationResult};

pub use content::RelayConfig;
