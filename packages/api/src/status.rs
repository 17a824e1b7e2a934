//! # Submission status and the auto-clearing status line
//!
//! ```text
//!   Idle ──begin──▶ Pending ──relay ok──▶ Success(msg) ──timer──▶ Idle
//!                      │
//!                      └────relay err───▶ Failure(msg) ──timer──▶ Idle
//! ```
//!
//! Every transition bumps a generation counter. [`StatusNotifier::set`] hands
//! back a [`ClearTicket`] for the current generation, and
//! [`StatusNotifier::clear`] only acts on a ticket that is still current. A
//! status set while an older one is showing therefore stays visible for its
//! full delay: the older timer fires into a stale ticket and does nothing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully.";
pub const FAILURE_MESSAGE: &str = "Oops, something went wrong.";

/// Where the current submission attempt stands.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Success(String),
    Failure(String),
}

impl SubmissionStatus {
    pub fn success() -> Self {
        SubmissionStatus::Success(SUCCESS_MESSAGE.to_string())
    }

    pub fn failure() -> Self {
        SubmissionStatus::Failure(FAILURE_MESSAGE.to_string())
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }

    /// Text for the status line, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Success(msg) | SubmissionStatus::Failure(msg) => Some(msg),
            SubmissionStatus::Idle | SubmissionStatus::Pending => None,
        }
    }
}

/// Permission to clear the status set in one particular generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClearTicket {
    generation: u64,
}

/// Holds the status line and decides which scheduled clears still apply.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusNotifier {
    status: SubmissionStatus,
    generation: u64,
    clear_after: Duration,
}

impl Default for StatusNotifier {
    fn default() -> Self {
        Self::new(content::StatusConfig::default().clear_after())
    }
}

impl StatusNotifier {
    pub fn new(clear_after: Duration) -> Self {
        Self {
            status: SubmissionStatus::Idle,
            generation: 0,
            clear_after,
        }
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// How long a status stays up before its ticket should be redeemed.
    pub fn clear_after(&self) -> Duration {
        self.clear_after
    }

    /// Mark a submission as in flight. Outstanding tickets become stale.
    pub fn set_pending(&mut self) {
        self.generation += 1;
        self.status = SubmissionStatus::Pending;
    }

    /// Show `status`, replacing whatever was showing.
    pub fn set(&mut self, status: SubmissionStatus) -> ClearTicket {
        self.generation += 1;
        self.status = status;
        ClearTicket {
            generation: self.generation,
        }
    }

    /// Return to `Idle` if `ticket` belongs to the status currently showing.
    ///
    /// Returns `true` when the status was cleared.
    pub fn clear(&mut self, ticket: ClearTicket) -> bool {
        if ticket.generation != self.generation || self.status == SubmissionStatus::Idle {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }
}
