//! Contact and newsletter form handlers.
//!
//! Both handlers follow the same path: read and trim the fields, validate,
//! write feedback, and on success log the record and schedule the reset.

pub mod contact;
pub mod newsletter;

pub use contact::{ContactForm, ContactSubmission};
pub use newsletter::{NewsletterForm, NewsletterSubscription};

use serde::Serialize;
use tokio::task::JoinHandle;

use crate::dom::Document;
use crate::validation::SubmissionError;

/// Result of handling one submit event.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; an error message is showing and nothing was scheduled.
    Rejected(SubmissionError),
    /// Validation passed; the success message is showing and a reset is pending.
    Accepted(JoinHandle<()>),
}

impl SubmitOutcome {
    /// Whether the submission passed validation.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The rejection reason, if any.
    pub fn error(&self) -> Option<SubmissionError> {
        match self {
            Self::Rejected(error) => Some(*error),
            Self::Accepted(_) => None,
        }
    }
}

/// Writes an accepted record to the page console and the log.
fn log_record<T: Serialize>(doc: &mut Document, label: &str, record: &T) {
    match serde_json::to_string(record) {
        Ok(json) => {
            tracing::info!(target: "sitewire::console", record = %json, "{}", label);
            doc.console_log(format!("{label}: {json}"));
        }
        Err(e) => tracing::warn!("Failed to serialize {}: {}", label, e),
    }
}
