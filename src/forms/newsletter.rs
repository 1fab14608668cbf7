//! Newsletter signup handler.

use serde::Serialize;

use super::{log_record, SubmitOutcome};
use crate::config::{Config, MessageConfig};
use crate::constants::ids;
use crate::dom::{NodeId, SharedDocument};
use crate::message::{Severity, TransientMessage};
use crate::validation::{is_valid_email, SubmissionError};

/// A newsletter signup, email already trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct NewsletterSubscription {
    /// Subscriber address
    pub email: String,
}

impl NewsletterSubscription {
    /// Empty check first, then the email format.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        if self.email.is_empty() {
            return Err(SubmissionError::MissingRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(SubmissionError::MalformedEmail);
        }
        Ok(())
    }
}

/// Submit handler bound to `#newsletterForm`.
#[derive(Debug)]
pub struct NewsletterForm {
    document: SharedDocument,
    form: NodeId,
    email: NodeId,
    feedback: TransientMessage,
    messages: MessageConfig,
}

impl NewsletterForm {
    /// Looks up the form and its email input.
    ///
    /// The feedback element is optional: without it the handler still
    /// validates, logs and resets, it just has nowhere to write.
    pub fn attach(document: &SharedDocument, config: &Config) -> Option<Self> {
        let doc = document.borrow();
        let form = doc.get_element_by_id(ids::NEWSLETTER_FORM)?;
        let email = doc.get_element_by_id(ids::NEWSLETTER_EMAIL)?;
        let message_element = doc.get_element_by_id(ids::NEWSLETTER_MESSAGE);

        Some(Self {
            document: SharedDocument::clone(document),
            form,
            email,
            feedback: TransientMessage::new(
                SharedDocument::clone(document),
                message_element,
                config.classes.newsletter_message.clone(),
                config.behavior.reset_delay(),
            ),
            messages: config.messages.clone(),
        })
    }

    /// The form element.
    pub fn form(&self) -> NodeId {
        self.form
    }

    /// Reads the current email value.
    pub fn read(&self) -> NewsletterSubscription {
        NewsletterSubscription {
            email: self.document.borrow().value(self.email).trim().to_string(),
        }
    }

    /// Handles a submit event. Must run inside a `LocalSet`.
    pub fn submit(&self) -> SubmitOutcome {
        let subscription = self.read();

        if let Err(error) = subscription.validate() {
            tracing::debug!(%error, "Newsletter signup rejected");
            self.feedback
                .show(self.messages.newsletter_error(error), Severity::Error);
            return SubmitOutcome::Rejected(error);
        }

        self.feedback
            .show(&self.messages.newsletter_success, Severity::Success);
        let reset = self.feedback.schedule_reset(self.form);
        log_record(
            &mut self.document.borrow_mut(),
            "Newsletter subscription",
            &subscription,
        );

        SubmitOutcome::Accepted(reset)
    }
}
