//! Contact form handler.

use serde::Serialize;

use super::{log_record, SubmitOutcome};
use crate::config::{Config, MessageConfig};
use crate::constants::ids;
use crate::dom::{NodeId, SharedDocument};
use crate::message::{Severity, TransientMessage};
use crate::validation::{is_valid_email, SubmissionError};

/// A contact request as read from the form, fields already trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ContactSubmission {
    /// Sender name (required)
    pub name: String,
    /// Sender email (required, must look like an address)
    pub email: String,
    /// Phone number (optional, may be empty)
    pub phone: String,
    /// Message body (required)
    pub message: String,
    /// Newsletter opt-in
    pub newsletter: bool,
}

impl ContactSubmission {
    /// Checks required fields first, then the email format.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(SubmissionError::MissingRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(SubmissionError::MalformedEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct ContactFields {
    name: NodeId,
    email: NodeId,
    phone: NodeId,
    message: NodeId,
    newsletter: NodeId,
}

/// Submit handler bound to `#contactForm`.
#[derive(Debug)]
pub struct ContactForm {
    document: SharedDocument,
    form: NodeId,
    fields: ContactFields,
    feedback: TransientMessage,
    messages: MessageConfig,
}

impl ContactForm {
    /// Looks up the form, its feedback element and its five controls.
    ///
    /// Returns `None` when any of them is missing from the page.
    pub fn attach(document: &SharedDocument, config: &Config) -> Option<Self> {
        let doc = document.borrow();
        let form = doc.get_element_by_id(ids::CONTACT_FORM)?;
        let message_element = doc.get_element_by_id(ids::CONTACT_MESSAGE)?;
        let fields = ContactFields {
            name: doc.get_element_by_id(ids::NAME)?,
            email: doc.get_element_by_id(ids::EMAIL)?,
            phone: doc.get_element_by_id(ids::PHONE)?,
            message: doc.get_element_by_id(ids::MESSAGE)?,
            newsletter: doc.get_element_by_id(ids::NEWSLETTER_OPT_IN)?,
        };

        Some(Self {
            document: SharedDocument::clone(document),
            form,
            fields,
            feedback: TransientMessage::new(
                SharedDocument::clone(document),
                Some(message_element),
                config.classes.form_message.clone(),
                config.behavior.reset_delay(),
            ),
            messages: config.messages.clone(),
        })
    }

    /// The form element.
    pub fn form(&self) -> NodeId {
        self.form
    }

    /// Reads the current field values.
    pub fn read(&self) -> ContactSubmission {
        let doc = self.document.borrow();
        ContactSubmission {
            name: doc.value(self.fields.name).trim().to_string(),
            email: doc.value(self.fields.email).trim().to_string(),
            phone: doc.value(self.fields.phone).trim().to_string(),
            message: doc.value(self.fields.message).trim().to_string(),
            newsletter: doc.checked(self.fields.newsletter),
        }
    }

    /// Handles a submit event. Must run inside a `LocalSet`.
    pub fn submit(&self) -> SubmitOutcome {
        let submission = self.read();

        if let Err(error) = submission.validate() {
            tracing::debug!(%error, "Contact form rejected");
            self.feedback
                .show(self.messages.contact_error(error), Severity::Error);
            return SubmitOutcome::Rejected(error);
        }

        self.feedback
            .show(&self.messages.contact_success, Severity::Success);
        let reset = self.feedback.schedule_reset(self.form);
        log_record(
            &mut self.document.borrow_mut(),
            "Form submitted",
            &submission,
        );

        SubmitOutcome::Accepted(reset)
    }
}
