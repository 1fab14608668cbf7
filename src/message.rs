//! Transient feedback messages.
//!
//! Both forms report their outcome through a feedback element: the text is
//! written with a severity class, and after a successful submission a timer
//! resets the form and hides the element again. Timers are never cancelled, so
//! overlapping submissions race on the same element and the last write wins.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::dom::{NodeId, SharedDocument};

/// Styling category of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Submission accepted
    Success,
    /// Submission rejected
    Error,
}

impl Severity {
    /// Class name appended to the element's base class.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// A feedback element plus the delay after which it clears itself.
#[derive(Debug, Clone)]
pub struct TransientMessage {
    document: SharedDocument,
    element: Option<NodeId>,
    base_class: String,
    delay: Duration,
}

impl TransientMessage {
    /// Binds a feedback element. A missing element turns every write into a no-op.
    pub fn new(
        document: SharedDocument,
        element: Option<NodeId>,
        base_class: impl Into<String>,
        delay: Duration,
    ) -> Self {
        Self {
            document,
            element,
            base_class: base_class.into(),
            delay,
        }
    }

    /// The bound element, if the page has one.
    pub fn element(&self) -> Option<NodeId> {
        self.element
    }

    /// Writes `text` and sets the class to `<base> <severity>`.
    ///
    /// Also drops any inline `display: none` left by an earlier reset.
    pub fn show(&self, text: &str, severity: Severity) {
        let Some(element) = self.element else {
            return;
        };
        let mut doc = self.document.borrow_mut();
        doc.set_text_content(element, text);
        doc.set_class_name(element, &format!("{} {}", self.base_class, severity));
        // Visible after every show, including after a reset set `display: none`.
        doc.set_display(element, None);
    }

    /// Schedules the delayed reset of `form` and this message.
    ///
    /// Must be called from inside a `tokio::task::LocalSet`. The returned handle
    /// may be dropped; the reset still runs.
    pub fn schedule_reset(&self, form: NodeId) -> JoinHandle<()> {
        let document = SharedDocument::clone(&self.document);
        let element = self.element;
        let base_class = self.base_class.clone();
        let delay = self.delay;

        tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;

            let mut doc = document.borrow_mut();
            doc.reset_form(form);
            if let Some(element) = element {
                doc.set_display(element, Some("none"));
                doc.set_class_name(element, &base_class);
                doc.set_text_content(element, "");
            }
            tracing::debug!(?form, "Form reset after delay");
        })
    }
}
