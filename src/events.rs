//! Events delivered to the page controller.

use crate::dom::NodeId;
use crate::forms::SubmitOutcome;

/// A user interaction the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// Pointer activation; `target` is the innermost element under the pointer
    Click {
        /// Innermost clicked element
        target: NodeId,
    },
    /// Window scroll to vertical offset `scroll_top`
    Scroll {
        /// Vertical scroll offset in pixels
        scroll_top: f64,
    },
    /// Form submission
    Submit {
        /// The submitted form
        form: NodeId,
    },
}

/// What the controller did with an event.
#[derive(Debug, Default)]
pub struct EventOutcome {
    /// The host should skip its default action (page navigation on submit)
    pub default_prevented: bool,
    /// Set when the event was a submit handled by one of the forms
    pub submission: Option<SubmitOutcome>,
}

impl EventOutcome {
    pub(crate) fn submitted(outcome: SubmitOutcome) -> Self {
        Self {
            default_prevented: true,
            submission: Some(outcome),
        }
    }
}
