//! Page controller.
//!
//! Created once the page structure is available. Every element lookup happens
//! here, at construction; the behaviors hold on to the handles for the life of
//! the page. A behavior whose elements are missing is simply not attached.

use crate::config::Config;
use crate::constants::classes;
use crate::dom::{NodeId, SharedDocument};
use crate::events::{EventOutcome, PageEvent};
use crate::forms::{ContactForm, NewsletterForm};
use crate::nav::{self, NavigationToggle};

/// Owns the page's behaviors and routes events to them.
#[derive(Debug)]
pub struct PageController {
    document: SharedDocument,
    navigation: Option<NavigationToggle>,
    active_links: Vec<NodeId>,
    contact: Option<ContactForm>,
    newsletter: Option<NewsletterForm>,
}

impl PageController {
    /// Wires up the page at `path` (the URL path, e.g. `/about.html`).
    ///
    /// Marks the active navigation link immediately.
    pub fn init(document: SharedDocument, path: &str, config: &Config) -> Self {
        let navigation = NavigationToggle::attach(&document, config);

        let active_links = {
            let mut doc = document.borrow_mut();
            let links = doc.all_by_class(classes::NAV_LINK);
            nav::mark_active_links(
                &mut doc,
                &links,
                path,
                &config.behavior.default_page,
                &config.classes.active,
            )
        };

        let contact = ContactForm::attach(&document, config);
        let newsletter = NewsletterForm::attach(&document, config);

        tracing::debug!(
            path,
            navigation = navigation.is_some(),
            contact = contact.is_some(),
            newsletter = newsletter.is_some(),
            active_links = active_links.len(),
            "Page controller initialized"
        );

        Self {
            document,
            navigation,
            active_links,
            contact,
            newsletter,
        }
    }

    /// The document this controller drives.
    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    /// Navigation behavior, when the page has a toggle and a menu.
    pub fn navigation(&self) -> Option<&NavigationToggle> {
        self.navigation.as_ref()
    }

    /// Links marked active at initialization.
    pub fn active_links(&self) -> &[NodeId] {
        &self.active_links
    }

    /// Contact form behavior, when the page has the form and all its controls.
    pub fn contact(&self) -> Option<&ContactForm> {
        self.contact.as_ref()
    }

    /// Newsletter behavior, when the page has the form and its email input.
    pub fn newsletter(&self) -> Option<&NewsletterForm> {
        self.newsletter.as_ref()
    }

    /// Delivers one event. Submit handling spawns timers, so this must run
    /// inside a `tokio::task::LocalSet`.
    pub fn dispatch(&mut self, event: PageEvent) -> EventOutcome {
        match event {
            PageEvent::Click { target } => {
                if let Some(navigation) = self.navigation.as_mut() {
                    navigation.handle_click(target);
                }
                EventOutcome::default()
            }
            PageEvent::Scroll { scroll_top } => {
                if let Some(navigation) = self.navigation.as_mut() {
                    navigation.handle_scroll(scroll_top);
                }
                EventOutcome::default()
            }
            PageEvent::Submit { form } => {
                if let Some(contact) = self.contact.as_ref().filter(|c| c.form() == form) {
                    return EventOutcome::submitted(contact.submit());
                }
                if let Some(newsletter) = self.newsletter.as_ref().filter(|n| n.form() == form) {
                    return EventOutcome::submitted(newsletter.submit());
                }
                EventOutcome::default()
            }
        }
    }
}
