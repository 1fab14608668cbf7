//! Mobile navigation toggle and active-link marking.
//!
//! The menu is open while it carries the active class; nothing else records
//! the state, so every handler re-reads it from the document.

use crate::config::Config;
use crate::constants::classes;
use crate::dom::{Document, NodeId, SharedDocument};

/// File name of the page at `path`: the last `/` segment, or `default_page`
/// when that segment is empty.
pub fn current_page<'a>(path: &'a str, default_page: &'a str) -> &'a str {
    match path.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => default_page,
    }
}

/// Adds `active_class` to each link whose `href` equals the current page and
/// removes it from every other link. Returns the marked links.
pub fn mark_active_links(
    doc: &mut Document,
    links: &[NodeId],
    path: &str,
    default_page: &str,
    active_class: &str,
) -> Vec<NodeId> {
    let page = current_page(path, default_page);
    let mut marked = Vec::new();

    for &link in links {
        if doc.attribute(link, "href").as_deref() == Some(page) {
            doc.add_class(link, active_class);
            marked.push(link);
        } else {
            doc.remove_class(link, active_class);
        }
    }

    marked
}

/// Open/close behavior of the mobile menu.
#[derive(Debug)]
pub struct NavigationToggle {
    document: SharedDocument,
    toggle: NodeId,
    menu: NodeId,
    links: Vec<NodeId>,
    active_class: String,
    last_scroll_top: f64,
}

impl NavigationToggle {
    /// Looks up the toggle control, menu and links.
    ///
    /// Returns `None` when the page has no toggle control or no menu.
    pub fn attach(document: &SharedDocument, config: &Config) -> Option<Self> {
        let doc = document.borrow();
        let toggle = doc.first_by_class(classes::NAV_TOGGLE)?;
        let menu = doc.first_by_class(classes::NAV_MENU)?;
        let links = doc.all_by_class(classes::NAV_LINK);

        Some(Self {
            document: SharedDocument::clone(document),
            toggle,
            menu,
            links,
            active_class: config.classes.active.clone(),
            last_scroll_top: 0.0,
        })
    }

    /// Whether the menu currently carries the active class.
    pub fn is_open(&self) -> bool {
        self.document.borrow().has_class(self.menu, &self.active_class)
    }

    /// The menu element.
    pub fn menu(&self) -> NodeId {
        self.menu
    }

    /// The toggle control.
    pub fn toggle(&self) -> NodeId {
        self.toggle
    }

    /// Scroll offset seen by the most recent scroll event.
    pub fn last_scroll_top(&self) -> f64 {
        self.last_scroll_top
    }

    /// Handles a click whose innermost target is `target`.
    ///
    /// Runs the toggle handler, then the link handler, then the outside-click
    /// check, matching the order the listeners fire as the click bubbles.
    pub fn handle_click(&mut self, target: NodeId) {
        let mut doc = self.document.borrow_mut();
        let inside_toggle = doc.contains(self.toggle, target);
        let inside_menu = doc.contains(self.menu, target);

        if inside_toggle {
            let open = doc.toggle_class(self.menu, &self.active_class);
            tracing::debug!(open, "Navigation toggled");
        }

        if self.links.iter().any(|link| doc.contains(*link, target)) {
            doc.remove_class(self.menu, &self.active_class);
        }

        if !inside_toggle && !inside_menu && doc.has_class(self.menu, &self.active_class) {
            doc.remove_class(self.menu, &self.active_class);
            tracing::debug!("Navigation closed by outside click");
        }
    }

    /// Handles a scroll event at vertical offset `scroll_top`.
    ///
    /// Any scroll closes an open menu; direction and distance are ignored.
    // TODO: compare against last_scroll_top and only close past a minimum delta.
    pub fn handle_scroll(&mut self, scroll_top: f64) {
        let mut doc = self.document.borrow_mut();
        if doc.has_class(self.menu, &self.active_class) {
            doc.remove_class(self.menu, &self.active_class);
            tracing::debug!(scroll_top, "Navigation closed by scroll");
        }
        self.last_scroll_top = scroll_top;
    }
}
