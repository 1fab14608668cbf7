//! Shared test fixtures for controller and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use sitewire::config::Config;
use sitewire::controller::PageController;
use sitewire::dom::{parse_html, NodeId, SharedDocument};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A page with every element the controller knows about.
pub const FULL_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <header>
    <button class="nav-toggle"><span id="toggle-bar"></span></button>
    <ul class="nav-menu">
      <li><a id="link-home" class="nav-link" href="index.html">Home</a></li>
      <li><a id="link-about" class="nav-link" href="about.html">About</a></li>
      <li><a id="link-contact" class="nav-link" href="contact.html">Contact</a></li>
    </ul>
  </header>
  <main id="main">
    <h1 id="title">Contact us</h1>
    <form id="contactForm">
      <input id="name" type="text">
      <input id="email" type="email">
      <input id="phone" type="tel">
      <textarea id="message"></textarea>
      <input id="newsletter" type="checkbox">
    </form>
    <div id="formMessage" class="form-message"></div>
  </main>
  <footer>
    <form id="newsletterForm">
      <input id="newsletter-email" type="email">
    </form>
    <p id="newsletterMessage" class="newsletter-message"></p>
  </footer>
</body>
</html>"#;

/// A page with no navigation and no forms.
pub const BARE_PAGE: &str = r#"<html><body><p id="text">Nothing here</p></body></html>"#;

/// Parses `html` and initializes a controller at `path` with default config.
pub fn controller_for(html: &str, path: &str) -> (SharedDocument, PageController) {
    controller_with_config(html, path, &Config::default())
}

/// Same as [`controller_for`] with an explicit config.
pub fn controller_with_config(
    html: &str,
    path: &str,
    config: &Config,
) -> (SharedDocument, PageController) {
    let document = parse_html(html).into_shared();
    let controller = PageController::init(SharedDocument::clone(&document), path, config);
    (document, controller)
}

/// Looks up an element by id, panicking when it is missing.
pub fn by_id(document: &SharedDocument, id: &str) -> NodeId {
    document
        .borrow()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("fixture has no #{id}"))
}

/// Writes a value into the control with the given id.
pub fn fill(document: &SharedDocument, id: &str, value: &str) {
    let node = by_id(document, id);
    document.borrow_mut().set_value(node, value);
}

/// Sets the checked state of the control with the given id.
pub fn check(document: &SharedDocument, id: &str, checked: bool) {
    let node = by_id(document, id);
    document.borrow_mut().set_checked(node, checked);
}

/// Text, class and visibility of the element with the given id.
pub fn message_state(document: &SharedDocument, id: &str) -> (String, String, bool) {
    let node = by_id(document, id);
    let doc = document.borrow();
    (doc.text_content(node), doc.class_name(node), !doc.is_hidden(node))
}

/// Writes `content` to `name` inside a fresh temp directory.
pub fn write_temp_file(name: &str, content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    (path, temp_dir)
}
