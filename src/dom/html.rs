//! Builds a [`Document`] from static HTML.

use anyhow::{Context, Result};
use scraper::{ElementRef, Html};
use std::fs;
use std::path::Path;

use super::{Document, NodeId};

/// Parses an HTML page into a headless document.
///
/// Parsing is lenient: malformed markup is repaired the way a browser would,
/// so this never fails. Inputs take their initial value from the `value`
/// attribute, checkboxes from `checked`, textareas from their text.
pub fn parse_html(html: &str) -> Document {
    let page = Html::parse_document(html);
    let mut doc = Document::new();
    let root = doc.root();
    append_subtree(&mut doc, root, page.root_element());
    doc
}

/// Reads and parses an HTML file.
pub fn load_html(path: &Path) -> Result<Document> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("Failed to read page: {}", path.display()))?;
    let doc = parse_html(&html);
    tracing::debug!(page = %path.display(), "Loaded page");
    Ok(doc)
}

fn append_subtree(doc: &mut Document, parent: NodeId, element: ElementRef<'_>) {
    let source = element.value();
    let node = doc.create_element(parent, source.name());

    for (name, value) in source.attrs() {
        doc.set_attribute(node, name, value);
    }

    match source.name() {
        "input" => {
            doc.set_default_value(node, source.attr("value").unwrap_or_default());
            doc.set_default_checked(node, source.attr("checked").is_some());
        }
        "textarea" => {
            let text: String = element.text().collect();
            doc.set_default_value(node, &text);
            return;
        }
        _ => {}
    }

    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            doc.push_text(node, text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            append_subtree(doc, node, child_element);
        }
    }
}
