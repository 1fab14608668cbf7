//! Headless document model.
//!
//! A [`Document`] is an arena of elements rooted at a synthetic document node.
//! It carries exactly the state the page controller reads and writes: ids,
//! class lists, attributes, text, form-control values, checked flags, the
//! inline `display` style, and a console log. Elements are addressed by
//! [`NodeId`]; ids stay valid for the lifetime of the document even after an
//! element is detached.

pub mod html;

use serde::Serialize;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

pub use html::{load_html, parse_html};

/// Document shared between the controller and its pending timers.
pub type SharedDocument = Rc<RefCell<Document>>;

/// Handle to an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

/// A single element and its mutable state.
#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    value: String,
    default_value: String,
    checked: bool,
    default_checked: bool,
    display: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    /// Lowercase tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Value of the `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Class list in attribute order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Current value of a form control
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Current checked state of a checkbox or radio
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Inline `display` style, if one was written
    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }

    /// Whether this element is a form control that a form reset restores
    pub fn is_form_control(&self) -> bool {
        matches!(self.tag.as_str(), "input" | "textarea" | "select")
    }
}

/// Element tree plus the page's console output.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    console: Vec<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document containing only the root node.
    pub fn new() -> Self {
        let root = Element {
            tag: "#document".to_string(),
            ..Element::default()
        };
        Self {
            nodes: vec![root],
            console: Vec::new(),
        }
    }

    /// Wraps the document for sharing with the controller and its timers.
    pub fn into_shared(self) -> SharedDocument {
        Rc::new(RefCell::new(self))
    }

    /// The synthetic root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Creates a new element and appends it to `parent`.
    pub fn create_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let node = NodeId(self.nodes.len());
        self.nodes.push(Element {
            tag: tag.to_ascii_lowercase(),
            parent: Some(parent),
            ..Element::default()
        });
        self.nodes[parent.0].children.push(node);
        node
    }

    /// Borrows an element.
    ///
    /// # Panics
    ///
    /// Panics if `node` was not created by this document.
    pub fn element(&self, node: NodeId) -> &Element {
        &self.nodes[node.0]
    }

    fn element_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.nodes[node.0]
    }

    /// Attached descendants of `node` in document order, `node` itself excluded.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.element(node).children.iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.element(current).children.iter().rev().copied());
        }
        out
    }

    /// First attached element with the given id.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|node| self.element(*node).id() == Some(id))
    }

    /// First attached element carrying `class`.
    pub fn first_by_class(&self, class: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|node| self.has_class(*node, class))
    }

    /// Every attached element carrying `class`, in document order.
    pub fn all_by_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|node| self.has_class(*node, class))
            .collect()
    }

    /// True when `node` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(candidate) = current {
            if candidate == ancestor {
                return true;
            }
            current = self.element(candidate).parent;
        }
        false
    }

    /// Reads an attribute. `id` and `class` are served from their dedicated fields.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        let element = self.element(node);
        match name {
            "id" => element.id.clone(),
            "class" => Some(element.classes.join(" ")),
            _ => element.attributes.get(name).cloned(),
        }
    }

    /// Writes an attribute. `id` and `class` update their dedicated fields.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        match name {
            "id" => self.element_mut(node).id = Some(value.to_string()),
            "class" => self.set_class_name(node, value),
            _ => {
                self.element_mut(node)
                    .attributes
                    .insert(name.to_string(), value.to_string());
            }
        }
    }

    /// Whether the element's class list contains `class`.
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).classes.iter().any(|c| c == class)
    }

    /// Adds `class` unless already present.
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.element_mut(node).classes.push(class.to_string());
        }
    }

    /// Removes every occurrence of `class`.
    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.element_mut(node).classes.retain(|c| c != class);
    }

    /// Flips `class` and returns whether it is now present.
    pub fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    /// Space-separated class list.
    pub fn class_name(&self, node: NodeId) -> String {
        self.element(node).classes.join(" ")
    }

    /// Replaces the whole class list.
    pub fn set_class_name(&mut self, node: NodeId, class_name: &str) {
        let mut classes: Vec<String> = Vec::new();
        for class in class_name.split_whitespace() {
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_string());
            }
        }
        self.element_mut(node).classes = classes;
    }

    /// Concatenated text of the element and its attached descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut text = self.element(node).text.clone();
        for child in &self.element(node).children {
            text.push_str(&self.text_content(*child));
        }
        text
    }

    /// Replaces the element's content with `text`, detaching its children.
    pub fn set_text_content(&mut self, node: NodeId, text: &str) {
        let children = std::mem::take(&mut self.element_mut(node).children);
        for child in children {
            self.element_mut(child).parent = None;
        }
        self.element_mut(node).text = text.to_string();
    }

    /// Appends to the element's own text without touching its children.
    pub(crate) fn push_text(&mut self, node: NodeId, text: &str) {
        self.element_mut(node).text.push_str(text);
    }

    /// Current value of a form control.
    pub fn value(&self, node: NodeId) -> &str {
        self.element(node).value()
    }

    /// Writes the current value of a form control.
    pub fn set_value(&mut self, node: NodeId, value: &str) {
        self.element_mut(node).value = value.to_string();
    }

    /// Sets both the current and the reset value of a form control.
    pub fn set_default_value(&mut self, node: NodeId, value: &str) {
        let element = self.element_mut(node);
        element.default_value = value.to_string();
        element.value = value.to_string();
    }

    /// Current checked state.
    pub fn checked(&self, node: NodeId) -> bool {
        self.element(node).checked
    }

    /// Writes the current checked state.
    pub fn set_checked(&mut self, node: NodeId, checked: bool) {
        self.element_mut(node).checked = checked;
    }

    /// Sets both the current and the reset checked state.
    pub fn set_default_checked(&mut self, node: NodeId, checked: bool) {
        let element = self.element_mut(node);
        element.default_checked = checked;
        element.checked = checked;
    }

    /// Writes the inline `display` style; `None` removes it.
    pub fn set_display(&mut self, node: NodeId, display: Option<&str>) {
        self.element_mut(node).display = display.map(str::to_string);
    }

    /// Whether the element is hidden by an inline `display: none`.
    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.element(node).display() == Some("none")
    }

    /// Restores every form control under `form` to its reset value.
    pub fn reset_form(&mut self, form: NodeId) {
        for node in self.descendants(form) {
            let element = self.element_mut(node);
            if element.is_form_control() {
                element.value = element.default_value.clone();
                element.checked = element.default_checked;
            }
        }
    }

    /// Appends a line to the page console.
    pub fn console_log(&mut self, line: impl Into<String>) {
        self.console.push(line.into());
    }

    /// Lines written to the page console so far.
    pub fn console(&self) -> &[String] {
        &self.console
    }
}
