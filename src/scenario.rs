//! Scripted interaction replay.
//!
//! A scenario is a TOML list of steps played against a page on a
//! single-threaded event loop. Waits run on tokio's paused clock by default,
//! so a five second reset delay costs nothing; `Clock::Realtime` sleeps for
//! real.
//!
//! ```toml
//! [[step]]
//! action = "fill"
//! target = "#email"
//! value = "jo@example.com"
//!
//! [[step]]
//! action = "submit"
//! target = "#contactForm"
//!
//! [[step]]
//! action = "wait"
//! ms = 5000
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tokio::task::LocalSet;

use crate::config::Config;
use crate::constants::ids;
use crate::controller::PageController;
use crate::dom::{Document, NodeId, SharedDocument};
use crate::events::PageEvent;

/// One scripted interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Step {
    /// Click the element matched by `target`
    Click {
        /// Element selector
        target: String,
    },
    /// Scroll the window to `offset`
    Scroll {
        /// Vertical offset in pixels
        offset: f64,
    },
    /// Type `value` into a form control (no events fire)
    Fill {
        /// Element selector
        target: String,
        /// New control value
        value: String,
    },
    /// Set a checkbox (no events fire)
    Check {
        /// Element selector
        target: String,
        /// New checked state
        checked: bool,
    },
    /// Submit the form matched by `target`
    Submit {
        /// Form selector
        target: String,
    },
    /// Let the event loop run for `ms` milliseconds
    Wait {
        /// Milliseconds to wait
        ms: u64,
    },
}

/// An ordered list of steps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Steps in play order
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Parses a scenario from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse scenario")
    }

    /// Reads and parses a scenario file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid scenario file: {}", path.display()))
    }
}

/// How `wait` steps pass time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Paused tokio clock; waits complete instantly in wall time
    #[default]
    Virtual,
    /// Wall-clock sleeps
    Realtime,
}

/// Resolves `#id`, `.class` or `.class:N` (zero-based N-th match).
pub fn resolve_selector(doc: &Document, selector: &str) -> Result<NodeId> {
    if let Some(id) = selector.strip_prefix('#') {
        return doc
            .get_element_by_id(id)
            .with_context(|| format!("No element matches '{}'", selector));
    }

    if let Some(class_selector) = selector.strip_prefix('.') {
        let (class, index) = match class_selector.split_once(':') {
            Some((class, index)) => {
                let index: usize = index
                    .parse()
                    .with_context(|| format!("Invalid index in selector '{}'", selector))?;
                (class, index)
            }
            None => (class_selector, 0),
        };
        return doc
            .all_by_class(class)
            .get(index)
            .copied()
            .with_context(|| format!("No element matches '{}'", selector));
    }

    anyhow::bail!(
        "Unsupported selector '{}': expected #id, .class or .class:N",
        selector
    )
}

/// Plays `scenario` step by step. Must run inside a `LocalSet`.
pub async fn play(controller: &mut PageController, scenario: &Scenario) -> Result<()> {
    let document = SharedDocument::clone(controller.document());

    for (index, step) in scenario.steps.iter().enumerate() {
        tracing::debug!(step = index + 1, ?step, "Playing step");
        let resolve = |selector: &str| {
            resolve_selector(&document.borrow(), selector)
                .with_context(|| format!("Step {} failed", index + 1))
        };

        match step {
            Step::Click { target } => {
                let target = resolve(target.as_str())?;
                controller.dispatch(PageEvent::Click { target });
            }
            Step::Scroll { offset } => {
                controller.dispatch(PageEvent::Scroll {
                    scroll_top: *offset,
                });
            }
            Step::Fill { target, value } => {
                let target = resolve(target.as_str())?;
                document.borrow_mut().set_value(target, value);
            }
            Step::Check { target, checked } => {
                let target = resolve(target.as_str())?;
                document.borrow_mut().set_checked(target, *checked);
            }
            Step::Submit { target } => {
                let form = resolve(target.as_str())?;
                let outcome = controller.dispatch(PageEvent::Submit { form });
                if let Some(submission) = outcome.submission {
                    match submission.error() {
                        Some(error) => tracing::info!(%target, %error, "Submission rejected"),
                        None => tracing::info!(%target, "Submission accepted"),
                    }
                }
            }
            Step::Wait { ms } => {
                advance(Duration::from_millis(*ms)).await;
            }
        }
    }

    Ok(())
}

/// Sleeps for `duration`, then yields once.
///
/// A `LocalSet` polls its main future before its spawned tasks, so without the
/// yield a reset timer due on the same tick as the wait would run only after
/// the caller had already looked at the page. Timers registered earlier fire
/// first, as they do in a browser.
pub async fn advance(duration: Duration) {
    tokio::time::sleep(duration).await;
    tokio::task::yield_now().await;
}

/// Loads the page into a fresh controller, plays the scenario on a
/// current-thread runtime, and captures the resulting state.
pub fn run(
    document: Document,
    path: &str,
    scenario: &Scenario,
    config: &Config,
    clock: Clock,
) -> Result<Snapshot> {
    let mut builder = tokio::runtime::Builder::new_current_thread();
    builder.enable_time();
    if clock == Clock::Virtual {
        builder.start_paused(true);
    }
    let runtime = builder.build().context("Failed to start event loop")?;

    let local = LocalSet::new();
    local.block_on(&runtime, async {
        let mut controller = PageController::init(document.into_shared(), path, config);
        play(&mut controller, scenario).await?;
        tokio::task::yield_now().await;
        Ok::<_, anyhow::Error>(Snapshot::capture(&controller, path))
    })
}

/// Visible state of one feedback element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageState {
    /// Text content
    pub text: String,
    /// Full class attribute
    pub class: String,
    /// False when an inline `display: none` hides it
    pub visible: bool,
}

/// State of one form control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldState {
    /// Checkbox
    Checked(bool),
    /// Text-like control
    Value(String),
}

/// The page state a scenario can observe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Path the page was loaded at
    pub path: String,
    /// Whether the menu is open; `None` when navigation is not attached
    pub menu_open: Option<bool>,
    /// `href` of every link carrying the active marker
    pub active_links: Vec<String>,
    /// Feedback elements by id
    pub messages: BTreeMap<String, MessageState>,
    /// Form controls by id
    pub fields: BTreeMap<String, FieldState>,
    /// Page console output
    pub console: Vec<String>,
}

impl Snapshot {
    /// Reads the controller's document.
    pub fn capture(controller: &PageController, path: &str) -> Self {
        let doc = controller.document().borrow();

        let active_links = controller
            .active_links()
            .iter()
            .filter_map(|link| doc.attribute(*link, "href"))
            .collect();

        let mut messages = BTreeMap::new();
        for id in [ids::CONTACT_MESSAGE, ids::NEWSLETTER_MESSAGE] {
            if let Some(node) = doc.get_element_by_id(id) {
                messages.insert(
                    id.to_string(),
                    MessageState {
                        text: doc.text_content(node),
                        class: doc.class_name(node),
                        visible: !doc.is_hidden(node),
                    },
                );
            }
        }

        let mut fields = BTreeMap::new();
        for id in [
            ids::NAME,
            ids::EMAIL,
            ids::PHONE,
            ids::MESSAGE,
            ids::NEWSLETTER_OPT_IN,
            ids::NEWSLETTER_EMAIL,
        ] {
            if let Some(node) = doc.get_element_by_id(id) {
                let state = if doc.attribute(node, "type").as_deref() == Some("checkbox") {
                    FieldState::Checked(doc.checked(node))
                } else {
                    FieldState::Value(doc.value(node).to_string())
                };
                fields.insert(id.to_string(), state);
            }
        }

        Self {
            path: path.to_string(),
            menu_open: controller.navigation().map(|nav| nav.is_open()),
            active_links,
            messages,
            fields,
            console: doc.console().to_vec(),
        }
    }
}
