//! Sitewire Library
//!
//! Page behaviors for a static site, run against a headless document:
//! mobile navigation toggling, active-link marking, and validation feedback
//! for a contact form and a newsletter signup form.
//!
//! ```no_run
//! use sitewire::config::Config;
//! use sitewire::controller::PageController;
//! use sitewire::dom::parse_html;
//! use sitewire::events::PageEvent;
//!
//! let config = Config::load()?;
//! let html = std::fs::read_to_string("site/contact.html")?;
//! let document = parse_html(&html).into_shared();
//! let mut controller = PageController::init(document, "/contact.html", &config);
//!
//! if let Some(toggle) = controller.navigation().map(|nav| nav.toggle()) {
//!     controller.dispatch(PageEvent::Click { target: toggle });
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod controller;
pub mod dom;
pub mod events;
pub mod forms;
pub mod message;
pub mod nav;
pub mod scenario;
pub mod validation;
