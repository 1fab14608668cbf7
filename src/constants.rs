//! Application-wide constants.
//!
//! This module defines the application name and the element identifiers and
//! class names the page controller expects to find in a page.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Sitewire";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "sitewire";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "Sitewire";

/// Environment variable that overrides the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "SITEWIRE_CONFIG_DIR";

/// Element ids looked up once when the controller starts.
pub mod ids {
    /// Contact form element
    pub const CONTACT_FORM: &str = "contactForm";
    /// Contact form feedback element
    pub const CONTACT_MESSAGE: &str = "formMessage";
    /// Newsletter form element
    pub const NEWSLETTER_FORM: &str = "newsletterForm";
    /// Newsletter feedback element
    pub const NEWSLETTER_MESSAGE: &str = "newsletterMessage";
    /// Contact name input
    pub const NAME: &str = "name";
    /// Contact email input
    pub const EMAIL: &str = "email";
    /// Contact phone input
    pub const PHONE: &str = "phone";
    /// Contact message textarea
    pub const MESSAGE: &str = "message";
    /// Contact newsletter opt-in checkbox
    pub const NEWSLETTER_OPT_IN: &str = "newsletter";
    /// Newsletter email input
    pub const NEWSLETTER_EMAIL: &str = "newsletter-email";
}

/// Class names used to select the navigation elements.
pub mod classes {
    /// Toggle control that opens and closes the mobile menu
    pub const NAV_TOGGLE: &str = "nav-toggle";
    /// Menu container
    pub const NAV_MENU: &str = "nav-menu";
    /// Navigation links
    pub const NAV_LINK: &str = "nav-link";
}
