//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};
use crate::validation::SubmissionError;

/// Timing and page-resolution settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Delay before a successful submission resets its form (milliseconds)
    pub reset_delay_ms: u64,
    /// Page name used when the current path ends with `/`
    pub default_page: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: 5000,
            default_page: "index.html".to_string(),
        }
    }
}

impl BehaviorConfig {
    /// Reset delay as a `Duration`.
    #[must_use]
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

/// User-facing feedback texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    /// Contact form: name, email or message left empty
    pub required_fields: String,
    /// Newsletter form: email left empty
    pub newsletter_required: String,
    /// Either form: email does not look like an address
    pub invalid_email: String,
    /// Contact form accepted
    pub contact_success: String,
    /// Newsletter signup accepted
    pub newsletter_success: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            required_fields: "Please fill in all required fields.".to_string(),
            newsletter_required: "Please enter your email address.".to_string(),
            invalid_email: "Please enter a valid email address.".to_string(),
            contact_success: "Thank you for contacting us! We'll get back to you soon."
                .to_string(),
            newsletter_success:
                "Thank you! You've been successfully subscribed to our mailing list.".to_string(),
        }
    }
}

impl MessageConfig {
    /// Text shown by the contact form for a rejected submission.
    #[must_use]
    pub fn contact_error(&self, error: SubmissionError) -> &str {
        match error {
            SubmissionError::MissingRequired => &self.required_fields,
            SubmissionError::MalformedEmail => &self.invalid_email,
        }
    }

    /// Text shown by the newsletter form for a rejected subscription.
    #[must_use]
    pub fn newsletter_error(&self, error: SubmissionError) -> &str {
        match error {
            SubmissionError::MissingRequired => &self.newsletter_required,
            SubmissionError::MalformedEmail => &self.invalid_email,
        }
    }
}

/// CSS class names written by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassConfig {
    /// Marks the open menu and the current page's link
    pub active: String,
    /// Base class of the contact feedback element
    pub form_message: String,
    /// Base class of the newsletter feedback element
    pub newsletter_message: String,
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            active: "active".to_string(),
            form_message: "form-message".to_string(),
            newsletter_message: "newsletter-message".to_string(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Sitewire/config.toml`
/// - macOS: `~/Library/Application Support/Sitewire/config.toml`
/// - Windows: `%APPDATA%\Sitewire\config.toml`
///
/// `SITEWIRE_CONFIG_DIR` replaces the directory when set.
///
/// # Validation
///
/// - `reset_delay_ms` must be greater than zero
/// - `default_page` must not be empty or contain `/`
/// - message texts and class names must not be empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Timing and page resolution
    #[serde(default)]
    pub behavior: BehaviorConfig,
    /// Feedback texts
    #[serde(default)]
    pub messages: MessageConfig,
    /// Class names
    #[serde(default)]
    pub classes: ClassConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// - Linux: `~/.config/Sitewire/`
    /// - macOS: `~/Library/Application Support/Sitewire/`
    /// - Windows: `%APPDATA%\Sitewire\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads and validates configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config = Self::read()?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses the config file without validating it.
    ///
    /// Errors from here are I/O or syntax problems; callers that need to tell
    /// them apart from bad values run [`Config::validate`] themselves.
    pub fn read() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.behavior.reset_delay_ms == 0 {
            anyhow::bail!("behavior.reset_delay_ms must be greater than zero");
        }

        let page = &self.behavior.default_page;
        if page.trim().is_empty() || page.contains('/') {
            anyhow::bail!(
                "behavior.default_page must be a bare file name, got '{}'",
                page
            );
        }

        let texts = [
            ("messages.required_fields", &self.messages.required_fields),
            ("messages.newsletter_required", &self.messages.newsletter_required),
            ("messages.invalid_email", &self.messages.invalid_email),
            ("messages.contact_success", &self.messages.contact_success),
            ("messages.newsletter_success", &self.messages.newsletter_success),
        ];
        for (key, text) in texts {
            if text.trim().is_empty() {
                anyhow::bail!("{} cannot be empty", key);
            }
        }

        let class_names = [
            ("classes.active", &self.classes.active),
            ("classes.form_message", &self.classes.form_message),
            ("classes.newsletter_message", &self.classes.newsletter_message),
        ];
        for (key, class) in class_names {
            if class.is_empty() || class.chars().any(char::is_whitespace) {
                anyhow::bail!("{} must be a single class name, got '{}'", key, class);
            }
        }

        Ok(())
    }
}
