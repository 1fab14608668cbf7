//! CLI command handlers for Sitewire.
//!
//! Headless, scriptable access to the page behaviors for automation,
//! testing, and CI.

pub mod common;
pub mod config;
pub mod email;
pub mod run;

pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use email::CheckEmailArgs;
pub use run::RunArgs;
