//! Replays scripted interactions against a page.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::dom;
use crate::scenario::{self, Clock, FieldState, Scenario, Snapshot};
use clap::Args;
use std::path::PathBuf;

/// Load a page, play a scenario, and print the resulting state
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// HTML page to load
    #[arg(long, value_name = "FILE")]
    pub page: PathBuf,

    /// URL path the page is served at (used for active-link marking)
    #[arg(long, value_name = "PATH", default_value = "/")]
    pub path: String,

    /// Scenario file with the steps to play
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Sleep in wall-clock time instead of skipping ahead
    #[arg(long)]
    pub realtime: bool,

    /// Output the final state as JSON
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    /// Execute the run command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::read()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;
        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e:#}")))?;

        let document = dom::load_html(&self.page)
            .map_err(|e| CliError::io(format!("Failed to load page: {e:#}")))?;

        let scenario = match &self.script {
            Some(path) => Scenario::load(path)
                .map_err(|e| CliError::io(format!("Failed to load scenario: {e:#}")))?,
            None => Scenario::default(),
        };

        let clock = if self.realtime {
            Clock::Realtime
        } else {
            Clock::Virtual
        };

        let snapshot = scenario::run(document, &self.path, &scenario, &config, clock)
            .map_err(|e| CliError::validation(format!("Scenario failed: {e:#}")))?;

        if self.json {
            let json = serde_json::to_string_pretty(&snapshot)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            print_snapshot(&snapshot);
        }

        Ok(())
    }
}

fn print_snapshot(snapshot: &Snapshot) {
    println!("Page: {}", snapshot.path);

    match snapshot.menu_open {
        Some(true) => println!("Menu: open"),
        Some(false) => println!("Menu: closed"),
        None => println!("Menu: (not present)"),
    }

    if snapshot.active_links.is_empty() {
        println!("Active link: (none)");
    } else {
        println!("Active link: {}", snapshot.active_links.join(", "));
    }

    if !snapshot.messages.is_empty() {
        println!();
        println!("Messages:");
        for (id, message) in &snapshot.messages {
            let visibility = if message.visible { "" } else { " (hidden)" };
            println!("  #{id} [{}]{visibility}: {}", message.class, message.text);
        }
    }

    if !snapshot.fields.is_empty() {
        println!();
        println!("Fields:");
        for (id, field) in &snapshot.fields {
            match field {
                FieldState::Checked(checked) => println!("  #{id}: {checked}"),
                FieldState::Value(value) => println!("  #{id}: {value:?}"),
            }
        }
    }

    if !snapshot.console.is_empty() {
        println!();
        println!("Console:");
        for line in &snapshot.console {
            println!("  {line}");
        }
    }
}
