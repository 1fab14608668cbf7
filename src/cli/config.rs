//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_BINARY_NAME;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the config file location
    Path,
    /// Write a config file with default values
    Init(ConfigInitArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write a config file with default values
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    force: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path().map_err(|e| {
                    CliError::io(format!("Failed to resolve config path: {e}"))
                })?;
                println!("{}", path.display());
                Ok(())
            }
            ConfigCommand::Init(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::read()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;
        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e:#}")))?;

        if self.json {
            let json = serde_json::to_string_pretty(&config).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self) -> CliResult<()> {
        let path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;

        if path.exists() && !self.force {
            return Err(CliError::validation(format!(
                "Config file already exists: {} (run '{} config init --force' to overwrite)",
                path.display(),
                APP_BINARY_NAME
            )));
        }

        Config::default()
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Wrote default configuration to {}", path.display());
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Sitewire Configuration");
    println!("======================");
    println!();

    println!("Behavior:");
    println!("  Reset Delay: {} ms", config.behavior.reset_delay_ms);
    println!("  Default Page: {}", config.behavior.default_page);
    println!();

    println!("Messages:");
    println!("  Required Fields: {}", config.messages.required_fields);
    println!("  Newsletter Required: {}", config.messages.newsletter_required);
    println!("  Invalid Email: {}", config.messages.invalid_email);
    println!("  Contact Success: {}", config.messages.contact_success);
    println!("  Newsletter Success: {}", config.messages.newsletter_success);
    println!();

    println!("Classes:");
    println!("  Active: {}", config.classes.active);
    println!("  Form Message: {}", config.classes.form_message);
    println!("  Newsletter Message: {}", config.classes.newsletter_message);
    println!();
}
