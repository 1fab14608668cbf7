//! Email format check command.

use crate::cli::common::{CliError, CliResult};
use crate::validation::is_valid_email;
use clap::Args;
use serde::Serialize;

/// Check whether addresses pass the form's email format check
#[derive(Debug, Clone, Args)]
pub struct CheckEmailArgs {
    /// Addresses to check
    #[arg(value_name = "ADDRESS", required = true)]
    pub addresses: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct EmailCheck<'a> {
    address: &'a str,
    valid: bool,
}

impl CheckEmailArgs {
    /// Execute the check-email command
    pub fn execute(&self) -> CliResult<()> {
        let checks: Vec<EmailCheck<'_>> = self
            .addresses
            .iter()
            .map(|address| EmailCheck {
                address: address.as_str(),
                valid: is_valid_email(address),
            })
            .collect();

        if self.json {
            let json = serde_json::to_string_pretty(&checks)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            for check in &checks {
                let mark = if check.valid { "✓" } else { "✗" };
                println!("{mark} {}", check.address);
            }
        }

        let invalid = checks.iter().filter(|check| !check.valid).count();
        if invalid > 0 {
            return Err(CliError::validation(format!(
                "{invalid} of {} address(es) failed the format check",
                checks.len()
            )));
        }

        Ok(())
    }
}
