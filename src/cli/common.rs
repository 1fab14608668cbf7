//! Shared CLI error and exit code types.

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was read but did not validate
    ValidationFailed = 1,
    /// A file could not be read, written or parsed
    IoError = 2,
}

/// Error returned by CLI commands.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CliError {
    /// Exit code the process should terminate with
    pub code: ExitCode,
    /// Human-readable description
    pub message: String,
}

impl CliError {
    /// I/O or parse failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationFailed,
            message: message.into(),
        }
    }

    /// Numeric process exit code.
    pub fn exit_code(&self) -> i32 {
        self.code as i32
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
