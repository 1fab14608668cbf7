//! Syntactic checks shared by the form handlers.

use regex::Regex;
use std::sync::LazyLock;

/// Something before `@`, something after it, a dot, something after the dot.
/// None of the parts may contain whitespace or another `@`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Returns true when `email` looks like an address.
///
/// Purely syntactic: no DNS lookup, no mailbox check. Callers trim the input
/// first; surrounding whitespace makes the check fail.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Why a form submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// A required field was empty after trimming
    #[error("required field missing")]
    MissingRequired,
    /// The email field did not pass [`is_valid_email`]
    #[error("malformed email address")]
    MalformedEmail,
}
