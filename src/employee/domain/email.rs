//! Validated email address type.

use super::EmployeeDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated email address used as a notice recipient.
///
/// Validation is structural only: one `@` with non-empty local and domain
/// parts and no embedded whitespace. Deliverability is the notifier's
/// problem, not the domain's.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// The input is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeDomainError::InvalidEmail`] when the value does not
    /// contain exactly one `@` separating non-empty, whitespace-free parts.
    pub fn new(value: impl Into<String>) -> Result<Self, EmployeeDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        let mut parts = normalized.split('@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        let has_more_parts = parts.next().is_some();
        let is_valid = !local.is_empty()
            && !domain.is_empty()
            && !has_more_parts
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(EmployeeDomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
