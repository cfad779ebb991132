//! Notice value delivered to a recipient.

use crate::employee::domain::EmailAddress;
use serde::{Deserialize, Serialize};

/// A rendered message addressed to one recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    recipient_name: String,
    recipient_email: EmailAddress,
    message: String,
}

impl Notice {
    /// Creates a notice from an already-rendered message.
    #[must_use]
    pub fn new(
        recipient_name: impl Into<String>,
        recipient_email: EmailAddress,
        message: impl Into<String>,
    ) -> Self {
        Self {
            recipient_name: recipient_name.into(),
            recipient_email,
            message: message.into(),
        }
    }

    /// Returns the recipient's display name.
    #[must_use]
    pub fn recipient_name(&self) -> &str {
        &self.recipient_name
    }

    /// Returns the recipient's email address.
    #[must_use]
    pub const fn recipient_email(&self) -> &EmailAddress {
        &self.recipient_email
    }

    /// Returns the rendered message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
