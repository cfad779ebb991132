//! Employee position enumeration.

use super::ParsePositionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role an employee holds within the team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Implements tasks.
    Developer,
    /// Verifies completed work.
    Tester,
    /// Specifies and prioritizes work.
    BusinessAnalyst,
}

impl Position {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Developer => "Developer",
            Self::Tester => "Tester",
            Self::BusinessAnalyst => "Business Analyst",
        }
    }
}

impl TryFrom<&str> for Position {
    type Error = ParsePositionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim();
        if normalized.eq_ignore_ascii_case("developer") {
            Ok(Self::Developer)
        } else if normalized.eq_ignore_ascii_case("tester") {
            Ok(Self::Tester)
        } else if normalized.eq_ignore_ascii_case("business analyst") {
            Ok(Self::BusinessAnalyst)
        } else {
            Err(ParsePositionError(value.to_owned()))
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
