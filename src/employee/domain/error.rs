//! Error types for employee domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain employee values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmployeeDomainError {
    /// The given name is empty after trimming.
    #[error("employee name must not be empty")]
    EmptyName,

    /// The surname is empty after trimming.
    #[error("employee surname must not be empty")]
    EmptySurname,

    /// The email address is not structurally valid.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The phone number is empty after trimming.
    #[error("employee phone must not be empty")]
    EmptyPhone,

    /// The citizen identifier is empty after trimming.
    #[error("employee citizen id must not be empty")]
    EmptyCitizenId,

    /// The position value is not one of the known positions.
    #[error(transparent)]
    UnknownPosition(#[from] ParsePositionError),
}

/// Error returned while parsing positions from persistence or form input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown position: {0}")]
pub struct ParsePositionError(pub String);
