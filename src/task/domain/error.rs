//! Error types for task domain validation and parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task detail is empty after trimming.
    #[error("task detail must not be empty")]
    EmptyDetail,

    /// The deadline precedes the creation date.
    #[error("dead line {dead_line} precedes creation date {created_on}")]
    DeadlineBeforeCreation {
        /// Creation date supplied with the task.
        created_on: NaiveDate,
        /// Offending deadline.
        dead_line: NaiveDate,
    },
}

/// Error returned while parsing task states from persistence.
///
/// A stored state outside the four workflow values is a data-integrity
/// fault; it is reported loudly rather than dropping the task from every
/// board column.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task state: {0}")]
pub struct ParseTaskStateError(pub String);
