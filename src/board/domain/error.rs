//! Error types for board cache operations.

use super::BoardColumn;
use crate::task::domain::TaskId;
use thiserror::Error;

/// Errors returned by board cache mutations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The `Delayed` column is derived and can never receive a drop.
    #[error("the Delayed column is derived and cannot be a drag destination")]
    DerivedColumnDrop,

    /// The task is not in the cache.
    #[error("unknown task: {0}")]
    UnknownTask(TaskId),

    /// The task is cached but not where the drag gesture claims.
    #[error("task {id} is not in the {column} column")]
    NotInColumn {
        /// Task the gesture referenced.
        id: TaskId,
        /// Column the gesture started from.
        column: BoardColumn,
    },
}
