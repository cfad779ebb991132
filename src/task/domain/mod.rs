//! Domain model for task lifecycle management.
//!
//! The task domain models creation, full-field edits, workflow state, and
//! the delay rule the board derives its synthetic column from, keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskStateError, TaskDomainError};
pub use ids::{TaskDetail, TaskId};
pub use task::{PersistedTaskData, Task, TaskFields, TaskState};
