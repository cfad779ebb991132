//! Board column enumeration.

use crate::task::domain::{Task, TaskState};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column of the workflow board.
///
/// Four columns mirror the stored workflow states; `Delayed` is derived
/// from deadlines and never stored, so it can be a drag source but not a
/// drag destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardColumn {
    /// Tasks in the `Assign` state.
    Assign,
    /// Tasks in the `Pending` state.
    Pending,
    /// Tasks in the `Tester` state.
    Tester,
    /// Tasks in the `Complete` state.
    Complete,
    /// Overdue, incomplete tasks, whatever their stored state.
    Delayed,
}

impl BoardColumn {
    /// All columns in display order.
    pub const ALL: [Self; 5] = [
        Self::Assign,
        Self::Pending,
        Self::Complete,
        Self::Tester,
        Self::Delayed,
    ];

    /// Returns the column header label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assign => "Assign",
            Self::Pending => "Pending",
            Self::Tester => "Tester",
            Self::Complete => "Complete",
            Self::Delayed => "Delayed",
        }
    }

    /// Returns the column mirroring a stored workflow state.
    #[must_use]
    pub const fn from_state(state: TaskState) -> Self {
        match state {
            TaskState::Assign => Self::Assign,
            TaskState::Pending => Self::Pending,
            TaskState::Tester => Self::Tester,
            TaskState::Complete => Self::Complete,
        }
    }

    /// Returns the workflow state this column stores, or `None` for the
    /// derived `Delayed` column.
    #[must_use]
    pub const fn storage_state(self) -> Option<TaskState> {
        match self {
            Self::Assign => Some(TaskState::Assign),
            Self::Pending => Some(TaskState::Pending),
            Self::Tester => Some(TaskState::Tester),
            Self::Complete => Some(TaskState::Complete),
            Self::Delayed => None,
        }
    }

    /// Returns whether cards may be dropped onto this column.
    #[must_use]
    pub const fn is_drop_target(self) -> bool {
        self.storage_state().is_some()
    }

    /// Returns the column a task belongs to on the given date.
    ///
    /// A task is `Delayed` iff its deadline has passed and it is not
    /// `Complete`; otherwise it sits in its literal state's column.
    #[must_use]
    pub fn for_task(task: &Task, today: NaiveDate) -> Self {
        if task.is_delayed(today) {
            Self::Delayed
        } else {
            Self::from_state(task.state())
        }
    }
}

impl fmt::Display for BoardColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
