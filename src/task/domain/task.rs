//! Task aggregate root and workflow state.

use super::{ParseTaskStateError, TaskDetail, TaskDomainError, TaskId};
use crate::employee::domain::EmployeeId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task workflow state.
///
/// `Delayed` is deliberately absent: it is a derived board column, never a
/// stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskState {
    /// Task has been handed to an owner but work has not started.
    Assign,
    /// Task is being worked on.
    Pending,
    /// Task is with the tester.
    Tester,
    /// Task is finished.
    Complete,
}

impl TaskState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assign => "Assign",
            Self::Pending => "Pending",
            Self::Tester => "Tester",
            Self::Complete => "Complete",
        }
    }
}

impl TryFrom<&str> for TaskState {
    type Error = ParseTaskStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim();
        if normalized.eq_ignore_ascii_case("assign") {
            Ok(Self::Assign)
        } else if normalized.eq_ignore_ascii_case("pending") {
            Ok(Self::Pending)
        } else if normalized.eq_ignore_ascii_case("tester") {
            Ok(Self::Tester)
        } else if normalized.eq_ignore_ascii_case("complete") {
            Ok(Self::Complete)
        } else {
            Err(ParseTaskStateError(value.to_owned()))
        }
    }
}

/// Full field set of a task, used for creation and whole-record edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    /// Free-text description.
    pub detail: TaskDetail,
    /// Owning employee.
    pub owner: EmployeeId,
    /// Date the task was created.
    pub created_on: NaiveDate,
    /// Date the task is due.
    pub dead_line: NaiveDate,
    /// Workflow state.
    pub state: TaskState,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    detail: TaskDetail,
    owner: EmployeeId,
    created_on: NaiveDate,
    dead_line: NaiveDate,
    state: TaskState,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted description.
    pub detail: TaskDetail,
    /// Persisted owning employee.
    pub owner: EmployeeId,
    /// Persisted creation date.
    pub created_on: NaiveDate,
    /// Persisted deadline.
    pub dead_line: NaiveDate,
    /// Persisted workflow state.
    pub state: TaskState,
}

impl Task {
    /// Creates a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DeadlineBeforeCreation`] when the deadline
    /// precedes the creation date.
    pub fn new(fields: TaskFields) -> Result<Self, TaskDomainError> {
        check_dates(fields.created_on, fields.dead_line)?;
        Ok(Self {
            id: TaskId::new(),
            detail: fields.detail,
            owner: fields.owner,
            created_on: fields.created_on,
            dead_line: fields.dead_line,
            state: fields.state,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            detail: data.detail,
            owner: data.owner,
            created_on: data.created_on,
            dead_line: data.dead_line,
            state: data.state,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the description.
    #[must_use]
    pub const fn detail(&self) -> &TaskDetail {
        &self.detail
    }

    /// Returns the owning employee identifier.
    #[must_use]
    pub const fn owner(&self) -> EmployeeId {
        self.owner
    }

    /// Returns the creation date.
    #[must_use]
    pub const fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn dead_line(&self) -> NaiveDate {
        self.dead_line
    }

    /// Returns the workflow state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    /// Returns whether the task is past its deadline and still open.
    ///
    /// Completed tasks are never delayed, whatever their deadline.
    #[must_use]
    pub fn is_delayed(&self, today: NaiveDate) -> bool {
        self.dead_line < today && self.state != TaskState::Complete
    }

    /// Sets the workflow state.
    ///
    /// Used by the board's drag moves, which change only this field.
    pub const fn set_state(&mut self, state: TaskState) {
        self.state = state;
    }

    /// Replaces every editable field, as the full-record edit form does.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DeadlineBeforeCreation`] when the new
    /// deadline precedes the new creation date; the task is unchanged on
    /// error.
    pub fn apply_edit(&mut self, fields: TaskFields) -> Result<(), TaskDomainError> {
        check_dates(fields.created_on, fields.dead_line)?;
        self.detail = fields.detail;
        self.owner = fields.owner;
        self.created_on = fields.created_on;
        self.dead_line = fields.dead_line;
        self.state = fields.state;
        Ok(())
    }
}

fn check_dates(created_on: NaiveDate, dead_line: NaiveDate) -> Result<(), TaskDomainError> {
    if dead_line < created_on {
        return Err(TaskDomainError::DeadlineBeforeCreation {
            created_on,
            dead_line,
        });
    }
    Ok(())
}
