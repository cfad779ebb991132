//! Service layer for task creation, editing, and removal.

use crate::employee::{
    domain::EmployeeId,
    ports::{EmployeeRepository, EmployeeRepositoryError},
};
use crate::task::{
    domain::{Task, TaskDetail, TaskDomainError, TaskFields, TaskId, TaskState},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
///
/// `created_on` defaults to the current date when unset, as the assignment
/// form pre-fills it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    detail: String,
    owner: EmployeeId,
    created_on: Option<NaiveDate>,
    dead_line: NaiveDate,
    state: TaskState,
}

impl CreateTaskRequest {
    /// Creates a request with required fields.
    #[must_use]
    pub fn new(
        detail: impl Into<String>,
        owner: EmployeeId,
        dead_line: NaiveDate,
        state: TaskState,
    ) -> Self {
        Self {
            detail: detail.into(),
            owner,
            created_on: None,
            dead_line,
            state,
        }
    }

    /// Sets an explicit creation date.
    #[must_use]
    pub const fn with_created_on(mut self, created_on: NaiveDate) -> Self {
        self.created_on = Some(created_on);
        self
    }
}

/// Request payload for a whole-record task edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskRequest {
    id: TaskId,
    detail: String,
    owner: EmployeeId,
    created_on: NaiveDate,
    dead_line: NaiveDate,
    state: TaskState,
}

impl EditTaskRequest {
    /// Creates an edit request carrying every editable field.
    #[must_use]
    pub fn new(
        id: TaskId,
        detail: impl Into<String>,
        owner: EmployeeId,
        created_on: NaiveDate,
        dead_line: NaiveDate,
        state: TaskState,
    ) -> Self {
        Self {
            id,
            detail: detail.into(),
            owner,
            created_on,
            dead_line,
            state,
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Employee repository lookup failed.
    #[error(transparent)]
    Employees(#[from] EmployeeRepositoryError),
    /// The requested owner is not in the employee directory.
    #[error("unknown task owner: {0}")]
    UnknownOwner(EmployeeId),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, E, C>
where
    R: TaskRepository,
    E: EmployeeRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    employees: Arc<E>,
    clock: Arc<C>,
}

impl<R, E, C> TaskLifecycleService<R, E, C>
where
    R: TaskRepository,
    E: EmployeeRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(tasks: Arc<R>, employees: Arc<E>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            employees,
            clock,
        }
    }

    /// Creates a new task from form input.
    ///
    /// The owner must already exist in the employee directory; tasks carry
    /// identifier-based owner references, never free-text names.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::UnknownOwner`] when the owner is not
    /// registered, [`TaskLifecycleError::Domain`] when field validation
    /// fails, and [`TaskLifecycleError::Repository`] when persistence is
    /// rejected.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        self.check_owner(request.owner).await?;

        let detail = TaskDetail::new(request.detail)?;
        let created_on = request
            .created_on
            .unwrap_or_else(|| self.clock.utc().date_naive());
        let task = Task::new(TaskFields {
            detail,
            owner: request.owner,
            created_on,
            dead_line: request.dead_line,
            state: request.state,
        })?;
        self.tasks.store(&task).await?;
        Ok(task)
    }

    /// Applies a whole-record edit and persists the full update.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the task does not exist, and
    /// the same owner/validation errors as [`create`](Self::create).
    pub async fn edit(&self, request: EditTaskRequest) -> TaskLifecycleResult<Task> {
        self.check_owner(request.owner).await?;

        let mut task = self
            .tasks
            .find_by_id(request.id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(request.id))?;
        let detail = TaskDetail::new(request.detail)?;
        task.apply_edit(TaskFields {
            detail,
            owner: request.owner,
            created_on: request.created_on,
            dead_line: request.dead_line,
            state: request.state,
        })?;
        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Removes a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the task does not
    /// exist or the delete fails.
    pub async fn remove(&self, id: TaskId) -> TaskLifecycleResult<()> {
        Ok(self.tasks.delete(id).await?)
    }

    /// Returns a full snapshot of all tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the snapshot fetch
    /// fails.
    pub async fn list(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.tasks.list_all().await?)
    }

    /// Returns the snapshot filtered to one owner, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the snapshot fetch
    /// fails.
    pub async fn list_by_owner(&self, owner: EmployeeId) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self.tasks.list_all().await?;
        Ok(tasks
            .into_iter()
            .filter(|task| task.owner() == owner)
            .collect())
    }

    async fn check_owner(&self, owner: EmployeeId) -> TaskLifecycleResult<()> {
        let found = self.employees.find_by_id(owner).await?;
        if found.is_none() {
            return Err(TaskLifecycleError::UnknownOwner(owner));
        }
        Ok(())
    }
}
