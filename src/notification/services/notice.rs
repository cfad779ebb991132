//! Service layer for composing and sending delay notices.

use minijinja::Environment;
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;

use crate::employee::{
    domain::EmployeeId,
    ports::{EmployeeRepository, EmployeeRepositoryError},
};
use crate::notification::{
    domain::Notice,
    ports::{Notifier, NotifierError},
};
use crate::task::domain::Task;

/// Message template for delay notices.
const DELAY_TEMPLATE: &str = "{{ detail }} is delayed.";

/// Service-level errors for notice operations.
#[derive(Debug, Error)]
pub enum NoticeError {
    /// The task's owner is not in the employee directory.
    ///
    /// Reported before any send attempt.
    #[error("notice recipient not found: {0}")]
    RecipientNotFound(EmployeeId),

    /// The message template failed to render.
    #[error("failed to render notice template: {reason}")]
    TemplateRender {
        /// Renderer diagnostic.
        reason: String,
    },

    /// Owner lookup failed.
    #[error(transparent)]
    Employees(#[from] EmployeeRepositoryError),

    /// Notice delivery failed.
    #[error(transparent)]
    Send(#[from] NotifierError),
}

/// Result type for notice service operations.
pub type NoticeResult<T> = Result<T, NoticeError>;

/// Delay-notice orchestration service.
#[derive(Clone)]
pub struct NoticeService<E, N>
where
    E: EmployeeRepository,
    N: Notifier,
{
    employees: Arc<E>,
    notifier: Arc<N>,
}

impl<E, N> NoticeService<E, N>
where
    E: EmployeeRepository,
    N: Notifier,
{
    /// Creates a new notice service.
    #[must_use]
    pub const fn new(employees: Arc<E>, notifier: Arc<N>) -> Self {
        Self {
            employees,
            notifier,
        }
    }

    /// Sends a delay notice for one task to its owner.
    ///
    /// The owner's address is resolved through the employee directory
    /// before anything else; an unknown owner aborts the operation without
    /// a send attempt. Returns the notice that was delivered.
    ///
    /// # Errors
    ///
    /// Returns [`NoticeError::RecipientNotFound`] when the owner is not
    /// registered, [`NoticeError::TemplateRender`] when the message cannot
    /// be rendered, and [`NoticeError::Send`] when the gateway rejects the
    /// delivery.
    pub async fn notify_delay(&self, task: &Task) -> NoticeResult<Notice> {
        let owner = self
            .employees
            .find_by_id(task.owner())
            .await?
            .ok_or(NoticeError::RecipientNotFound(task.owner()))?;

        let message = render_delay_message(task.detail().as_str())?;
        let notice = Notice::new(owner.name(), owner.email().clone(), message);
        self.notifier.send(&notice).await?;
        Ok(notice)
    }
}

fn render_delay_message(detail: &str) -> NoticeResult<String> {
    let environment = Environment::new();
    let mut context = Map::new();
    context.insert("detail".to_owned(), Value::String(detail.to_owned()));
    environment
        .render_str(DELAY_TEMPLATE, context)
        .map_err(|error| NoticeError::TemplateRender {
            reason: error.to_string(),
        })
}
