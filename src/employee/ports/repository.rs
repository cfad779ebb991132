//! Repository port for employee persistence and lookup.

use crate::employee::domain::{Employee, EmployeeId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for employee repository operations.
pub type EmployeeRepositoryResult<T> = Result<T, EmployeeRepositoryError>;

/// Employee persistence contract.
///
/// The backing store assigns no ordering semantics beyond what each adapter
/// documents for [`list_all`](EmployeeRepository::list_all). All operations
/// are single-attempt; callers surface failures and do not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Stores a new employee.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeRepositoryError::DuplicateEmployee`] when the
    /// employee ID already exists.
    async fn store(&self, employee: &Employee) -> EmployeeRepositoryResult<()>;

    /// Finds an employee by identifier.
    ///
    /// Returns `None` when the employee does not exist.
    async fn find_by_id(&self, id: EmployeeId) -> EmployeeRepositoryResult<Option<Employee>>;

    /// Finds the first employee whose given name equals `name` exactly.
    ///
    /// This is the one store-side equality lookup the dashboard performs;
    /// when several employees share a name the first match wins.
    async fn find_by_name(&self, name: &str) -> EmployeeRepositoryResult<Option<Employee>>;

    /// Returns a full-collection snapshot of all employees.
    async fn list_all(&self) -> EmployeeRepositoryResult<Vec<Employee>>;

    /// Deletes an employee by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeRepositoryError::NotFound`] when the employee does
    /// not exist.
    async fn delete(&self, id: EmployeeId) -> EmployeeRepositoryResult<()>;
}

/// Errors returned by employee repository implementations.
#[derive(Debug, Clone, Error)]
pub enum EmployeeRepositoryError {
    /// An employee with the same identifier already exists.
    #[error("duplicate employee identifier: {0}")]
    DuplicateEmployee(EmployeeId),

    /// The employee was not found.
    #[error("employee not found: {0}")]
    NotFound(EmployeeId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl EmployeeRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
