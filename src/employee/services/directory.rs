//! Service layer for employee registration and lookup.

use crate::employee::{
    domain::{Employee, EmployeeDomainError, EmployeeId, NewEmployeeData, Position},
    ports::{EmployeeRepository, EmployeeRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterEmployeeRequest {
    name: String,
    surname: String,
    email: String,
    phone: String,
    citizen_id: String,
    position: String,
}

impl RegisterEmployeeRequest {
    /// Creates a request from raw form fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        citizen_id: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
            phone: phone.into(),
            citizen_id: citizen_id.into(),
            position: position.into(),
        }
    }
}

/// Service-level errors for employee directory operations.
#[derive(Debug, Error)]
pub enum EmployeeDirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] EmployeeDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] EmployeeRepositoryError),
}

/// Result type for employee directory service operations.
pub type EmployeeDirectoryResult<T> = Result<T, EmployeeDirectoryError>;

/// Employee directory orchestration service.
#[derive(Clone)]
pub struct EmployeeDirectoryService<R>
where
    R: EmployeeRepository,
{
    repository: Arc<R>,
}

impl<R> EmployeeDirectoryService<R>
where
    R: EmployeeRepository,
{
    /// Creates a new employee directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a new employee from form input.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeDirectoryError::Domain`] when field validation
    /// fails (including an unknown position string) and
    /// [`EmployeeDirectoryError::Repository`] when persistence is rejected.
    pub async fn register(
        &self,
        request: RegisterEmployeeRequest,
    ) -> EmployeeDirectoryResult<Employee> {
        let position = Position::try_from(request.position.as_str())
            .map_err(EmployeeDomainError::UnknownPosition)?;
        let employee = Employee::new(NewEmployeeData {
            name: request.name,
            surname: request.surname,
            email: request.email,
            phone: request.phone,
            citizen_id: request.citizen_id,
            position,
        })?;
        self.repository.store(&employee).await?;
        Ok(employee)
    }

    /// Returns a full snapshot of the directory.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeDirectoryError::Repository`] when the snapshot
    /// fetch fails.
    pub async fn list(&self) -> EmployeeDirectoryResult<Vec<Employee>> {
        Ok(self.repository.list_all().await?)
    }

    /// Finds the first employee with the given name.
    ///
    /// Returns `Ok(None)` when no employee matches.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeDirectoryError::Repository`] when the lookup fails.
    pub async fn find_by_name(&self, name: &str) -> EmployeeDirectoryResult<Option<Employee>> {
        Ok(self.repository.find_by_name(name).await?)
    }

    /// Removes an employee by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeDirectoryError::Repository`] when the employee does
    /// not exist or the delete fails.
    pub async fn remove(&self, id: EmployeeId) -> EmployeeDirectoryResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
