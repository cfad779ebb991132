//! Employee aggregate root.

use super::{EmailAddress, EmployeeDomainError, EmployeeId, Position};
use serde::{Deserialize, Serialize};

/// Employee record in the directory.
///
/// Employees are immutable once registered: the dashboard offers creation
/// and deletion, never in-place edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    surname: String,
    email: EmailAddress,
    phone: String,
    citizen_id: String,
    position: Position,
}

/// Parameter object for registering a new employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployeeData {
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Contact email address, used for delay notices.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// National identifier.
    pub citizen_id: String,
    /// Team role.
    pub position: Position,
}

/// Parameter object for reconstructing a persisted employee record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedEmployeeData {
    /// Persisted employee identifier.
    pub id: EmployeeId,
    /// Persisted given name.
    pub name: String,
    /// Persisted family name.
    pub surname: String,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted phone number.
    pub phone: String,
    /// Persisted national identifier.
    pub citizen_id: String,
    /// Persisted team role.
    pub position: Position,
}

impl Employee {
    /// Creates a new employee from registration data.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeDomainError`] when any field fails validation:
    /// empty name, surname, phone, or citizen id, or a structurally invalid
    /// email address.
    pub fn new(data: NewEmployeeData) -> Result<Self, EmployeeDomainError> {
        let name = non_empty(data.name, EmployeeDomainError::EmptyName)?;
        let surname = non_empty(data.surname, EmployeeDomainError::EmptySurname)?;
        let email = EmailAddress::new(data.email)?;
        let phone = non_empty(data.phone, EmployeeDomainError::EmptyPhone)?;
        let citizen_id = non_empty(data.citizen_id, EmployeeDomainError::EmptyCitizenId)?;

        Ok(Self {
            id: EmployeeId::new(),
            name,
            surname,
            email,
            phone,
            citizen_id,
            position: data.position,
        })
    }

    /// Reconstructs an employee from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedEmployeeData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            surname: data.surname,
            email: data.email,
            phone: data.phone,
            citizen_id: data.citizen_id,
            position: data.position,
        }
    }

    /// Returns the employee identifier.
    #[must_use]
    pub const fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the given name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the family name.
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Returns the contact email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the contact phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the national identifier.
    #[must_use]
    pub fn citizen_id(&self) -> &str {
        &self.citizen_id
    }

    /// Returns the team role.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }
}

/// Trims a field and rejects empty values with the given error.
fn non_empty(value: String, empty_error: EmployeeDomainError) -> Result<String, EmployeeDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(empty_error);
    }
    Ok(trimmed.to_owned())
}
