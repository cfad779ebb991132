//! Domain model for the employee directory.
//!
//! The employee domain models registration and lookup of the people tasks
//! are assigned to, keeping all infrastructure concerns outside of the
//! domain boundary.

mod email;
mod employee;
mod error;
mod ids;
mod position;

pub use email::EmailAddress;
pub use employee::{Employee, NewEmployeeData, PersistedEmployeeData};
pub use error::{EmployeeDomainError, ParsePositionError};
pub use ids::EmployeeId;
pub use position::Position;
