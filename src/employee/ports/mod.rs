//! Port contracts for the employee directory.
//!
//! Ports define infrastructure-agnostic interfaces used by employee
//! services.

pub mod repository;

pub use repository::{EmployeeRepository, EmployeeRepositoryError, EmployeeRepositoryResult};
