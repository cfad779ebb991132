//! Application services for the employee directory.

mod directory;

pub use directory::{
    EmployeeDirectoryError, EmployeeDirectoryResult, EmployeeDirectoryService,
    RegisterEmployeeRequest,
};
