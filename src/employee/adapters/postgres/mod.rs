//! `PostgreSQL` adapters for employee persistence.

mod models;
mod repository;
mod schema;

pub use repository::{EmployeePgPool, PostgresEmployeeRepository};
