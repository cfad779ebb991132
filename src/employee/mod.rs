//! Employee directory for the task-tracking dashboard.
//!
//! Employees are registered once and removed by identifier; no edit path
//! exists. Tasks reference employees by identifier, and the delay-notice
//! flow resolves owner email addresses through this context. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
