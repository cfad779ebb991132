//! Task lifecycle management for the dashboard.
//!
//! Tasks are created from the assignment form or the board's add-card
//! action, edited in full, moved between workflow states by the board, and
//! deleted by identifier. Owners are identifier-based references into the
//! employee directory. The module follows hexagonal architecture:
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
