//! Delay notices to task owners.
//!
//! A notice resolves the owner's email through the employee directory,
//! renders a templated message, and hands it to a transactional-email
//! gateway. Sends are best-effort: single attempt, no retry, failure
//! surfaced to the caller. The module follows hexagonal architecture:
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
