//! Workflow board for the dashboard.
//!
//! The board renders the task collection as five columns: the four stored
//! workflow states plus a synthetic `Delayed` column derived from deadlines.
//! Drag moves mutate the local cache optimistically and issue a single
//! state-only persistence write. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`] (columns, partitioning, the local cache)
//! - Orchestration services in [`services`]
//!
//! The board owns no ports of its own; it drives the task repository port.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
