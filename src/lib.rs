//! Taskboard: task-tracking dashboard core.
//!
//! This crate provides the domain model and synchronization logic behind a
//! small task-tracking dashboard: an employee directory, task lifecycle
//! management, a five-column workflow board with drag-and-drop moves, and
//! delay notices delivered to task owners.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//!
//! # Modules
//!
//! - [`employee`]: Employee directory (register, look up, remove)
//! - [`task`]: Task aggregate and lifecycle operations
//! - [`board`]: Board partitioning, drag moves, and cache synchronization
//! - [`notification`]: Delay notices to task owners

pub mod board;
pub mod employee;
pub mod notification;
pub mod task;
