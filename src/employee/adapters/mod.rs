//! Adapter implementations of the employee ports.

pub mod memory;
pub mod postgres;
