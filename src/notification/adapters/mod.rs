//! Adapter implementations of the notifier port.

pub mod emailjs;
pub mod memory;
