//! Port contracts for notice delivery.

pub mod notifier;

pub use notifier::{Notifier, NotifierError, NotifierResult};
