//! Domain model for the workflow board.
//!
//! The board domain is pure: partitioning and cache bookkeeping are
//! functions of the task collection and a reference date, with persistence
//! left to the service layer.

mod cache;
mod column;
mod error;
mod report;
mod view;

pub use cache::{BoardCache, TaskDelta};
pub use column::BoardColumn;
pub use error::BoardError;
pub use report::{DelayedEntry, delayed_report};
pub use view::BoardView;
