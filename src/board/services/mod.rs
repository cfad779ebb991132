//! Application services for board synchronization.

mod drag;

pub use drag::{BoardService, BoardSyncError, BoardSyncResult, MoveOutcome};
