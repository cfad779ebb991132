//! Service layer for board loading and drag moves.

use crate::board::domain::{BoardCache, BoardColumn, BoardError, BoardView, DelayedEntry};
use crate::task::{
    domain::{TaskId, TaskState},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardSyncError {
    /// The gesture was invalid against the cached board.
    #[error(transparent)]
    Board(#[from] BoardError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for board service operations.
pub type BoardSyncResult<T> = Result<T, BoardSyncError>;

/// Result of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The card moved; carries the state that was persisted.
    Moved(TaskState),
    /// Source and destination were the same column; nothing happened and
    /// no persistence call was issued.
    Noop,
}

/// Board orchestration service.
///
/// Owns the view-local [`BoardCache`] and drives the task repository.
/// Writes are optimistic: the cache mutates first, then a single
/// state-only update is issued. On write failure the local mutation
/// stands, the task is marked unsynced, and the repository error is
/// surfaced; [`reconcile`](Self::reconcile) restores the store's view.
pub struct BoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    cache: BoardCache,
}

impl<R, C> BoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a board service with an empty cache.
    ///
    /// Call [`load`](Self::load) before rendering.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        let today = clock.utc().date_naive();
        Self {
            repository,
            clock,
            cache: BoardCache::load(Vec::new(), today),
        }
    }

    /// Fetches the full task snapshot and rebuilds the cache, as a view
    /// mount does.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSyncError::Repository`] when the snapshot fetch
    /// fails; the previous cache contents are kept.
    pub async fn load(&mut self) -> BoardSyncResult<()> {
        let snapshot = self.repository.list_all().await?;
        let today = self.clock.utc().date_naive();
        self.cache = BoardCache::load(snapshot, today);
        Ok(())
    }

    /// Re-fetches the snapshot to clear any optimistic divergence.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSyncError::Repository`] when the snapshot fetch
    /// fails.
    pub async fn reconcile(&mut self) -> BoardSyncResult<()> {
        let snapshot = self.repository.list_all().await?;
        let today = self.clock.utc().date_naive();
        self.cache.reconcile(snapshot, today);
        Ok(())
    }

    /// Applies a drag gesture: source column, destination column, task.
    ///
    /// Same-column drops are detected and skipped so no redundant
    /// persistence call is issued and no column gains a duplicate card.
    /// Otherwise the cache mutates optimistically and exactly one
    /// state-only update is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSyncError::Board`] when the gesture is invalid (the
    /// derived `Delayed` destination, an unknown task, or a stale source
    /// column); the cache is unchanged. Returns
    /// [`BoardSyncError::Repository`] when persistence fails; the cache
    /// keeps the optimistic mutation and the task is marked unsynced.
    pub async fn move_card(
        &mut self,
        source: BoardColumn,
        destination: BoardColumn,
        id: TaskId,
    ) -> BoardSyncResult<MoveOutcome> {
        if source == destination {
            return Ok(MoveOutcome::Noop);
        }

        let new_state = self.cache.move_between(source, destination, id)?;
        match self.repository.update_state(id, new_state).await {
            Ok(()) => Ok(MoveOutcome::Moved(new_state)),
            Err(err) => {
                self.cache.mark_unsynced(id);
                Err(BoardSyncError::Repository(err))
            }
        }
    }

    /// Renders the cached board.
    #[must_use]
    pub fn view(&self) -> BoardView {
        self.cache.view()
    }

    /// Lists the cached tasks that are past their deadline, with day
    /// counts.
    #[must_use]
    pub fn delayed(&self) -> Vec<DelayedEntry> {
        crate::board::domain::delayed_report(&self.cache.tasks(), self.cache.reference_date())
    }

    /// Returns the underlying cache.
    #[must_use]
    pub const fn cache(&self) -> &BoardCache {
        &self.cache
    }
}
