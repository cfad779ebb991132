//! Local board cache with optimistic mutations.

use super::{BoardColumn, BoardError, BoardView};
use crate::task::domain::{Task, TaskId, TaskState};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Local mutation applied to the cache ahead of a remote write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDelta {
    /// Inserts a new task or replaces a cached record wholesale.
    Upsert(Task),
    /// Removes a task.
    Remove(TaskId),
    /// Changes only the workflow state, as a drag move does.
    SetState {
        /// Task to mutate.
        id: TaskId,
        /// New workflow state.
        state: TaskState,
    },
}

/// View-local cache of the task collection.
///
/// The remote store is the sole source of truth; this container holds the
/// snapshot fetched at view mount, mutated optimistically on each write.
/// Column membership is explicit rather than re-derived, so a card dragged
/// out of `Delayed` stays where the user dropped it even while its deadline
/// remains in the past. Tasks whose optimistic write failed are marked
/// unsynced until [`reconcile`](Self::reconcile) replaces the cache with a
/// fresh remote snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCache {
    tasks: HashMap<TaskId, Task>,
    order: Vec<TaskId>,
    columns: ColumnLayout,
    unsynced: Vec<TaskId>,
    today: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ColumnLayout {
    assign: Vec<TaskId>,
    pending: Vec<TaskId>,
    tester: Vec<TaskId>,
    complete: Vec<TaskId>,
    delayed: Vec<TaskId>,
}

impl ColumnLayout {
    fn column(&self, column: BoardColumn) -> &Vec<TaskId> {
        match column {
            BoardColumn::Assign => &self.assign,
            BoardColumn::Pending => &self.pending,
            BoardColumn::Tester => &self.tester,
            BoardColumn::Complete => &self.complete,
            BoardColumn::Delayed => &self.delayed,
        }
    }

    fn column_mut(&mut self, column: BoardColumn) -> &mut Vec<TaskId> {
        match column {
            BoardColumn::Assign => &mut self.assign,
            BoardColumn::Pending => &mut self.pending,
            BoardColumn::Tester => &mut self.tester,
            BoardColumn::Complete => &mut self.complete,
            BoardColumn::Delayed => &mut self.delayed,
        }
    }

    fn remove_everywhere(&mut self, id: TaskId) {
        for column in BoardColumn::ALL {
            self.column_mut(column).retain(|known| *known != id);
        }
    }

    fn position_of(&self, id: TaskId) -> Option<BoardColumn> {
        BoardColumn::ALL
            .into_iter()
            .find(|column| self.column(*column).contains(&id))
    }
}

impl BoardCache {
    /// Builds a cache from a remote snapshot, partitioning it against the
    /// given reference date.
    #[must_use]
    pub fn load(snapshot: Vec<Task>, today: NaiveDate) -> Self {
        let mut cache = Self {
            tasks: HashMap::new(),
            order: Vec::new(),
            columns: ColumnLayout::default(),
            unsynced: Vec::new(),
            today,
        };
        for task in snapshot {
            cache.insert(task);
        }
        cache
    }

    /// Replaces the cache contents with a fresh remote snapshot, clearing
    /// unsynced marks.
    ///
    /// Calling this after a failed write closes the divergence an
    /// optimistic mutation left behind.
    pub fn reconcile(&mut self, snapshot: Vec<Task>, today: NaiveDate) {
        *self = Self::load(snapshot, today);
    }

    /// Applies an optimistic local mutation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownTask`] when a state change targets a
    /// task that is not cached.
    pub fn apply_local_mutation(&mut self, delta: TaskDelta) -> Result<(), BoardError> {
        match delta {
            TaskDelta::Upsert(task) => {
                if self.tasks.contains_key(&task.id()) {
                    self.replace(task);
                } else {
                    self.insert(task);
                }
                Ok(())
            }
            TaskDelta::Remove(id) => {
                self.tasks.remove(&id);
                self.order.retain(|known| *known != id);
                self.columns.remove_everywhere(id);
                self.unsynced.retain(|known| *known != id);
                Ok(())
            }
            TaskDelta::SetState { id, state } => {
                let current = self
                    .columns
                    .position_of(id)
                    .ok_or(BoardError::UnknownTask(id))?;
                self.move_between(current, BoardColumn::from_state(state), id)
                    .map(|_| ())
            }
        }
    }

    /// Moves a task between columns, appending it to the destination.
    ///
    /// Drop position within a column is not preserved: cards always land at
    /// the end. The cached record's state becomes the destination's storage
    /// state. The cache is unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DerivedColumnDrop`] when `destination` is the
    /// derived `Delayed` column, [`BoardError::UnknownTask`] when the task
    /// is not cached, and [`BoardError::NotInColumn`] when it is cached but
    /// not in `source`.
    pub fn move_between(
        &mut self,
        source: BoardColumn,
        destination: BoardColumn,
        id: TaskId,
    ) -> Result<TaskState, BoardError> {
        let new_state = destination
            .storage_state()
            .ok_or(BoardError::DerivedColumnDrop)?;
        let task = self.tasks.get_mut(&id).ok_or(BoardError::UnknownTask(id))?;
        if !self.columns.column(source).contains(&id) {
            return Err(BoardError::NotInColumn { id, column: source });
        }

        task.set_state(new_state);
        if source != destination {
            self.columns.column_mut(source).retain(|known| *known != id);
            self.columns.column_mut(destination).push(id);
        }
        Ok(new_state)
    }

    /// Marks a task as diverged from the store after a failed write.
    pub fn mark_unsynced(&mut self, id: TaskId) {
        if !self.unsynced.contains(&id) {
            self.unsynced.push(id);
        }
    }

    /// Returns the tasks whose optimistic writes failed, oldest first.
    #[must_use]
    pub fn unsynced(&self) -> &[TaskId] {
        &self.unsynced
    }

    /// Returns a cached task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Returns all cached tasks in snapshot order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.order
            .iter()
            .filter_map(|id| self.tasks.get(id))
            .cloned()
            .collect()
    }

    /// Returns the reference date the cache was loaded against.
    #[must_use]
    pub const fn reference_date(&self) -> NaiveDate {
        self.today
    }

    /// Renders the cached column layout as a board view.
    #[must_use]
    pub fn view(&self) -> BoardView {
        let mut view = BoardView::default();
        for column in BoardColumn::ALL {
            for id in self.columns.column(column) {
                if let Some(task) = self.tasks.get(id) {
                    view.push(column, task.clone());
                }
            }
        }
        view
    }

    fn insert(&mut self, task: Task) {
        let column = BoardColumn::for_task(&task, self.today);
        self.order.push(task.id());
        self.columns.column_mut(column).push(task.id());
        self.tasks.insert(task.id(), task);
    }

    /// Replaces a cached record, re-homing it when its column changed.
    fn replace(&mut self, task: Task) {
        let new_column = BoardColumn::for_task(&task, self.today);
        let old_column = self.columns.position_of(task.id());
        if old_column != Some(new_column) {
            self.columns.remove_everywhere(task.id());
            self.columns.column_mut(new_column).push(task.id());
        }
        self.tasks.insert(task.id(), task);
    }
}
