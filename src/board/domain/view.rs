//! Partitioned board view.

use super::BoardColumn;
use crate::task::domain::Task;
use chrono::NaiveDate;

/// Snapshot of the board: one ordered task sequence per column.
///
/// Produced by [`partition`](Self::partition) or by
/// [`BoardCache::view`](super::BoardCache::view); holds clones of the
/// underlying tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    assign: Vec<Task>,
    pending: Vec<Task>,
    tester: Vec<Task>,
    complete: Vec<Task>,
    delayed: Vec<Task>,
}

impl BoardView {
    /// Partitions a task collection into board columns.
    ///
    /// The partition is stable: each column preserves the relative order of
    /// the input, and every task lands in exactly one column. A task goes to
    /// `Delayed` iff its deadline is strictly before `today` and it is not
    /// `Complete`; otherwise it goes to its literal state's column.
    #[must_use]
    pub fn partition(tasks: &[Task], today: NaiveDate) -> Self {
        let mut view = Self::default();
        for task in tasks {
            view.column_mut(BoardColumn::for_task(task, today))
                .push(task.clone());
        }
        view
    }

    pub(crate) fn push(&mut self, column: BoardColumn, task: Task) {
        self.column_mut(column).push(task);
    }

    /// Returns the ordered contents of one column.
    #[must_use]
    pub fn column(&self, column: BoardColumn) -> &[Task] {
        match column {
            BoardColumn::Assign => &self.assign,
            BoardColumn::Pending => &self.pending,
            BoardColumn::Tester => &self.tester,
            BoardColumn::Complete => &self.complete,
            BoardColumn::Delayed => &self.delayed,
        }
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn len(&self) -> usize {
        BoardColumn::ALL
            .iter()
            .map(|column| self.column(*column).len())
            .sum()
    }

    /// Returns whether every column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn column_mut(&mut self, column: BoardColumn) -> &mut Vec<Task> {
        match column {
            BoardColumn::Assign => &mut self.assign,
            BoardColumn::Pending => &mut self.pending,
            BoardColumn::Tester => &mut self.tester,
            BoardColumn::Complete => &mut self.complete,
            BoardColumn::Delayed => &mut self.delayed,
        }
    }
}
