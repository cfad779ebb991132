//! Integration tests for board partitioning and drag moves against a live
//! in-memory store.

use eyre::ensure;
use rstest::rstest;
use taskboard::board::{
    domain::{BoardColumn, BoardError},
    services::{BoardSyncError, MoveOutcome},
};
use taskboard::task::{
    domain::{Task, TaskId, TaskState},
    ports::TaskRepository,
};

use super::helpers::{
    create_open_task, create_overdue_task, date, register, stores, Stores,
};

/// Asserts a column holds exactly one card and returns its identifier.
///
/// # Errors
///
/// Returns an error if the column does not contain exactly one card.
fn single_card(column: &[Task]) -> Result<TaskId, eyre::Report> {
    ensure!(
        column.len() == 1,
        "expected exactly one card, found {}",
        column.len()
    );
    column
        .first()
        .map(Task::id)
        .ok_or_else(|| eyre::eyre!("expected a card"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn load_partitions_overdue_open_tasks_into_delayed(
    stores: Stores,
) -> Result<(), eyre::Report> {
    let directory = stores.directory();
    let lifecycle = stores.lifecycle();
    let owner = register(&directory, "Ada", "Lovelace", "ada@example.com").await?;

    let fresh = create_open_task(&lifecycle, &owner, "Fresh work", TaskState::Assign).await?;
    let late = create_overdue_task(&lifecycle, &owner, "Late work", TaskState::Pending).await?;
    let shipped = create_overdue_task(&lifecycle, &owner, "Shipped", TaskState::Complete).await?;

    let mut board = stores.board();
    board.load().await?;
    let view = board.view();

    assert_eq!(single_card(view.column(BoardColumn::Assign))?, fresh.id());
    assert_eq!(single_card(view.column(BoardColumn::Delayed))?, late.id());
    // A completed task never counts as delayed, however old its deadline.
    assert_eq!(single_card(view.column(BoardColumn::Complete))?, shipped.id());
    assert!(view.column(BoardColumn::Pending).is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn move_card_persists_the_new_state_to_the_store(stores: Stores) -> Result<(), eyre::Report> {
    let directory = stores.directory();
    let lifecycle = stores.lifecycle();
    let owner = register(&directory, "Ada", "Lovelace", "ada@example.com").await?;
    let task = create_open_task(&lifecycle, &owner, "Movable", TaskState::Assign).await?;

    let mut board = stores.board();
    board.load().await?;
    let outcome = board
        .move_card(BoardColumn::Assign, BoardColumn::Tester, task.id())
        .await?;

    assert_eq!(outcome, MoveOutcome::Moved(TaskState::Tester));
    let stored = stores
        .tasks
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task should still exist"))?;
    assert_eq!(stored.state(), TaskState::Tester);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dragging_out_of_delayed_rehomes_the_card(stores: Stores) -> Result<(), eyre::Report> {
    let directory = stores.directory();
    let lifecycle = stores.lifecycle();
    let owner = register(&directory, "Ada", "Lovelace", "ada@example.com").await?;
    let late = create_overdue_task(&lifecycle, &owner, "Late work", TaskState::Pending).await?;

    let mut board = stores.board();
    board.load().await?;
    let outcome = board
        .move_card(BoardColumn::Delayed, BoardColumn::Complete, late.id())
        .await?;

    assert_eq!(outcome, MoveOutcome::Moved(TaskState::Complete));
    // The card stays where it was dropped even though its deadline is past.
    let view = board.view();
    assert!(view.column(BoardColumn::Delayed).is_empty());
    assert_eq!(single_card(view.column(BoardColumn::Complete))?, late.id());

    let stored = stores
        .tasks
        .find_by_id(late.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task should still exist"))?;
    assert_eq!(stored.state(), TaskState::Complete);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn the_delayed_column_rejects_drops(stores: Stores) -> Result<(), eyre::Report> {
    let directory = stores.directory();
    let lifecycle = stores.lifecycle();
    let owner = register(&directory, "Ada", "Lovelace", "ada@example.com").await?;
    let task = create_open_task(&lifecycle, &owner, "Movable", TaskState::Assign).await?;

    let mut board = stores.board();
    board.load().await?;
    let result = board
        .move_card(BoardColumn::Assign, BoardColumn::Delayed, task.id())
        .await;

    assert!(matches!(
        result,
        Err(BoardSyncError::Board(BoardError::DerivedColumnDrop))
    ));
    let stored = stores
        .tasks
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task should still exist"))?;
    assert_eq!(stored.state(), TaskState::Assign);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delayed_report_counts_days_past_the_deadline(stores: Stores) -> Result<(), eyre::Report> {
    let directory = stores.directory();
    let lifecycle = stores.lifecycle();
    let owner = register(&directory, "Ada", "Lovelace", "ada@example.com").await?;
    // Due 2025-03-01 against a reference date of 2025-03-10.
    lifecycle
        .create(
            taskboard::task::services::CreateTaskRequest::new(
                "Late work",
                owner.id(),
                date(2025, 3, 1),
                TaskState::Pending,
            )
            .with_created_on(date(2025, 2, 1)),
        )
        .await?;
    create_open_task(&lifecycle, &owner, "Fresh work", TaskState::Assign).await?;

    let mut board = stores.board();
    board.load().await?;
    let entries = board.delayed();

    ensure!(entries.len() == 1, "expected one delayed entry");
    let entry = entries
        .first()
        .ok_or_else(|| eyre::eyre!("expected a delayed entry"))?;
    assert_eq!(entry.task.detail().as_str(), "Late work");
    assert_eq!(entry.days_delayed, 9);
    Ok(())
}
