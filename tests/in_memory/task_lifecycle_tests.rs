//! Integration tests for task creation, editing, and removal.

use rstest::rstest;
use taskboard::employee::domain::EmployeeId;
use taskboard::task::{
    domain::{TaskDomainError, TaskId, TaskState},
    ports::{TaskRepository, TaskRepositoryError},
    services::{CreateTaskRequest, EditTaskRequest, TaskLifecycleError},
};

use super::helpers::{create_open_task, date, register, stores, today, Stores};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_defaults_the_creation_date_to_today(stores: Stores) -> Result<(), eyre::Report> {
    let directory = stores.directory();
    let lifecycle = stores.lifecycle();
    let owner = register(&directory, "Ada", "Lovelace", "ada@example.com").await?;

    let created = lifecycle
        .create(CreateTaskRequest::new(
            "Wire the dashboard",
            owner.id(),
            date(2025, 9, 1),
            TaskState::Assign,
        ))
        .await?;

    assert_eq!(created.created_on(), today());
    assert_eq!(created.state(), TaskState::Assign);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_unregistered_owners(stores: Stores) -> Result<(), eyre::Report> {
    let lifecycle = stores.lifecycle();
    let ghost = EmployeeId::new();

    let result = lifecycle
        .create(CreateTaskRequest::new(
            "Orphaned task",
            ghost,
            date(2025, 9, 1),
            TaskState::Assign,
        ))
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::UnknownOwner(id)) if id == ghost
    ));
    let listed = lifecycle.list().await?;
    assert!(listed.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_replaces_the_whole_record(stores: Stores) -> Result<(), eyre::Report> {
    let directory = stores.directory();
    let lifecycle = stores.lifecycle();
    let ada = register(&directory, "Ada", "Lovelace", "ada@example.com").await?;
    let grace = register(&directory, "Grace", "Hopper", "grace@example.com").await?;
    let task = create_open_task(&lifecycle, &ada, "Draft the report", TaskState::Assign).await?;

    let edited = lifecycle
        .edit(EditTaskRequest::new(
            task.id(),
            "Draft and review the report",
            grace.id(),
            task.created_on(),
            date(2025, 10, 1),
            TaskState::Pending,
        ))
        .await?;

    assert_eq!(edited.detail().as_str(), "Draft and review the report");
    assert_eq!(edited.owner(), grace.id());
    assert_eq!(edited.dead_line(), date(2025, 10, 1));
    assert_eq!(edited.state(), TaskState::Pending);

    let stored = stores.tasks.find_by_id(task.id()).await?;
    assert_eq!(stored, Some(edited));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_rejects_deadlines_before_creation_and_leaves_the_store_alone(
    stores: Stores,
) -> Result<(), eyre::Report> {
    let directory = stores.directory();
    let lifecycle = stores.lifecycle();
    let owner = register(&directory, "Ada", "Lovelace", "ada@example.com").await?;
    let task = create_open_task(&lifecycle, &owner, "Draft the report", TaskState::Assign).await?;

    let result = lifecycle
        .edit(EditTaskRequest::new(
            task.id(),
            "Draft the report",
            owner.id(),
            task.created_on(),
            date(2020, 1, 1),
            TaskState::Assign,
        ))
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::DeadlineBeforeCreation { .. }
        ))
    ));
    let stored = stores.tasks.find_by_id(task.id()).await?;
    assert_eq!(stored, Some(task));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_by_owner_filters_and_preserves_order(stores: Stores) -> Result<(), eyre::Report> {
    let directory = stores.directory();
    let lifecycle = stores.lifecycle();
    let ada = register(&directory, "Ada", "Lovelace", "ada@example.com").await?;
    let grace = register(&directory, "Grace", "Hopper", "grace@example.com").await?;

    let first = create_open_task(&lifecycle, &ada, "First", TaskState::Assign).await?;
    create_open_task(&lifecycle, &grace, "Other", TaskState::Assign).await?;
    let second = create_open_task(&lifecycle, &ada, "Second", TaskState::Pending).await?;

    let mine = lifecycle.list_by_owner(ada.id()).await?;

    let ids: Vec<_> = mine.iter().map(taskboard::task::domain::Task::id).collect();
    assert_eq!(ids, vec![first.id(), second.id()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_deletes_and_rejects_unknown_identifiers(stores: Stores) -> Result<(), eyre::Report> {
    let directory = stores.directory();
    let lifecycle = stores.lifecycle();
    let owner = register(&directory, "Ada", "Lovelace", "ada@example.com").await?;
    let task = create_open_task(&lifecycle, &owner, "Short lived", TaskState::Assign).await?;

    lifecycle.remove(task.id()).await?;
    let listed = lifecycle.list().await?;
    assert!(listed.is_empty());

    let missing = lifecycle.remove(TaskId::new()).await;
    assert!(matches!(
        missing,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::NotFound(_)
        ))
    ));
    Ok(())
}
