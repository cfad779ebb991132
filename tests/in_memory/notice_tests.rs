//! End-to-end delay notice tests over the in-memory adapters.

use eyre::ensure;
use rstest::rstest;
use std::sync::Arc;
use taskboard::notification::{
    adapters::memory::RecordingNotifier,
    services::{NoticeError, NoticeService},
};
use taskboard::task::domain::TaskState;

use super::helpers::{create_overdue_task, register, stores, Stores};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_delayed_task_produces_a_notice_to_its_owner(
    stores: Stores,
) -> Result<(), eyre::Report> {
    let directory = stores.directory();
    let lifecycle = stores.lifecycle();
    let ada = register(&directory, "Ada", "Lovelace", "ada@example.com").await?;
    let grace = register(&directory, "Grace", "Hopper", "grace@example.com").await?;
    create_overdue_task(&lifecycle, &ada, "Quarterly report", TaskState::Pending).await?;
    create_overdue_task(&lifecycle, &grace, "Release checklist", TaskState::Tester).await?;

    let mut board = stores.board();
    board.load().await?;
    let notifier = Arc::new(RecordingNotifier::new());
    let notices = NoticeService::new(Arc::clone(&stores.employees), Arc::clone(&notifier));

    for entry in board.delayed() {
        notices.notify_delay(&entry.task).await?;
    }

    let outbox = notifier.sent()?;
    ensure!(outbox.len() == 2, "expected two notices, found {}", outbox.len());
    let first = outbox
        .first()
        .ok_or_else(|| eyre::eyre!("expected a first notice"))?;
    assert_eq!(first.recipient_email().as_str(), "ada@example.com");
    assert_eq!(first.message(), "Quarterly report is delayed.");
    let second = outbox
        .get(1)
        .ok_or_else(|| eyre::eyre!("expected a second notice"))?;
    assert_eq!(second.recipient_email().as_str(), "grace@example.com");
    assert_eq!(second.message(), "Release checklist is delayed.");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_removed_owner_fails_the_notice_without_a_send(
    stores: Stores,
) -> Result<(), eyre::Report> {
    let directory = stores.directory();
    let lifecycle = stores.lifecycle();
    let ada = register(&directory, "Ada", "Lovelace", "ada@example.com").await?;
    let task = create_overdue_task(&lifecycle, &ada, "Quarterly report", TaskState::Pending).await?;
    directory.remove(ada.id()).await?;

    let notifier = Arc::new(RecordingNotifier::new());
    let notices = NoticeService::new(Arc::clone(&stores.employees), Arc::clone(&notifier));

    let result = notices.notify_delay(&task).await;

    assert!(matches!(
        result,
        Err(NoticeError::RecipientNotFound(id)) if id == ada.id()
    ));
    let outbox = notifier.sent()?;
    assert!(outbox.is_empty());
    Ok(())
}
