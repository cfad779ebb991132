//! Integration tests for employee registration, lookup, and removal.

use rstest::rstest;
use taskboard::employee::{
    domain::{EmployeeDomainError, EmployeeId, Position},
    ports::EmployeeRepositoryError,
    services::{EmployeeDirectoryError, RegisterEmployeeRequest},
};

use super::helpers::{register, stores, Stores};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_then_list_preserves_insertion_order(stores: Stores) -> Result<(), eyre::Report> {
    let directory = stores.directory();
    let first = register(&directory, "Ada", "Lovelace", "ada@example.com").await?;
    let second = register(&directory, "Grace", "Hopper", "grace@example.com").await?;

    let listed = directory.list().await?;

    let ids: Vec<_> = listed.iter().map(|employee| employee.id()).collect();
    assert_eq!(ids, vec![first.id(), second.id()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_name_returns_first_registered_match(stores: Stores) -> Result<(), eyre::Report> {
    let directory = stores.directory();
    let first = register(&directory, "Ada", "Lovelace", "ada.l@example.com").await?;
    register(&directory, "Ada", "Yonath", "ada.y@example.com").await?;

    let found = directory.find_by_name("Ada").await?;

    assert_eq!(found, Some(first));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn position_strings_parse_case_insensitively(stores: Stores) -> Result<(), eyre::Report> {
    let directory = stores.directory();
    let registered = directory
        .register(RegisterEmployeeRequest::new(
            "Rosalind",
            "Franklin",
            "rosalind@example.com",
            "555-0101",
            "3100500123457",
            "business analyst",
        ))
        .await?;

    assert_eq!(registered.position(), Position::BusinessAnalyst);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_position_string_is_rejected(stores: Stores) -> Result<(), eyre::Report> {
    let directory = stores.directory();
    let result = directory
        .register(RegisterEmployeeRequest::new(
            "Ada",
            "Lovelace",
            "ada@example.com",
            "555-0100",
            "3100500123456",
            "Archmage",
        ))
        .await;

    assert!(matches!(
        result,
        Err(EmployeeDirectoryError::Domain(
            EmployeeDomainError::UnknownPosition(_)
        ))
    ));
    let listed = directory.list().await?;
    assert!(listed.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_deletes_and_rejects_unknown_identifiers(stores: Stores) -> Result<(), eyre::Report> {
    let directory = stores.directory();
    let registered = register(&directory, "Ada", "Lovelace", "ada@example.com").await?;

    directory.remove(registered.id()).await?;
    let listed = directory.list().await?;
    assert!(listed.is_empty());

    let missing = directory.remove(EmployeeId::new()).await;
    assert!(matches!(
        missing,
        Err(EmployeeDirectoryError::Repository(
            EmployeeRepositoryError::NotFound(_)
        ))
    ));
    Ok(())
}
