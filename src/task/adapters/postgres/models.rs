//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Free-text description.
    pub detail: String,
    /// Owning employee identifier.
    pub owner_id: uuid::Uuid,
    /// Creation date.
    pub created_on: NaiveDate,
    /// Deadline date.
    pub dead_line: NaiveDate,
    /// Workflow state.
    pub state: String,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Free-text description.
    pub detail: String,
    /// Owning employee identifier.
    pub owner_id: uuid::Uuid,
    /// Creation date.
    pub created_on: NaiveDate,
    /// Deadline date.
    pub dead_line: NaiveDate,
    /// Workflow state.
    pub state: String,
}

/// Changeset for whole-record task edits.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Free-text description.
    pub detail: String,
    /// Owning employee identifier.
    pub owner_id: uuid::Uuid,
    /// Creation date.
    pub created_on: NaiveDate,
    /// Deadline date.
    pub dead_line: NaiveDate,
    /// Workflow state.
    pub state: String,
}
