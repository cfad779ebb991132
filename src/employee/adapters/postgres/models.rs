//! Diesel row models for employee persistence.

use super::schema::employees;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for employee records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EmployeeRow {
    /// Employee identifier.
    pub id: uuid::Uuid,
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// National identifier.
    pub citizen_id: String,
    /// Team role.
    pub position: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for employee records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub struct NewEmployeeRow {
    /// Employee identifier.
    pub id: uuid::Uuid,
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// National identifier.
    pub citizen_id: String,
    /// Team role.
    pub position: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}
