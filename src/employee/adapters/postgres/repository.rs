//! `PostgreSQL` repository implementation for employee storage.

use super::{
    models::{EmployeeRow, NewEmployeeRow},
    schema::employees,
};
use crate::employee::{
    domain::{EmailAddress, Employee, EmployeeId, PersistedEmployeeData, Position},
    ports::{EmployeeRepository, EmployeeRepositoryError, EmployeeRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by employee adapters.
pub type EmployeePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed employee repository.
///
/// Rows carry a registration timestamp assigned at insert;
/// [`list_all`](EmployeeRepository::list_all) orders by it so directory
/// snapshots come back in insertion order, matching the in-memory adapter.
#[derive(Debug, Clone)]
pub struct PostgresEmployeeRepository {
    pool: EmployeePgPool,
}

impl PostgresEmployeeRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: EmployeePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> EmployeeRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> EmployeeRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(EmployeeRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(EmployeeRepositoryError::persistence)?
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn store(&self, employee: &Employee) -> EmployeeRepositoryResult<()> {
        let employee_id = employee.id();
        let new_row = to_new_row(employee);

        self.run_blocking(move |connection| {
            diesel::insert_into(employees::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        EmployeeRepositoryError::DuplicateEmployee(employee_id)
                    }
                    _ => EmployeeRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: EmployeeId) -> EmployeeRepositoryResult<Option<Employee>> {
        self.run_blocking(move |connection| {
            let row = employees::table
                .filter(employees::id.eq(id.into_inner()))
                .select(EmployeeRow::as_select())
                .first::<EmployeeRow>(connection)
                .optional()
                .map_err(EmployeeRepositoryError::persistence)?;
            row.map(row_to_employee).transpose()
        })
        .await
    }

    async fn find_by_name(&self, name: &str) -> EmployeeRepositoryResult<Option<Employee>> {
        let lookup_name = name.to_owned();
        self.run_blocking(move |connection| {
            let row = employees::table
                .filter(employees::name.eq(lookup_name))
                .order((employees::created_at.asc(), employees::id.asc()))
                .select(EmployeeRow::as_select())
                .first::<EmployeeRow>(connection)
                .optional()
                .map_err(EmployeeRepositoryError::persistence)?;
            row.map(row_to_employee).transpose()
        })
        .await
    }

    async fn list_all(&self) -> EmployeeRepositoryResult<Vec<Employee>> {
        self.run_blocking(move |connection| {
            let rows = employees::table
                .order((employees::created_at.asc(), employees::id.asc()))
                .select(EmployeeRow::as_select())
                .load::<EmployeeRow>(connection)
                .map_err(EmployeeRepositoryError::persistence)?;
            rows.into_iter().map(row_to_employee).collect()
        })
        .await
    }

    async fn delete(&self, id: EmployeeId) -> EmployeeRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(
                employees::table.filter(employees::id.eq(id.into_inner())),
            )
            .execute(connection)
            .map_err(EmployeeRepositoryError::persistence)?;
            if affected == 0 {
                return Err(EmployeeRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

/// Builds the insert row, stamping the registration time.
///
/// The timestamp exists only storage-side, to give `list_all` an
/// insertion-order sort key; the domain aggregate does not carry it.
fn to_new_row(employee: &Employee) -> NewEmployeeRow {
    NewEmployeeRow {
        id: employee.id().into_inner(),
        name: employee.name().to_owned(),
        surname: employee.surname().to_owned(),
        email: employee.email().as_str().to_owned(),
        phone: employee.phone().to_owned(),
        citizen_id: employee.citizen_id().to_owned(),
        position: employee.position().as_str().to_owned(),
        created_at: chrono::Utc::now(),
    }
}

/// Converts a stored row back into the domain aggregate.
///
/// A row holding an unparseable position or email is a data-integrity fault
/// and is reported as a persistence error rather than silently skipped.
fn row_to_employee(row: EmployeeRow) -> EmployeeRepositoryResult<Employee> {
    let position =
        Position::try_from(row.position.as_str()).map_err(EmployeeRepositoryError::persistence)?;
    let email = EmailAddress::new(row.email).map_err(EmployeeRepositoryError::persistence)?;

    Ok(Employee::from_persisted(PersistedEmployeeData {
        id: EmployeeId::from_uuid(row.id),
        name: row.name,
        surname: row.surname,
        email,
        phone: row.phone,
        citizen_id: row.citizen_id,
        position,
    }))
}
