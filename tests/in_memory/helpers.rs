//! Shared test helpers for in-memory integration tests.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use std::sync::Arc;

use taskboard::board::services::BoardService;
use taskboard::employee::{
    adapters::memory::InMemoryEmployeeRepository,
    domain::Employee,
    services::{EmployeeDirectoryService, RegisterEmployeeRequest},
};
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskState},
    services::{CreateTaskRequest, TaskLifecycleService},
};

/// Builds a calendar date, panicking on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Reference date every fixed clock in this suite reports.
pub fn today() -> NaiveDate {
    date(2025, 3, 10)
}

/// Clock pinned to [`today`].
pub struct FixedClock;

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&today().and_hms_opt(12, 0, 0).expect("valid time of day"))
    }
}

/// Directory service wired to the in-memory employee store.
pub type DirectoryService = EmployeeDirectoryService<InMemoryEmployeeRepository>;

/// Lifecycle service wired to the in-memory stores and the fixed clock.
pub type LifecycleService =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryEmployeeRepository, FixedClock>;

/// Shared in-memory stores backing every service in a test.
pub struct Stores {
    /// Employee store.
    pub employees: Arc<InMemoryEmployeeRepository>,
    /// Task store.
    pub tasks: Arc<InMemoryTaskRepository>,
}

impl Stores {
    /// Builds an employee directory service over the shared store.
    pub fn directory(&self) -> DirectoryService {
        EmployeeDirectoryService::new(Arc::clone(&self.employees))
    }

    /// Builds a task lifecycle service over the shared stores.
    pub fn lifecycle(&self) -> LifecycleService {
        TaskLifecycleService::new(
            Arc::clone(&self.tasks),
            Arc::clone(&self.employees),
            Arc::new(FixedClock),
        )
    }

    /// Builds a board service over the shared task store.
    pub fn board(&self) -> BoardService<InMemoryTaskRepository, FixedClock> {
        BoardService::new(Arc::clone(&self.tasks), Arc::new(FixedClock))
    }
}

/// Provides fresh in-memory stores for each test.
#[fixture]
pub fn stores() -> Stores {
    Stores {
        employees: Arc::new(InMemoryEmployeeRepository::new()),
        tasks: Arc::new(InMemoryTaskRepository::new()),
    }
}

/// Registers an employee with placeholder contact fields.
///
/// # Errors
///
/// Returns an error if registration fails.
pub async fn register(
    directory: &DirectoryService,
    name: &str,
    surname: &str,
    email: &str,
) -> Result<Employee, eyre::Report> {
    Ok(directory
        .register(RegisterEmployeeRequest::new(
            name,
            surname,
            email,
            "555-0100",
            "3100500123456",
            "Developer",
        ))
        .await?)
}

/// Creates a task due well after [`today`].
///
/// # Errors
///
/// Returns an error if task creation fails.
pub async fn create_open_task(
    lifecycle: &LifecycleService,
    owner: &Employee,
    detail: &str,
    state: TaskState,
) -> Result<Task, eyre::Report> {
    Ok(lifecycle
        .create(CreateTaskRequest::new(
            detail,
            owner.id(),
            date(2025, 9, 1),
            state,
        ))
        .await?)
}

/// Creates a task whose deadline passed before [`today`].
///
/// # Errors
///
/// Returns an error if task creation fails.
pub async fn create_overdue_task(
    lifecycle: &LifecycleService,
    owner: &Employee,
    detail: &str,
    state: TaskState,
) -> Result<Task, eyre::Report> {
    Ok(lifecycle
        .create(
            CreateTaskRequest::new(detail, owner.id(), date(2024, 12, 1), state)
                .with_created_on(date(2024, 11, 1)),
        )
        .await?)
}
