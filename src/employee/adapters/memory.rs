//! In-memory employee repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::employee::{
    domain::{Employee, EmployeeId},
    ports::{EmployeeRepository, EmployeeRepositoryError, EmployeeRepositoryResult},
};

/// Thread-safe in-memory employee repository.
///
/// [`list_all`](EmployeeRepository::list_all) preserves insertion order so
/// view snapshots are deterministic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    state: Arc<RwLock<InMemoryEmployeeState>>,
}

#[derive(Debug, Default)]
struct InMemoryEmployeeState {
    employees: HashMap<EmployeeId, Employee>,
    order: Vec<EmployeeId>,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned<T>(err: std::sync::PoisonError<T>) -> EmployeeRepositoryError {
    EmployeeRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn store(&self, employee: &Employee) -> EmployeeRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.employees.contains_key(&employee.id()) {
            return Err(EmployeeRepositoryError::DuplicateEmployee(employee.id()));
        }
        state.order.push(employee.id());
        state.employees.insert(employee.id(), employee.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: EmployeeId) -> EmployeeRepositoryResult<Option<Employee>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.employees.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> EmployeeRepositoryResult<Option<Employee>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let found = state
            .order
            .iter()
            .filter_map(|id| state.employees.get(id))
            .find(|employee| employee.name() == name)
            .cloned();
        Ok(found)
    }

    async fn list_all(&self) -> EmployeeRepositoryResult<Vec<Employee>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.employees.get(id))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: EmployeeId) -> EmployeeRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.employees.remove(&id).is_none() {
            return Err(EmployeeRepositoryError::NotFound(id));
        }
        state.order.retain(|known| *known != id);
        Ok(())
    }
}
