//! Employee Controller
//!
//! The controller owns no persistence; deleting is the storage's job.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};

/// Employee identifier
pub type EmployeeId = u64;

/// Action the controller redirects to after a delete
pub const EMPLOYEES_ACTION: &str = "Employees";

/// An employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier
    pub id: EmployeeId,
    /// Full name
    pub name: String,
}

/// What the controller tells the caller to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Go to another action
    Redirect {
        /// Action name
        action: &'static str,
    },
}

/// Employee persistence.
#[async_trait]
pub trait EmployeeStorage: Send + Sync {
    /// Delete an employee. Deleting an absent employee is not an error.
    async fn delete_employee(&self, id: EmployeeId) -> Result<(), EmployeeError>;
}

/// Handles employee actions.
pub struct EmployeeController {
    storage: Arc<dyn EmployeeStorage>,
}

impl EmployeeController {
    /// Create a controller over `storage`.
    pub fn new(storage: Arc<dyn EmployeeStorage>) -> Self {
        Self { storage }
    }

    /// Delete the employee and redirect to the employee list.
    ///
    /// # Errors
    /// Propagates storage failures.
    pub async fn delete_employee(&self, id: EmployeeId) -> Result<ActionResult, EmployeeError> {
        self.storage.delete_employee(id).await?;
        tracing::info!(employee_id = id, "Deleted employee");

        Ok(ActionResult::Redirect {
            action: EMPLOYEES_ACTION,
        })
    }
}

// =============================================================================
// Storage Implementations
// =============================================================================

/// Employee storage held in memory.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStorage {
    employees: RwLock<HashMap<EmployeeId, Employee>>,
}

impl InMemoryEmployeeStorage {
    /// Create empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an employee.
    pub async fn insert(&self, employee: Employee) {
        self.employees.write().await.insert(employee.id, employee);
    }

    /// Look up an employee.
    pub async fn get(&self, id: EmployeeId) -> Option<Employee> {
        self.employees.read().await.get(&id).cloned()
    }
}

#[async_trait]
impl EmployeeStorage for InMemoryEmployeeStorage {
    async fn delete_employee(&self, id: EmployeeId) -> Result<(), EmployeeError> {
        self.employees.write().await.remove(&id);
        Ok(())
    }
}

/// Records which ids it was asked to delete.
#[derive(Debug, Default)]
pub struct SimEmployeeStorage {
    deleted: Mutex<Vec<EmployeeId>>,
}

impl SimEmployeeStorage {
    /// Create a recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids deleted so far, in call order.
    pub async fn deleted(&self) -> Vec<EmployeeId> {
        self.deleted.lock().await.clone()
    }
}

#[async_trait]
impl EmployeeStorage for SimEmployeeStorage {
    async fn delete_employee(&self, id: EmployeeId) -> Result<(), EmployeeError> {
        self.deleted.lock().await.push(id);
        Ok(())
    }
}

/// Employee-related errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeError {
    #[error("employee storage failed: {0}")]
    Storage(String),
}
