//! Employee service port definition.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::entities::{DraftEmployee, Employee, EmployeeId};
use crate::domain::errors::ApiError;

/// A numeric form value as submitted to the service.
///
/// Text that parses as an integer goes out as a JSON number, anything else is
/// passed through untouched for the server to judge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(i64),
    Text(String),
}

impl NumericInput {
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        text.trim()
            .parse::<i64>()
            .map_or_else(|_| Self::Text(text.to_string()), Self::Number)
    }
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEmployee {
    pub name: String,
    pub salary: NumericInput,
    pub age: NumericInput,
    pub title: String,
}

impl From<&DraftEmployee> for NewEmployee {
    fn from(draft: &DraftEmployee) -> Self {
        Self {
            name: draft.name.clone(),
            salary: NumericInput::from_text(&draft.salary),
            age: NumericInput::from_text(&draft.age),
            title: draft.title.clone(),
        }
    }
}

/// Port for the remote employee service.
#[async_trait]
pub trait EmployeePort: Send + Sync {
    /// Fetches the full roster.
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError>;

    /// Fetches a single employee.
    async fn fetch_employee(&self, id: &EmployeeId) -> Result<Employee, ApiError>;

    /// Deletes an employee. The response body is ignored.
    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), ApiError>;

    /// Creates an employee and returns the stored record.
    async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, ApiError>;

    /// Searches employees by name fragment.
    async fn search_employees(&self, query: &str) -> Result<Vec<Employee>, ApiError>;

    /// Fetches the highest salary on the roster.
    async fn highest_salary(&self) -> Result<i64, ApiError>;

    /// Fetches the names of the ten highest earners, highest first.
    async fn top_ten_names(&self) -> Result<Vec<String>, ApiError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
    use tokio::sync::RwLock;

    /// In-memory employee service for testing.
    ///
    /// Behaves like the real service over its own list; `set_should_fail`
    /// makes every call return a 503.
    pub struct MockEmployeePort {
        employees: Arc<RwLock<Vec<Employee>>>,
        should_fail: Arc<AtomicBool>,
        next_id: AtomicU64,
    }

    impl MockEmployeePort {
        /// Creates mock with an initial roster.
        pub fn new(employees: Vec<Employee>) -> Self {
            Self {
                employees: Arc::new(RwLock::new(employees)),
                should_fail: Arc::new(AtomicBool::new(false)),
                next_id: AtomicU64::new(100),
            }
        }

        /// Sets failure behavior.
        pub fn set_should_fail(&self, value: bool) {
            self.should_fail.store(value, Ordering::SeqCst);
        }

        /// Returns a copy of the stored roster.
        pub async fn snapshot(&self) -> Vec<Employee> {
            self.employees.read().await.clone()
        }

        fn check(&self) -> Result<(), ApiError> {
            if self.should_fail.load(Ordering::SeqCst) {
                Err(ApiError::status(503, "mock outage"))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl EmployeePort for MockEmployeePort {
        async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
            self.check()?;
            Ok(self.snapshot().await)
        }

        async fn fetch_employee(&self, id: &EmployeeId) -> Result<Employee, ApiError> {
            self.check()?;
            self.employees
                .read()
                .await
                .iter()
                .find(|e| e.id() == id)
                .cloned()
                .ok_or_else(|| ApiError::status(404, format!("no employee {id}")))
        }

        async fn delete_employee(&self, id: &EmployeeId) -> Result<(), ApiError> {
            self.check()?;
            self.employees.write().await.retain(|e| e.id() != id);
            Ok(())
        }

        async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, ApiError> {
            self.check()?;
            let numeric = |input: &NumericInput| match input {
                NumericInput::Number(n) => Some(*n),
                NumericInput::Text(_) => None,
            };
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let created = Employee::new(
                id,
                employee.name.clone(),
                numeric(&employee.salary),
                numeric(&employee.age),
                employee.title.clone(),
            );
            self.employees.write().await.push(created.clone());
            Ok(created)
        }

        async fn search_employees(&self, query: &str) -> Result<Vec<Employee>, ApiError> {
            self.check()?;
            let needle = query.to_lowercase();
            Ok(self
                .employees
                .read()
                .await
                .iter()
                .filter(|e| e.name().to_lowercase().contains(&needle))
                .cloned()
                .collect())
        }

        async fn highest_salary(&self) -> Result<i64, ApiError> {
            self.check()?;
            Ok(self
                .employees
                .read()
                .await
                .iter()
                .filter_map(Employee::salary)
                .max()
                .unwrap_or(0))
        }

        async fn top_ten_names(&self) -> Result<Vec<String>, ApiError> {
            self.check()?;
            let mut employees = self.snapshot().await;
            employees.sort_by(|a, b| b.salary().cmp(&a.salary()));
            Ok(employees
                .into_iter()
                .take(10)
                .map(|e| e.name().to_string())
                .collect())
        }
    }
}
