//! Roster request use cases.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::entities::{DraftEmployee, Employee, EmployeeId};
use crate::domain::errors::ApiError;
use crate::domain::ports::{EmployeePort, NewEmployee};

/// Runs roster requests against the employee service.
///
/// Delete and create swallow their failures after logging them; the roster is
/// simply left as it was. Every other request hands its error back so the
/// caller decides what an unhandled failure means.
#[derive(Clone)]
pub struct RosterUseCase {
    employee_port: Arc<dyn EmployeePort>,
}

impl RosterUseCase {
    /// Creates new roster use case.
    #[must_use]
    pub const fn new(employee_port: Arc<dyn EmployeePort>) -> Self {
        Self { employee_port }
    }

    /// Loads the full roster.
    ///
    /// # Errors
    /// Returns error if the service call fails.
    pub async fn load_roster(&self) -> Result<Vec<Employee>, ApiError> {
        debug!("Loading roster");
        let employees = self.employee_port.list_employees().await?;
        info!(count = employees.len(), "Roster loaded");
        Ok(employees)
    }

    /// Deletes an employee, returning the id once the service confirmed it.
    pub async fn delete(&self, id: EmployeeId) -> Option<EmployeeId> {
        debug!(id = %id, "Deleting employee");
        match self.employee_port.delete_employee(&id).await {
            Ok(()) => {
                info!(id = %id, "Employee deleted");
                Some(id)
            }
            Err(e) => {
                error!(id = %id, error = %e, "Error deleting employee");
                None
            }
        }
    }

    /// Submits a draft, returning the record the service stored.
    pub async fn create(&self, draft: &DraftEmployee) -> Option<Employee> {
        let request = NewEmployee::from(draft);
        debug!(name = %request.name, "Creating employee");
        match self.employee_port.create_employee(&request).await {
            Ok(employee) => {
                info!(id = %employee.id(), name = %employee.name(), "Employee created");
                Some(employee)
            }
            Err(e) => {
                error!(error = %e, "Error creating employee");
                None
            }
        }
    }

    /// Searches employees by name.
    ///
    /// # Errors
    /// Returns error if the service call fails.
    pub async fn search(&self, query: &str) -> Result<Vec<Employee>, ApiError> {
        debug!(query = %query, "Searching employees");
        let results = self.employee_port.search_employees(query).await?;
        info!(query = %query, count = results.len(), "Search completed");
        Ok(results)
    }

    /// Fetches the highest salary.
    ///
    /// # Errors
    /// Returns error if the service call fails.
    pub async fn highest_salary(&self) -> Result<i64, ApiError> {
        let salary = self.employee_port.highest_salary().await?;
        debug!(salary, "Highest salary fetched");
        Ok(salary)
    }

    /// Fetches the top ten earners' names.
    ///
    /// # Errors
    /// Returns error if the service call fails.
    pub async fn top_ten(&self) -> Result<Vec<String>, ApiError> {
        let names = self.employee_port.top_ten_names().await?;
        debug!(count = names.len(), "Top earners fetched");
        Ok(names)
    }

    /// Fetches one employee's full record.
    ///
    /// # Errors
    /// Returns error if the service call fails.
    pub async fn details(&self, id: &EmployeeId) -> Result<Employee, ApiError> {
        debug!(id = %id, "Fetching employee details");
        self.employee_port.fetch_employee(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockEmployeePort;

    fn seeded() -> Arc<MockEmployeePort> {
        let employees = (1..=12_u64)
            .map(|i| {
                Employee::new(
                    i,
                    format!("Employee {i}"),
                    Some(i64::try_from(i).unwrap() * 1_000),
                    Some(30),
                    "Staff",
                )
            })
            .collect();
        Arc::new(MockEmployeePort::new(employees))
    }

    #[tokio::test]
    async fn test_load_roster() {
        let use_case = RosterUseCase::new(seeded());

        let roster = tokio_test::assert_ok!(use_case.load_roster().await);

        assert_eq!(roster.len(), 12);
    }

    #[tokio::test]
    async fn test_load_roster_failure_is_returned() {
        let port = seeded();
        port.set_should_fail(true);
        let use_case = RosterUseCase::new(port);

        let result = use_case.load_roster().await;

        assert!(matches!(result, Err(ApiError::Status { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_delete_success_returns_id() {
        let port = seeded();
        let use_case = RosterUseCase::new(port.clone());

        let deleted = use_case.delete(EmployeeId::from("3")).await;

        assert_eq!(deleted, Some(EmployeeId::from("3")));
        assert_eq!(port.snapshot().await.len(), 11);
    }

    #[tokio::test]
    async fn test_delete_failure_is_swallowed() {
        let port = seeded();
        port.set_should_fail(true);
        let use_case = RosterUseCase::new(port.clone());

        assert_eq!(use_case.delete(EmployeeId::from("3")).await, None);

        port.set_should_fail(false);
        assert_eq!(port.snapshot().await.len(), 12);
    }

    #[tokio::test]
    async fn test_create_returns_server_record() {
        let use_case = RosterUseCase::new(seeded());
        let draft = DraftEmployee {
            name: "A".to_string(),
            salary: "100".to_string(),
            age: "30".to_string(),
            title: "Eng".to_string(),
        };

        let created = use_case.create(&draft).await.unwrap();

        assert_eq!(created.name(), "A");
        assert_eq!(created.salary(), Some(100));
        assert_eq!(created.age(), Some(30));
        assert_eq!(created.title(), "Eng");
    }

    #[tokio::test]
    async fn test_create_failure_is_swallowed() {
        let port = seeded();
        port.set_should_fail(true);
        let use_case = RosterUseCase::new(port);

        assert!(use_case.create(&DraftEmployee::new()).await.is_none());
    }

    #[tokio::test]
    async fn test_aggregates() {
        let use_case = RosterUseCase::new(seeded());

        assert_eq!(use_case.highest_salary().await.unwrap(), 12_000);

        let names = use_case.top_ten().await.unwrap();
        assert_eq!(names.len(), 10);
        assert_eq!(names.first().map(String::as_str), Some("Employee 12"));
        assert_eq!(names.last().map(String::as_str), Some("Employee 3"));
    }

    #[tokio::test]
    async fn test_search_and_details() {
        let use_case = RosterUseCase::new(seeded());

        let results = use_case.search("employee 1").await.unwrap();
        let names: Vec<_> = results.iter().map(Employee::name).collect();
        assert_eq!(names, vec!["Employee 1", "Employee 10", "Employee 11", "Employee 12"]);

        let details = use_case.details(&EmployeeId::from("5")).await.unwrap();
        assert_eq!(details.name(), "Employee 5");

        let missing = use_case.details(&EmployeeId::from("99")).await;
        assert!(matches!(missing, Err(ApiError::Status { status: 404, .. })));
    }
}
