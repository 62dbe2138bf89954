//! Employee entity.

use serde::{Deserialize, Serialize};

use crate::domain::serde_utils::string_or_number;

/// Opaque, server-assigned employee identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(#[serde(with = "string_or_number")] String);

impl EmployeeId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EmployeeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for EmployeeId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

/// An employee record as held by the client.
///
/// The remote service owns the record; this is a transient copy that may be stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    salary: Option<i64>,
    age: Option<i64>,
    title: String,
    #[serde(default)]
    email: Option<String>,
}

impl Employee {
    #[must_use]
    pub fn new(
        id: impl Into<EmployeeId>,
        name: impl Into<String>,
        salary: Option<i64>,
        age: Option<i64>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            salary,
            age,
            title: title.into(),
            email: None,
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub const fn id(&self) -> &EmployeeId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn salary(&self) -> Option<i64> {
        self.salary
    }

    #[must_use]
    pub const fn age(&self) -> Option<i64> {
        self.age
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_number_and_text_compare_by_text() {
        assert_eq!(EmployeeId::from(7_u64), EmployeeId::from("7"));
        assert_ne!(EmployeeId::from("7"), EmployeeId::from("07"));
    }

    #[test]
    fn test_employee_state_roundtrip_keeps_email() {
        let employee = Employee::new(1_u64, "Bob", Some(50_000), Some(41), "Engineer")
            .with_email("bob@company.com");

        let json = serde_json::to_string(&employee).unwrap();
        let back: Employee = serde_json::from_str(&json).unwrap();

        assert_eq!(back, employee);
        assert_eq!(back.email(), Some("bob@company.com"));
    }
}
