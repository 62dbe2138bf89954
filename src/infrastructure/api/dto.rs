use serde::Deserialize;

use crate::domain::entities::Employee;
use crate::domain::serde_utils::{lenient_i64, string_or_number};

/// Employee record as the service sends it.
///
/// Fields carry an `employee_` prefix on the wire; unprefixed names are
/// accepted too.
#[derive(Debug, Deserialize)]
pub struct EmployeeResponse {
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub id: String,
    #[serde(rename = "employee_name", alias = "name", default)]
    pub name: Option<String>,
    #[serde(
        rename = "employee_salary",
        alias = "salary",
        default,
        deserialize_with = "lenient_i64::deserialize"
    )]
    pub salary: Option<i64>,
    #[serde(
        rename = "employee_age",
        alias = "age",
        default,
        deserialize_with = "lenient_i64::deserialize"
    )]
    pub age: Option<i64>,
    #[serde(rename = "employee_title", alias = "title", default)]
    pub title: Option<String>,
    #[serde(rename = "employee_email", alias = "email", default)]
    pub email: Option<String>,
}

impl From<EmployeeResponse> for Employee {
    fn from(response: EmployeeResponse) -> Self {
        let employee = Self::new(
            response.id,
            response.name.unwrap_or_default(),
            response.salary,
            response.age,
            response.title.unwrap_or_default(),
        );
        match response.email {
            Some(email) => employee.with_email(email),
            None => employee,
        }
    }
}

/// A payload that may arrive bare or wrapped in `{"data": ...}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}
