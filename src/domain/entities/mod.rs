//! Domain entity definitions.

mod draft;
mod employee;

pub use draft::{DraftEmployee, DraftField};
pub use employee::{Employee, EmployeeId};
