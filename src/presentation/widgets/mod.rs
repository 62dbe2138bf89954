mod employee_form;
mod employee_table;
mod footer_bar;
mod input;

pub use employee_form::EmployeeForm;
pub use employee_table::{EmployeeTable, EmployeeTableStyle};
pub use footer_bar::{FooterBar, FooterBarStyle};
pub use input::TextInput;
