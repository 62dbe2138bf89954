mod employee_port;

pub use employee_port::{EmployeePort, NewEmployee, NumericInput};
