//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;

pub use entities::{DraftEmployee, DraftField, Employee, EmployeeId};
pub use errors::ApiError;
pub use ports::{EmployeePort, NewEmployee};
