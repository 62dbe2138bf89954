//! Application layer with view state and use cases.

/// Roster view state.
pub mod state;
/// Use case implementations.
pub mod use_cases;

pub use state::{Modal, ModalKind, RosterState};
pub use use_cases::RosterUseCase;
