//! Use case implementations.

mod roster_use_case;

pub use roster_use_case::RosterUseCase;
