//! UI screens.

mod app;
mod roster_screen;
pub mod utils;

pub use app::App;
pub use roster_screen::{RosterKeyResult, RosterScreen, RosterScreenState};
