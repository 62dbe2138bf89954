use crossterm::event::KeyEvent;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,

    // Roster navigation
    NavigateUp,
    NavigateDown,
    SelectFirst,
    SelectLast,

    // Roster requests
    Refresh,
    DeleteEmployee,
    ShowDetails,
    OpenCreate,
    OpenSearch,
    HighestSalary,
    TopTen,

    // Dialogs
    NextField,
    PreviousField,
    Submit,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
        }
    }
}
