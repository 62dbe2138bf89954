use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Where a key binding applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyContext {
    /// The roster table has focus.
    Roster,
    /// A dialog has focus; printable keys go to its inputs.
    Dialog,
}

pub struct CommandRegistry {
    display_bindings: HashMap<(KeyContext, Action), KeyEvent>,
    input_bindings: Vec<(KeyContext, KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        use KeyContext::{Dialog, Roster};

        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |context: KeyContext, action: Action, key: KeyEvent, is_primary: bool| {
            if is_primary {
                display_bindings.insert((context, action), key);
            }
            input_bindings.push((context, key, action));
        };

        register(
            Roster,
            Action::Quit,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            true,
        );
        register(
            Roster,
            Action::Quit,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            false,
        );
        register(
            Dialog,
            Action::Quit,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            false,
        );

        register(
            Roster,
            Action::NavigateUp,
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            true,
        );
        register(
            Roster,
            Action::NavigateUp,
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            false,
        );
        register(
            Roster,
            Action::NavigateDown,
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            true,
        );
        register(
            Roster,
            Action::NavigateDown,
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            false,
        );
        register(
            Roster,
            Action::SelectFirst,
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            true,
        );
        register(
            Roster,
            Action::SelectFirst,
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            false,
        );
        register(
            Roster,
            Action::SelectLast,
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            true,
        );
        register(
            Roster,
            Action::SelectLast,
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::NONE),
            false,
        );
        register(
            Roster,
            Action::SelectLast,
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            false,
        );

        register(
            Roster,
            Action::Refresh,
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE),
            true,
        );
        register(
            Roster,
            Action::DeleteEmployee,
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE),
            true,
        );
        register(
            Roster,
            Action::DeleteEmployee,
            KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE),
            false,
        );
        register(
            Roster,
            Action::ShowDetails,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            true,
        );
        register(
            Roster,
            Action::OpenCreate,
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE),
            true,
        );
        register(
            Roster,
            Action::OpenSearch,
            KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE),
            true,
        );
        register(
            Roster,
            Action::HighestSalary,
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            true,
        );
        register(
            Roster,
            Action::TopTen,
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE),
            true,
        );

        register(
            Dialog,
            Action::NextField,
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            true,
        );
        register(
            Dialog,
            Action::NextField,
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            false,
        );
        register(
            Dialog,
            Action::PreviousField,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            true,
        );
        register(
            Dialog,
            Action::PreviousField,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE),
            false,
        );
        register(
            Dialog,
            Action::PreviousField,
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            false,
        );
        register(
            Dialog,
            Action::Submit,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            true,
        );
        register(
            Dialog,
            Action::Cancel,
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            true,
        );

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, context: KeyContext, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&(context, action)).copied()
    }

    pub fn find_action(&self, context: KeyContext, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(c, k, _)| *c == context && k.code == key.code && k.modifiers == key.modifiers)
            .map(|(_, _, a)| *a)
    }

    /// Builds a footer entry for `action` from its primary key.
    pub fn keybind(&self, context: KeyContext, action: Action, label: &'static str) -> Option<Keybind> {
        self.get(context, action)
            .map(|key| Keybind::new(key, action, label))
    }
}

pub trait HasCommands {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(KeyCode::Char('q'), KeyModifiers::NONE, Action::Quit ; "q quits")]
    #[test_case(KeyCode::Char('c'), KeyModifiers::CONTROL, Action::Quit ; "ctrl c quits")]
    #[test_case(KeyCode::Char('j'), KeyModifiers::NONE, Action::NavigateDown ; "j moves down")]
    #[test_case(KeyCode::Up, KeyModifiers::NONE, Action::NavigateUp ; "arrow moves up")]
    #[test_case(KeyCode::Char('G'), KeyModifiers::SHIFT, Action::SelectLast ; "shift g selects last")]
    #[test_case(KeyCode::Char('d'), KeyModifiers::NONE, Action::DeleteEmployee ; "d deletes")]
    #[test_case(KeyCode::Char('n'), KeyModifiers::NONE, Action::OpenCreate ; "n opens create")]
    #[test_case(KeyCode::Char('/'), KeyModifiers::NONE, Action::OpenSearch ; "slash opens search")]
    #[test_case(KeyCode::Char('h'), KeyModifiers::NONE, Action::HighestSalary ; "h highest salary")]
    #[test_case(KeyCode::Char('t'), KeyModifiers::NONE, Action::TopTen ; "t top ten")]
    #[test_case(KeyCode::Enter, KeyModifiers::NONE, Action::ShowDetails ; "enter shows details")]
    fn test_roster_bindings(code: KeyCode, modifiers: KeyModifiers, expected: Action) {
        let registry = CommandRegistry::new();
        let action = registry.find_action(KeyContext::Roster, KeyEvent::new(code, modifiers));
        assert_eq!(action, Some(expected));
    }

    #[test_case(KeyCode::Tab, KeyModifiers::NONE, Some(Action::NextField) ; "tab next field")]
    #[test_case(KeyCode::BackTab, KeyModifiers::SHIFT, Some(Action::PreviousField) ; "shift tab previous field")]
    #[test_case(KeyCode::Enter, KeyModifiers::NONE, Some(Action::Submit) ; "enter submits")]
    #[test_case(KeyCode::Esc, KeyModifiers::NONE, Some(Action::Cancel) ; "esc cancels")]
    #[test_case(KeyCode::Char('q'), KeyModifiers::NONE, None ; "q is text in dialogs")]
    #[test_case(KeyCode::Char('j'), KeyModifiers::NONE, None ; "j is text in dialogs")]
    fn test_dialog_bindings(code: KeyCode, modifiers: KeyModifiers, expected: Option<Action>) {
        let registry = CommandRegistry::new();
        let action = registry.find_action(KeyContext::Dialog, KeyEvent::new(code, modifiers));
        assert_eq!(action, expected);
    }

    #[test]
    fn test_primary_key_used_for_display() {
        let registry = CommandRegistry::new();
        let key = registry.get(KeyContext::Roster, Action::Quit);
        assert_eq!(key, Some(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
    }
}
