//! Create-employee form.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use super::TextInput;
use crate::domain::entities::{DraftEmployee, DraftField};

/// Height of one labelled input including its border.
pub const FIELD_HEIGHT: u16 = 3;

/// One input per draft field with a single focused field.
#[derive(Debug, Clone)]
pub struct EmployeeForm {
    inputs: Vec<(DraftField, TextInput)>,
    focus: DraftField,
}

impl EmployeeForm {
    #[must_use]
    pub fn new() -> Self {
        let inputs = DraftField::ALL
            .into_iter()
            .map(|field| {
                let input = TextInput::new(field.label()).placeholder(field.label());
                let input = if field.is_numeric() { input.numeric() } else { input };
                (field, input)
            })
            .collect();

        let mut form = Self {
            inputs,
            focus: DraftField::Name,
        };
        form.set_focus(DraftField::Name);
        form
    }

    #[must_use]
    pub const fn focus(&self) -> DraftField {
        self.focus
    }

    pub fn set_focus(&mut self, field: DraftField) {
        self.focus = field;
        for (f, input) in &mut self.inputs {
            input.set_focused(*f == field);
        }
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_previous(&mut self) {
        self.set_focus(self.focus.previous());
    }

    fn input_mut(&mut self, field: DraftField) -> Option<&mut TextInput> {
        self.inputs
            .iter_mut()
            .find(|(f, _)| *f == field)
            .map(|(_, input)| input)
    }

    /// Feeds a key to the focused input and reports the new value if it changed.
    pub fn handle_edit_key(&mut self, key: KeyEvent) -> Option<(DraftField, String)> {
        let field = self.focus;
        let input = self.input_mut(field)?;
        input
            .handle_edit_key(key)
            .then(|| (field, input.value().to_string()))
    }

    /// Brings the inputs in line with the draft, leaving matching inputs untouched.
    pub fn sync_from(&mut self, draft: &DraftEmployee) {
        for (field, input) in &mut self.inputs {
            let value = draft.get(*field);
            if input.value() != value {
                input.set_value(value);
            }
        }
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        u16::try_from(self.inputs.len()).unwrap_or(u16::MAX) * FIELD_HEIGHT
    }
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &EmployeeForm {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical(self.inputs.iter().map(|_| Constraint::Length(FIELD_HEIGHT)))
            .split(area);
        for ((_, input), row) in self.inputs.iter().zip(rows.iter()) {
            input.render(*row, buf);
        }
    }
}
