//! Roster table widget.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState},
};

use crate::domain::entities::Employee;
use crate::presentation::ui::utils::{format_amount, format_optional};

#[derive(Debug, Clone, Copy)]
pub struct EmployeeTableStyle {
    pub border: Style,
    pub header: Style,
    pub selected: Style,
    pub empty: Style,
}

impl EmployeeTableStyle {
    #[must_use]
    pub fn with_accent(accent: Color) -> Self {
        Self {
            border: Style::default().fg(accent),
            header: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            selected: Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
            empty: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Default for EmployeeTableStyle {
    fn default() -> Self {
        Self::with_accent(Color::Cyan)
    }
}

pub struct EmployeeTable<'a> {
    employees: &'a [Employee],
    title: &'a str,
    show_email: bool,
    style: EmployeeTableStyle,
}

impl<'a> EmployeeTable<'a> {
    #[must_use]
    pub fn new(employees: &'a [Employee]) -> Self {
        Self {
            employees,
            title: "Employees",
            show_email: false,
            style: EmployeeTableStyle::default(),
        }
    }

    #[must_use]
    pub const fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    #[must_use]
    pub const fn show_email(mut self, show: bool) -> Self {
        self.show_email = show;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: EmployeeTableStyle) -> Self {
        self.style = style;
        self
    }

    fn header(&self) -> Row<'static> {
        let mut cells = vec!["Name", "Salary", "Age", "Title"];
        if self.show_email {
            cells.push("Email");
        }
        Row::new(cells).style(self.style.header)
    }

    fn widths(&self) -> Vec<Constraint> {
        let mut widths = vec![
            Constraint::Fill(2),
            Constraint::Length(12),
            Constraint::Length(5),
            Constraint::Fill(2),
        ];
        if self.show_email {
            widths.push(Constraint::Fill(3));
        }
        widths
    }

    fn row(&self, employee: &'a Employee) -> Row<'a> {
        let mut cells = vec![
            Cell::from(employee.name()),
            Cell::from(Line::from(format_optional(employee.salary(), format_amount)).right_aligned()),
            Cell::from(Line::from(format_optional(employee.age(), |age| age.to_string())).right_aligned()),
            Cell::from(employee.title()),
        ];
        if self.show_email {
            cells.push(Cell::from(employee.email().unwrap_or_default()));
        }
        Row::new(cells)
    }
}

impl StatefulWidget for EmployeeTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let title = format!(" {} ({}) ", self.title, self.employees.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.style.border)
            .title(title);

        if self.employees.is_empty() {
            let inner = block.inner(area);
            ratatui::widgets::Widget::render(block, area, buf);
            ratatui::widgets::Widget::render(
                Line::styled("No employees", self.style.empty).centered(),
                inner,
                buf,
            );
            return;
        }

        let rows: Vec<Row<'_>> = self.employees.iter().map(|e| self.row(e)).collect();
        let table = Table::new(rows, self.widths())
            .header(self.header())
            .block(block)
            .column_spacing(2)
            .row_highlight_style(self.style.selected)
            .highlight_symbol("> ");

        StatefulWidget::render(table, area, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|line| line.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_rows() {
        let employees = vec![
            Employee::new(1_u64, "Bob", Some(50_000), Some(41), "Engineer"),
            Employee::new(2_u64, "Alice", None, None, ""),
        ];
        let mut terminal = Terminal::new(TestBackend::new(70, 8)).unwrap();
        let mut state = TableState::default().with_selected(Some(0));

        terminal
            .draw(|frame| {
                frame.render_stateful_widget(
                    EmployeeTable::new(&employees).title("Employees"),
                    frame.area(),
                    &mut state,
                );
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Employees (2)"));
        assert!(text.contains("Name"));
        assert!(text.contains("Bob"));
        assert!(text.contains("> "));
        assert!(text.contains("50,000"));
        assert!(text.contains("Alice"));
        assert!(!text.contains("Email"));
    }

    #[test]
    fn test_email_column_optional() {
        let employees =
            vec![Employee::new(1_u64, "Bob", Some(1), Some(2), "Eng").with_email("bob@example.com")];
        let mut terminal = Terminal::new(TestBackend::new(90, 6)).unwrap();
        let mut state = TableState::default();

        terminal
            .draw(|frame| {
                frame.render_stateful_widget(
                    EmployeeTable::new(&employees).show_email(true),
                    frame.area(),
                    &mut state,
                );
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Email"));
        assert!(text.contains("bob@example.com"));
    }

    #[test]
    fn test_empty_placeholder() {
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        let mut state = TableState::default();

        terminal
            .draw(|frame| {
                frame.render_stateful_widget(EmployeeTable::new(&[]), frame.area(), &mut state);
            })
            .unwrap();

        assert!(buffer_text(&terminal).contains("No employees"));
    }
}
