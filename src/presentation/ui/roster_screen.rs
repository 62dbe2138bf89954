//! Roster screen: the employee table and its dialogs.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, StatefulWidget, TableState, Widget},
};
use tracing::debug;

use crate::application::{ModalKind, RosterState};
use crate::domain::entities::{DraftEmployee, DraftField, Employee, EmployeeId};
use crate::domain::keybinding::{Action, Keybind};
use crate::infrastructure::config::UiConfig;
use crate::presentation::commands::{CommandRegistry, HasCommands, KeyContext};
use crate::presentation::events::EventHandler;
use crate::presentation::ui::utils::{
    centered_fixed_height, format_amount, format_optional, parse_color,
};
use crate::presentation::widgets::{
    EmployeeForm, EmployeeTable, EmployeeTableStyle, FooterBar, FooterBarStyle, TextInput,
};
use crate::{NAME, VERSION};

const DIALOG_WIDTH_PERCENT: u16 = 60;
const MAX_LIST_ROWS: usize = 15;

/// What the app loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterKeyResult {
    Consumed,
    Ignored,
    Quit,
    Refresh,
    Delete(EmployeeId),
    ShowDetails(EmployeeId),
    Create(DraftEmployee),
    Search(String),
    HighestSalary,
    TopTen,
}

/// Roster view state plus what only the terminal needs: selection, form
/// focus and the in-flight request count.
pub struct RosterScreenState {
    roster: RosterState,
    table_state: TableState,
    create_form: EmployeeForm,
    search_input: TextInput,
    commands: CommandRegistry,
    in_flight: usize,
    accent: Color,
    show_email: bool,
}

impl RosterScreenState {
    #[must_use]
    pub fn new(ui: &UiConfig) -> Self {
        let mut search_input = TextInput::new("Search").placeholder("Search String");
        search_input.set_focused(true);

        Self {
            roster: RosterState::new(),
            table_state: TableState::default(),
            create_form: EmployeeForm::new(),
            search_input,
            commands: CommandRegistry::new(),
            in_flight: 0,
            accent: parse_color(&ui.accent_color, Color::Cyan),
            show_email: ui.show_email,
        }
    }

    #[must_use]
    pub const fn roster(&self) -> &RosterState {
        &self.roster
    }

    /// Applies a transition to the view state and realigns selection and inputs.
    pub fn update(&mut self, transition: impl FnOnce(&mut RosterState)) {
        transition(&mut self.roster);
        self.create_form.sync_from(self.roster.draft());
        if self.search_input.value() != self.roster.search_query() {
            self.search_input.set_value(self.roster.search_query());
        }
        self.clamp_selection();
    }

    pub fn request_started(&mut self) {
        self.in_flight += 1;
    }

    pub fn request_finished(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    #[must_use]
    pub fn selected_employee(&self) -> Option<&Employee> {
        self.table_state
            .selected()
            .and_then(|index| self.roster.displayed().get(index))
    }

    fn clamp_selection(&mut self) {
        let len = self.roster.displayed().len();
        let selected = match self.table_state.selected() {
            _ if len == 0 => None,
            None => Some(0),
            Some(index) => Some(index.min(len - 1)),
        };
        self.table_state.select(selected);
    }

    fn select_offset(&mut self, down: bool) {
        let len = self.roster.displayed().len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let next = if down {
            (current + 1).min(len - 1)
        } else {
            current.saturating_sub(1)
        };
        self.table_state.select(Some(next));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> RosterKeyResult {
        if EventHandler::is_quit_event(&key) {
            return RosterKeyResult::Quit;
        }

        match self.roster.top_modal() {
            None => self.handle_table_key(key),
            Some(ModalKind::Create) => self.handle_create_key(key),
            Some(ModalKind::Search) => self.handle_search_key(key),
            Some(kind) => self.handle_info_key(kind, key),
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) -> RosterKeyResult {
        let Some(action) = self.commands.find_action(KeyContext::Roster, key) else {
            return RosterKeyResult::Ignored;
        };

        match action {
            Action::Quit => RosterKeyResult::Quit,
            Action::NavigateUp => {
                self.select_offset(false);
                RosterKeyResult::Consumed
            }
            Action::NavigateDown => {
                self.select_offset(true);
                RosterKeyResult::Consumed
            }
            Action::SelectFirst => {
                if !self.roster.displayed().is_empty() {
                    self.table_state.select(Some(0));
                }
                RosterKeyResult::Consumed
            }
            Action::SelectLast => {
                let len = self.roster.displayed().len();
                if len > 0 {
                    self.table_state.select(Some(len - 1));
                }
                RosterKeyResult::Consumed
            }
            Action::Refresh => RosterKeyResult::Refresh,
            Action::DeleteEmployee => self
                .selected_employee()
                .map_or(RosterKeyResult::Consumed, |employee| {
                    RosterKeyResult::Delete(employee.id().clone())
                }),
            Action::ShowDetails => self
                .selected_employee()
                .map_or(RosterKeyResult::Consumed, |employee| {
                    RosterKeyResult::ShowDetails(employee.id().clone())
                }),
            Action::OpenCreate => {
                self.roster.open_create();
                self.create_form.set_focus(DraftField::Name);
                RosterKeyResult::Consumed
            }
            Action::OpenSearch => {
                self.roster.open_search();
                RosterKeyResult::Consumed
            }
            Action::HighestSalary => RosterKeyResult::HighestSalary,
            Action::TopTen => RosterKeyResult::TopTen,
            Action::NextField | Action::PreviousField | Action::Submit | Action::Cancel => {
                RosterKeyResult::Ignored
            }
        }
    }

    fn handle_create_key(&mut self, key: KeyEvent) -> RosterKeyResult {
        match self.commands.find_action(KeyContext::Dialog, key) {
            Some(Action::Cancel) => {
                self.update(|roster| roster.close(ModalKind::Create));
                RosterKeyResult::Consumed
            }
            Some(Action::NextField) => {
                self.create_form.focus_next();
                RosterKeyResult::Consumed
            }
            Some(Action::PreviousField) => {
                self.create_form.focus_previous();
                RosterKeyResult::Consumed
            }
            Some(Action::Submit) => RosterKeyResult::Create(self.roster.draft().clone()),
            _ => match self.create_form.handle_edit_key(key) {
                Some((field, value)) => {
                    self.roster.set_draft_field(field, value);
                    RosterKeyResult::Consumed
                }
                None => RosterKeyResult::Ignored,
            },
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> RosterKeyResult {
        match self.commands.find_action(KeyContext::Dialog, key) {
            Some(Action::Cancel) => {
                self.update(|roster| roster.close(ModalKind::Search));
                RosterKeyResult::Consumed
            }
            Some(Action::Submit) => RosterKeyResult::Search(self.roster.search_query().to_string()),
            _ => {
                if self.search_input.handle_edit_key(key) {
                    self.roster.set_search_query(self.search_input.value());
                    RosterKeyResult::Consumed
                } else {
                    RosterKeyResult::Ignored
                }
            }
        }
    }

    fn handle_info_key(&mut self, kind: ModalKind, key: KeyEvent) -> RosterKeyResult {
        match self.commands.find_action(KeyContext::Dialog, key) {
            Some(Action::Cancel | Action::Submit) => {
                debug!(dialog = kind.title(), "Closing dialog");
                self.update(|roster| roster.close(kind));
                RosterKeyResult::Consumed
            }
            _ => RosterKeyResult::Ignored,
        }
    }

    fn table_title(&self) -> &'static str {
        if self.roster.is_filtered() {
            "Search Results"
        } else {
            "Employees"
        }
    }
}

impl HasCommands for RosterScreenState {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let entries: &[(KeyContext, Action, &'static str)] = match self.roster.top_modal() {
            None => &[
                (KeyContext::Roster, Action::ShowDetails, "Details"),
                (KeyContext::Roster, Action::OpenCreate, "New"),
                (KeyContext::Roster, Action::DeleteEmployee, "Delete"),
                (KeyContext::Roster, Action::OpenSearch, "Search"),
                (KeyContext::Roster, Action::HighestSalary, "Highest Salary"),
                (KeyContext::Roster, Action::TopTen, "Top 10"),
                (KeyContext::Roster, Action::Refresh, "Refresh"),
                (KeyContext::Roster, Action::Quit, "Quit"),
            ],
            Some(ModalKind::Create) => &[
                (KeyContext::Dialog, Action::NextField, "Next"),
                (KeyContext::Dialog, Action::PreviousField, "Previous"),
                (KeyContext::Dialog, Action::Submit, "Create"),
                (KeyContext::Dialog, Action::Cancel, "Close"),
            ],
            Some(ModalKind::Search) => &[
                (KeyContext::Dialog, Action::Submit, "Search"),
                (KeyContext::Dialog, Action::Cancel, "Close"),
            ],
            Some(_) => &[(KeyContext::Dialog, Action::Cancel, "Close")],
        };

        entries
            .iter()
            .filter_map(|(context, action, label)| registry.keybind(*context, *action, *label))
            .collect()
    }
}

pub struct RosterScreen;

impl RosterScreen {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for RosterScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl StatefulWidget for RosterScreen {
    type State = RosterScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [header_area, table_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        render_header(state, header_area, buf);
        render_table(state, table_area, buf);
        render_footer(state, footer_area, buf);

        let open = state.roster.open_modals();
        let top = open.last().copied();
        for kind in open {
            render_dialog(state, kind, Some(kind) == top, table_area, buf);
        }
    }
}

fn render_header(state: &RosterScreenState, area: Rect, buf: &mut Buffer) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {NAME} "),
            Style::default()
                .fg(Color::Black)
                .bg(state.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" v{VERSION}"), Style::default().fg(Color::DarkGray)),
    ]);
    Paragraph::new(line).render(area, buf);
}

fn render_table(state: &mut RosterScreenState, area: Rect, buf: &mut Buffer) {
    let table = EmployeeTable::new(state.roster.displayed())
        .title(state.table_title())
        .show_email(state.show_email)
        .style(EmployeeTableStyle::with_accent(state.accent));
    StatefulWidget::render(table, area, buf, &mut state.table_state);
}

fn render_footer(state: &RosterScreenState, area: Rect, buf: &mut Buffer) {
    let keybinds = state.get_commands(&state.commands);
    let in_flight = match state.in_flight {
        0 => None,
        1 => Some("1 request in flight ".to_string()),
        n => Some(format!("{n} requests in flight ")),
    };
    FooterBar::new(&keybinds)
        .right_info(in_flight.as_deref())
        .style(FooterBarStyle::with_accent(state.accent))
        .render(area, buf);
}

fn dialog_block(state: &RosterScreenState, kind: ModalKind, active: bool) -> Block<'static> {
    let border = if active {
        Style::default().fg(state.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} ", kind.title()))
}

fn list_height(rows: usize) -> u16 {
    u16::try_from(rows.clamp(1, MAX_LIST_ROWS)).unwrap_or(1) + 2
}

fn render_dialog(
    state: &RosterScreenState,
    kind: ModalKind,
    active: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let block = dialog_block(state, kind, active);
    let label = Style::default().fg(state.accent);

    match kind {
        ModalKind::Create => {
            let popup = centered_fixed_height(DIALOG_WIDTH_PERCENT, state.create_form.height() + 2, area);
            Clear.render(popup, buf);
            let inner = block.inner(popup);
            block.render(popup, buf);
            (&state.create_form).render(inner, buf);
        }
        ModalKind::Search => {
            let popup = centered_fixed_height(DIALOG_WIDTH_PERCENT, 5, area);
            Clear.render(popup, buf);
            let inner = block.inner(popup);
            block.render(popup, buf);
            (&state.search_input).render(inner, buf);
        }
        ModalKind::SearchResults => {
            let results = state.roster.search_results().payload().map_or(&[][..], Vec::as_slice);
            let lines: Vec<Line<'_>> = if results.is_empty() {
                vec![Line::styled("No matching employees", Style::default().fg(Color::DarkGray))]
            } else {
                results
                    .iter()
                    .map(|employee| {
                        Line::from(vec![
                            Span::raw(employee.name()),
                            Span::styled(
                                format!("  {}", format_optional(employee.salary(), format_amount)),
                                label,
                            ),
                        ])
                    })
                    .collect()
            };
            render_lines(block, lines, area, buf);
        }
        ModalKind::HighestSalary => {
            let salary = state.roster.highest_salary().payload().copied().unwrap_or_default();
            let lines = vec![Line::from(vec![
                Span::styled("Highest Salary: ", label),
                Span::raw(format_amount(salary)),
            ])];
            render_lines(block, lines, area, buf);
        }
        ModalKind::TopTen => {
            let names = state.roster.top_ten().payload().map_or(&[][..], Vec::as_slice);
            let lines = names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    Line::from(vec![
                        Span::styled(format!("{:>2}. ", i + 1), label),
                        Span::raw(name.as_str()),
                    ])
                })
                .collect();
            render_lines(block, lines, area, buf);
        }
        ModalKind::Details => {
            let Some(employee) = state.roster.details().payload() else {
                return;
            };
            let field = |name: &'static str, value: String| {
                Line::from(vec![Span::styled(format!("{name:<8}"), label), Span::raw(value)])
            };
            let lines = vec![
                field("Id", employee.id().to_string()),
                field("Name", employee.name().to_string()),
                field("Salary", format_optional(employee.salary(), format_amount)),
                field("Age", format_optional(employee.age(), |age| age.to_string())),
                field("Title", employee.title().to_string()),
                field("Email", employee.email().unwrap_or_default().to_string()),
            ];
            render_lines(block, lines, area, buf);
        }
    }
}

fn render_lines(block: Block<'_>, lines: Vec<Line<'_>>, area: Rect, buf: &mut Buffer) {
    let popup = centered_fixed_height(DIALOG_WIDTH_PERCENT, list_height(lines.len()), area);
    Clear.render(popup, buf);
    Paragraph::new(lines).block(block).render(popup, buf);
}
