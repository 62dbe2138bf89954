//! Main application orchestrator.

use std::future::Future;
use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::application::RosterUseCase;
use crate::domain::entities::{Employee, EmployeeId};
use crate::domain::errors::ApiError;
use crate::domain::ports::EmployeePort;
use crate::infrastructure::config::UiConfig;
use crate::presentation::events::EventHandler;
use crate::presentation::ui::{RosterKeyResult, RosterScreen, RosterScreenState};

/// Completed request, delivered back to the event loop.
#[derive(Debug)]
enum Action {
    RosterLoaded(Vec<Employee>),
    EmployeeDeleted(EmployeeId),
    EmployeeCreated(Employee),
    SearchCompleted(Vec<Employee>),
    HighestSalaryLoaded(i64),
    TopTenLoaded(Vec<String>),
    DetailsLoaded(Employee),
    /// The request ended with nothing to apply.
    Unapplied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

pub struct App {
    state: AppState,
    screen: RosterScreenState,
    use_case: RosterUseCase,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    #[must_use]
    pub fn new(employee_port: Arc<dyn EmployeePort>, ui: &UiConfig) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::Running,
            screen: RosterScreenState::new(ui),
            use_case: RosterUseCase::new(employee_port),
            action_tx,
            action_rx,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal or reading its events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.load_roster();
        self.run_event_loop(terminal).await?;

        info!(
            in_flight = self.screen.in_flight(),
            "Application exiting normally"
        );
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                event = terminal_events.next() => {
                    match event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(&event) {
                                terminal.draw(|frame| self.render(frame))?;
                            }
                        }
                        Some(Err(e)) => return Err(e.into()),
                        None => {
                            debug!("Terminal event stream closed");
                            self.state = AppState::Exiting;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        frame.render_stateful_widget(RosterScreen::new(), frame.area(), &mut self.screen);
    }

    /// Returns whether the screen needs a redraw.
    fn handle_terminal_event(&mut self, event: &Event) -> bool {
        if EventHandler::is_resize_event(event) {
            return true;
        }
        match EventHandler::key_press(event) {
            Some(key) => {
                self.handle_key(key);
                true
            }
            None => false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.screen.handle_key(key) {
            RosterKeyResult::Consumed | RosterKeyResult::Ignored => {}
            RosterKeyResult::Quit => {
                self.state = AppState::Exiting;
            }
            RosterKeyResult::Refresh => self.load_roster(),
            RosterKeyResult::Delete(id) => {
                let use_case = self.use_case.clone();
                self.spawn_request("delete", async move {
                    Ok(use_case
                        .delete(id)
                        .await
                        .map_or(Action::Unapplied, Action::EmployeeDeleted))
                });
            }
            RosterKeyResult::Create(draft) => {
                let use_case = self.use_case.clone();
                self.spawn_request("create", async move {
                    Ok(use_case
                        .create(&draft)
                        .await
                        .map_or(Action::Unapplied, Action::EmployeeCreated))
                });
            }
            RosterKeyResult::Search(query) => {
                let use_case = self.use_case.clone();
                self.spawn_request("search", async move {
                    use_case.search(&query).await.map(Action::SearchCompleted)
                });
            }
            RosterKeyResult::HighestSalary => {
                let use_case = self.use_case.clone();
                self.spawn_request("highest_salary", async move {
                    use_case
                        .highest_salary()
                        .await
                        .map(Action::HighestSalaryLoaded)
                });
            }
            RosterKeyResult::TopTen => {
                let use_case = self.use_case.clone();
                self.spawn_request("top_ten", async move {
                    use_case.top_ten().await.map(Action::TopTenLoaded)
                });
            }
            RosterKeyResult::ShowDetails(id) => {
                let use_case = self.use_case.clone();
                self.spawn_request("details", async move {
                    use_case.details(&id).await.map(Action::DetailsLoaded)
                });
            }
        }
    }

    fn load_roster(&mut self) {
        let use_case = self.use_case.clone();
        self.spawn_request("load_roster", async move {
            use_case.load_roster().await.map(Action::RosterLoaded)
        });
    }

    /// Runs a request on its own task and reports the outcome over the action
    /// channel. Failures that reach this point are logged and leave the view
    /// state as it was.
    fn spawn_request<F>(&mut self, operation: &'static str, request: F)
    where
        F: Future<Output = Result<Action, ApiError>> + Send + 'static,
    {
        self.screen.request_started();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let action = request.await.unwrap_or_else(|e| {
                error!(operation, error = %e, "Unhandled request failure");
                Action::Unapplied
            });
            if tx.send(action).is_err() {
                debug!(operation, "Request finished after shutdown");
            }
        });
    }

    fn handle_action(&mut self, action: Action) {
        self.screen.request_finished();

        match action {
            Action::RosterLoaded(employees) => {
                self.screen.update(move |roster| roster.roster_loaded(employees));
            }
            Action::EmployeeDeleted(id) => {
                self.screen.update(|roster| {
                    let removed = roster.employee_deleted(&id);
                    debug!(id = %id, removed, "Applied deletion");
                });
            }
            Action::EmployeeCreated(employee) => {
                self.screen.update(move |roster| roster.employee_created(employee));
            }
            Action::SearchCompleted(results) => {
                self.screen.update(move |roster| roster.search_completed(results));
            }
            Action::HighestSalaryLoaded(salary) => {
                self.screen.update(|roster| roster.highest_salary_loaded(salary));
            }
            Action::TopTenLoaded(names) => {
                self.screen.update(move |roster| roster.top_ten_loaded(names));
            }
            Action::DetailsLoaded(employee) => {
                self.screen.update(move |roster| roster.details_loaded(employee));
            }
            Action::Unapplied => {}
        }
    }
}
