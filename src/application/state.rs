//! Roster view state and its transitions.
//!
//! Every user-visible piece of state lives in [`RosterState`]. Transitions are
//! plain methods so the whole flow can be exercised without a terminal; the
//! presentation layer only reads from it and calls these methods once a
//! request has completed.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{DraftEmployee, DraftField, Employee, EmployeeId};

/// Visibility of a dialog together with the data it shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "payload", rename_all = "lowercase")]
pub enum Modal<T> {
    Closed,
    Open(T),
}

impl<T> Modal<T> {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[must_use]
    pub const fn payload(&self) -> Option<&T> {
        match self {
            Self::Open(value) => Some(value),
            Self::Closed => None,
        }
    }

    pub fn open(&mut self, payload: T) {
        *self = Self::Open(payload);
    }

    /// Closes the dialog and hands back whatever it was showing.
    pub fn close(&mut self) -> Option<T> {
        match std::mem::replace(self, Self::Closed) {
            Self::Open(value) => Some(value),
            Self::Closed => None,
        }
    }
}

impl<T> Default for Modal<T> {
    fn default() -> Self {
        Self::Closed
    }
}

/// Identifies one of the roster dialogs.
///
/// Variants are declared in stacking order: later dialogs draw over earlier
/// ones and take keyboard input first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModalKind {
    Create,
    Search,
    SearchResults,
    HighestSalary,
    TopTen,
    Details,
}

impl ModalKind {
    pub const ALL: [Self; 6] = [
        Self::Create,
        Self::Search,
        Self::SearchResults,
        Self::HighestSalary,
        Self::TopTen,
        Self::Details,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Create => "Create Employee",
            Self::Search => "Search Employee",
            Self::SearchResults => "Search Results",
            Self::HighestSalary => "Highest Salary",
            Self::TopTen => "Top 10 Highest Earning Employees",
            Self::Details => "Employee Details",
        }
    }
}

/// All view state of the roster screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterState {
    roster: Vec<Employee>,
    draft: DraftEmployee,
    search_query: String,
    create_dialog: Modal<()>,
    search_dialog: Modal<()>,
    search_results: Modal<Vec<Employee>>,
    highest_salary: Modal<i64>,
    top_ten: Modal<Vec<String>>,
    details: Modal<Employee>,
}

impl RosterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn roster(&self) -> &[Employee] {
        &self.roster
    }

    /// Rows the table shows: non-empty search results win over the roster.
    #[must_use]
    pub fn displayed(&self) -> &[Employee] {
        match self.search_results.payload() {
            Some(results) if !results.is_empty() => results,
            _ => &self.roster,
        }
    }

    /// Whether the table is currently showing search results.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.search_results
            .payload()
            .is_some_and(|results| !results.is_empty())
    }

    #[must_use]
    pub const fn draft(&self) -> &DraftEmployee {
        &self.draft
    }

    pub fn set_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    #[must_use]
    pub const fn search_results(&self) -> &Modal<Vec<Employee>> {
        &self.search_results
    }

    #[must_use]
    pub const fn highest_salary(&self) -> &Modal<i64> {
        &self.highest_salary
    }

    #[must_use]
    pub const fn top_ten(&self) -> &Modal<Vec<String>> {
        &self.top_ten
    }

    #[must_use]
    pub const fn details(&self) -> &Modal<Employee> {
        &self.details
    }

    /// Replaces the roster with a freshly loaded list.
    pub fn roster_loaded(&mut self, employees: Vec<Employee>) {
        self.roster = employees;
    }

    /// Drops records with the given id from the roster and from open search
    /// results. Returns how many roster rows were removed.
    pub fn employee_deleted(&mut self, id: &EmployeeId) -> usize {
        let before = self.roster.len();
        self.roster.retain(|employee| employee.id() != id);
        if let Modal::Open(results) = &mut self.search_results {
            results.retain(|employee| employee.id() != id);
        }
        before - self.roster.len()
    }

    /// Appends the server's record, closes the create dialog and resets the draft.
    pub fn employee_created(&mut self, employee: Employee) {
        self.roster.push(employee);
        self.create_dialog.close();
        self.draft.clear();
    }

    /// Stores search results and opens the results dialog, even for no matches.
    pub fn search_completed(&mut self, results: Vec<Employee>) {
        self.search_results.open(results);
    }

    pub fn highest_salary_loaded(&mut self, salary: i64) {
        self.highest_salary.open(salary);
    }

    /// Opens the top-ten dialog. An empty list leaves it closed.
    pub fn top_ten_loaded(&mut self, names: Vec<String>) {
        if names.is_empty() {
            self.top_ten.close();
        } else {
            self.top_ten.open(names);
        }
    }

    pub fn details_loaded(&mut self, employee: Employee) {
        self.details.open(employee);
    }

    pub fn open_create(&mut self) {
        self.create_dialog.open(());
    }

    pub fn open_search(&mut self) {
        self.search_dialog.open(());
    }

    #[must_use]
    pub const fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Create => self.create_dialog.is_open(),
            ModalKind::Search => self.search_dialog.is_open(),
            ModalKind::SearchResults => self.search_results.is_open(),
            ModalKind::HighestSalary => self.highest_salary.is_open(),
            ModalKind::TopTen => self.top_ten.is_open(),
            ModalKind::Details => self.details.is_open(),
        }
    }

    /// Closes a dialog and clears the state that drives it.
    ///
    /// Cancelling the create dialog discards the draft. The search query
    /// survives closing its dialog.
    pub fn close(&mut self, kind: ModalKind) {
        match kind {
            ModalKind::Create => {
                self.create_dialog.close();
                self.draft.clear();
            }
            ModalKind::Search => {
                self.search_dialog.close();
            }
            ModalKind::SearchResults => {
                self.search_results.close();
            }
            ModalKind::HighestSalary => {
                self.highest_salary.close();
            }
            ModalKind::TopTen => {
                self.top_ten.close();
            }
            ModalKind::Details => {
                self.details.close();
            }
        }
    }

    /// Open dialogs in stacking order, bottom first.
    #[must_use]
    pub fn open_modals(&self) -> Vec<ModalKind> {
        ModalKind::ALL
            .into_iter()
            .filter(|kind| self.is_open(*kind))
            .collect()
    }

    /// The dialog that receives keyboard input, if any.
    #[must_use]
    pub fn top_modal(&self) -> Option<ModalKind> {
        ModalKind::ALL
            .into_iter()
            .rev()
            .find(|kind| self.is_open(*kind))
    }
}
