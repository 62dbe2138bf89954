//! Draft employee staged for creation.

use serde::{Deserialize, Serialize};

/// Editable field of a [`DraftEmployee`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraftField {
    Name,
    Salary,
    Age,
    Title,
}

impl DraftField {
    /// Form order of the fields.
    pub const ALL: [Self; 4] = [Self::Name, Self::Salary, Self::Age, Self::Title];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Salary => "Salary",
            Self::Age => "Age",
            Self::Title => "Title",
        }
    }

    /// Whether the field takes a number.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Salary | Self::Age)
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Salary,
            Self::Salary => Self::Age,
            Self::Age => Self::Title,
            Self::Title => Self::Name,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Title,
            Self::Salary => Self::Name,
            Self::Age => Self::Salary,
            Self::Title => Self::Age,
        }
    }
}

/// Uncommitted input for a pending create operation.
///
/// Values are kept as entered; nothing is validated client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftEmployee {
    pub name: String,
    pub salary: String,
    pub age: String,
    pub title: String,
}

impl DraftEmployee {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Salary => &self.salary,
            DraftField::Age => &self.age,
            DraftField::Title => &self.title,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Salary => self.salary = value,
            DraftField::Age => self.age = value,
            DraftField::Title => self.title = value,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        DraftField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Resets every field to empty text.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut draft = DraftEmployee::new();
        assert!(draft.is_empty());

        draft.set(DraftField::Name, "A");
        draft.set(DraftField::Salary, "100");
        assert_eq!(draft.get(DraftField::Name), "A");
        assert_eq!(draft.get(DraftField::Salary), "100");
        assert!(!draft.is_empty());

        draft.clear();
        assert_eq!(draft, DraftEmployee::default());
    }

    #[test]
    fn test_field_cycle() {
        let mut field = DraftField::Name;
        for _ in 0..DraftField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, DraftField::Name);
        assert_eq!(DraftField::Name.previous(), DraftField::Title);
        assert!(DraftField::Age.is_numeric());
        assert!(!DraftField::Title.is_numeric());
    }
}
