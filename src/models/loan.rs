//! Loan model and request payloads

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Loan record, owned by a single user
///
/// `book` is free text, not a reference into the books table; the original
/// data model never linked the two.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: i32,
    /// Identity of the owning user; immutable after creation
    pub user_id: i32,
    pub book: String,
    pub loanee: String,
    pub due_date: NaiveDate,
}

/// Create loan payload; book, loanee and dueDate are store-required
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoan {
    pub book: Option<String>,
    pub loanee: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Partial update payload for a loan
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLoan {
    pub book: Option<String>,
    pub loanee: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl Loan {
    /// Merge a partial update; empty strings and absent fields keep the
    /// stored value.
    pub fn apply_update(&mut self, update: UpdateLoan) {
        if let Some(book) = update.book.filter(|v| !v.is_empty()) {
            self.book = book;
        }
        if let Some(loanee) = update.loanee.filter(|v| !v.is_empty()) {
            self.loanee = loanee;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loan() -> Loan {
        Loan {
            id: 1,
            user_id: 7,
            book: "Dune".to_string(),
            loanee: "Paul".to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        }
    }

    #[test]
    fn update_replaces_supplied_fields() {
        let mut l = loan();
        l.apply_update(UpdateLoan {
            loanee: Some("Chani".to_string()),
            due_date: NaiveDate::from_ymd_opt(2025, 7, 1),
            ..Default::default()
        });
        assert_eq!(l.loanee, "Chani");
        assert_eq!(l.due_date, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert_eq!(l.book, "Dune");
    }

    #[test]
    fn empty_string_keeps_prior_value() {
        let mut l = loan();
        l.apply_update(UpdateLoan {
            book: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(l.book, "Dune");
    }
}
