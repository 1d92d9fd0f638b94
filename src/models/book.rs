//! Book model and request payloads

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book record, owned by a single user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    /// Identity of the owning user; immutable after creation
    pub user_id: i32,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub isbn: Option<String>,
    pub date_of_publication: Option<NaiveDate>,
    /// Number of copies held
    pub copies: i32,
}

/// Create book payload
///
/// All fields are optional at the wire; title, author and copies are
/// required by the store schema, so a missing one fails the INSERT rather
/// than the handler.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub isbn: Option<String>,
    pub date_of_publication: Option<NaiveDate>,
    pub copies: Option<i32>,
}

/// Partial update payload for a book
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub isbn: Option<String>,
    pub date_of_publication: Option<NaiveDate>,
    pub copies: Option<i32>,
}

impl Book {
    /// Merge a partial update into this record.
    ///
    /// A field is replaced only when the incoming value is non-empty
    /// (strings), non-zero (copies) or present (dates); anything else keeps
    /// the stored value. In particular `copies` cannot be set to 0 through
    /// an update.
    pub fn apply_update(&mut self, update: UpdateBook) {
        if let Some(title) = update.title.filter(|v| !v.is_empty()) {
            self.title = title;
        }
        if let Some(author) = update.author.filter(|v| !v.is_empty()) {
            self.author = author;
        }
        if let Some(genre) = update.genre.filter(|v| !v.is_empty()) {
            self.genre = Some(genre);
        }
        if let Some(isbn) = update.isbn.filter(|v| !v.is_empty()) {
            self.isbn = Some(isbn);
        }
        if let Some(date) = update.date_of_publication {
            self.date_of_publication = Some(date);
        }
        if let Some(copies) = update.copies.filter(|v| *v != 0) {
            self.copies = copies;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book {
            id: 1,
            user_id: 7,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            genre: None,
            isbn: None,
            date_of_publication: None,
            copies: 3,
        }
    }

    #[test]
    fn update_replaces_supplied_fields() {
        let mut book = dune();
        book.apply_update(UpdateBook {
            title: Some("Dune Messiah".to_string()),
            copies: Some(5),
            ..Default::default()
        });
        assert_eq!(book.title, "Dune Messiah");
        assert_eq!(book.copies, 5);
        assert_eq!(book.author, "Herbert");
    }

    #[test]
    fn absent_fields_keep_prior_values() {
        let mut book = dune();
        book.apply_update(UpdateBook::default());
        assert_eq!(book.title, "Dune");
        assert_eq!(book.copies, 3);
    }

    #[test]
    fn empty_string_keeps_prior_value() {
        let mut book = dune();
        book.apply_update(UpdateBook {
            title: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(book.title, "Dune");
    }

    #[test]
    fn zero_copies_keeps_prior_value() {
        let mut book = dune();
        book.apply_update(UpdateBook {
            copies: Some(0),
            ..Default::default()
        });
        assert_eq!(book.copies, 3);
    }

    #[test]
    fn owner_is_never_touched_by_update() {
        let mut book = dune();
        book.apply_update(UpdateBook {
            title: Some("Children of Dune".to_string()),
            ..Default::default()
        });
        assert_eq!(book.user_id, 7);
    }
}
