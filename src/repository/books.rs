//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books belonging to the given owner, in store-native order
    pub async fn list_by_owner(&self, owner_id: i32) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE user_id = $1")
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create a book owned by the given user
    ///
    /// Required fields (title, author, copies) are enforced by the NOT NULL
    /// schema; a missing one surfaces as a database error.
    pub async fn create(&self, owner_id: i32, data: &CreateBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (user_id, title, author, genre, isbn, date_of_publication, copies)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.genre)
        .bind(&data.isbn)
        .bind(data.date_of_publication)
        .bind(data.copies)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a book owned by the given user
    ///
    /// Read-merge-write with no version check; concurrent updates to the
    /// same id are last-write-wins.
    pub async fn update(&self, owner_id: i32, id: i32, data: UpdateBook) -> AppResult<Book> {
        let mut book = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        book.apply_update(data);

        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $1, author = $2, genre = $3, isbn = $4,
                date_of_publication = $5, copies = $6
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.genre)
        .bind(&book.isbn)
        .bind(book.date_of_publication)
        .bind(book.copies)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Delete a book owned by the given user
    pub async fn delete(&self, owner_id: i32, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Book not found".to_string()));
        }
        Ok(())
    }
}
