//! Loans repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::loan::{CreateLoan, Loan, UpdateLoan},
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all loans belonging to the given owner, in store-native order
    pub async fn list_by_owner(&self, owner_id: i32) -> AppResult<Vec<Loan>> {
        let rows = sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE user_id = $1")
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create a loan owned by the given user
    pub async fn create(&self, owner_id: i32, data: &CreateLoan) -> AppResult<Loan> {
        let row = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (user_id, book, loanee, due_date)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(&data.book)
        .bind(&data.loanee)
        .bind(data.due_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a loan owned by the given user
    pub async fn update(&self, owner_id: i32, id: i32, data: UpdateLoan) -> AppResult<Loan> {
        let mut loan = sqlx::query_as::<_, Loan>(
            "SELECT * FROM loans WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Loan not found".to_string()))?;

        loan.apply_update(data);

        sqlx::query_as::<_, Loan>(
            r#"
            UPDATE loans
            SET book = $1, loanee = $2, due_date = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(&loan.book)
        .bind(&loan.loanee)
        .bind(loan.due_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Loan not found".to_string()))
    }

    /// Delete a loan owned by the given user
    pub async fn delete(&self, owner_id: i32, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM loans WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Loan not found".to_string()));
        }
        Ok(())
    }
}
