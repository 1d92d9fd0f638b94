//! Members repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::member::{CreateMember, Member, UpdateMember},
};

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Postgres>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all members belonging to the given owner, in store-native order
    pub async fn list_by_owner(&self, owner_id: i32) -> AppResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, Member>("SELECT * FROM members WHERE user_id = $1")
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create a member owned by the given user
    pub async fn create(&self, owner_id: i32, data: &CreateMember) -> AppResult<Member> {
        let row = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (user_id, name, gender, date_of_birth)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(&data.name)
        .bind(&data.gender)
        .bind(data.date_of_birth)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a member owned by the given user
    pub async fn update(&self, owner_id: i32, id: i32, data: UpdateMember) -> AppResult<Member> {
        let mut member = sqlx::query_as::<_, Member>(
            "SELECT * FROM members WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        member.apply_update(data);

        sqlx::query_as::<_, Member>(
            r#"
            UPDATE members
            SET name = $1, gender = $2, date_of_birth = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(&member.name)
        .bind(&member.gender)
        .bind(member.date_of_birth)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".to_string()))
    }

    /// Delete a member owned by the given user
    pub async fn delete(&self, owner_id: i32, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Member not found".to_string()));
        }
        Ok(())
    }
}
