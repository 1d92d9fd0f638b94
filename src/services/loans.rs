//! Loans service

use crate::{
    error::AppResult,
    models::loan::{CreateLoan, Loan, UpdateLoan},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, owner_id: i32) -> AppResult<Vec<Loan>> {
        self.repository.loans.list_by_owner(owner_id).await
    }

    pub async fn create(&self, owner_id: i32, data: &CreateLoan) -> AppResult<Loan> {
        self.repository.loans.create(owner_id, data).await
    }

    pub async fn update(&self, owner_id: i32, id: i32, data: UpdateLoan) -> AppResult<Loan> {
        self.repository.loans.update(owner_id, id, data).await
    }

    pub async fn delete(&self, owner_id: i32, id: i32) -> AppResult<()> {
        self.repository.loans.delete(owner_id, id).await
    }
}
