//! Books service

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, owner_id: i32) -> AppResult<Vec<Book>> {
        self.repository.books.list_by_owner(owner_id).await
    }

    pub async fn create(&self, owner_id: i32, data: &CreateBook) -> AppResult<Book> {
        self.repository.books.create(owner_id, data).await
    }

    pub async fn update(&self, owner_id: i32, id: i32, data: UpdateBook) -> AppResult<Book> {
        self.repository.books.update(owner_id, id, data).await
    }

    pub async fn delete(&self, owner_id: i32, id: i32) -> AppResult<()> {
        self.repository.books.delete(owner_id, id).await
    }
}
