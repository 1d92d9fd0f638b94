//! Business logic services
//!
//! The CRUD resources carry no business rules, so each service delegates
//! straight to its repository.

pub mod books;
pub mod loans;
pub mod members;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub loans: loans::LoansService,
    pub members: members::MembersService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: books::BooksService::new(repository.clone()),
            loans: loans::LoansService::new(repository.clone()),
            members: members::MembersService::new(repository),
        }
    }
}
