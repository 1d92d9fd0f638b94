//! Data models for Librarium

pub mod auth;
pub mod book;
pub mod loan;
pub mod member;

// Re-export commonly used types
pub use auth::Claims;
pub use book::Book;
pub use loan::Loan;
pub use member::Member;
