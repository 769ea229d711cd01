//! Repository trait and error types.

pub mod books;
pub mod error;

pub use books::BookRepository;
pub use error::{ErrorContext, RepositoryError, RepositoryResult};
