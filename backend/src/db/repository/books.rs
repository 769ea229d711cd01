//! Book repository trait.
//!
//! Abstract interface over the book store. Implementations live in
//! `db::repositories` (Postgres via Diesel, in-memory local backend).

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Book, BookId, BookQuery};

/// Repository trait for book persistence.
///
/// Each method maps to exactly one store round trip; there is no caching or
/// cross-request state in front of the store.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Check that the store is reachable.
    ///
    /// # Returns
    /// * `Ok(true)` when the store answers, `Err(RepositoryError)` otherwise
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Persist a new book and return it with the store-assigned identifier.
    ///
    /// The name is stored as-is; an empty string is a valid name.
    async fn create_book(&self, name: &str) -> RepositoryResult<Book>;

    /// List books matching the query, restricted to its pagination window.
    ///
    /// Results are ordered by ascending identifier so pages are stable.
    async fn list_books(&self, query: &BookQuery) -> RepositoryResult<Vec<Book>>;

    /// Fetch a single book by identifier.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` when no such record exists
    async fn get_book(&self, id: BookId) -> RepositoryResult<Book>;

    /// Replace the name of an existing book, preserving its identifier.
    ///
    /// # Returns
    /// * `Ok(Book)` - the updated record
    /// * `Err(RepositoryError::NotFound)` when no such record exists
    async fn update_book(&self, id: BookId, name: &str) -> RepositoryResult<Book>;

    /// Remove a book and return the deleted record.
    ///
    /// Identifiers are never reused after deletion.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` when no such record exists
    async fn delete_book(&self, id: BookId) -> RepositoryResult<Book>;
}
