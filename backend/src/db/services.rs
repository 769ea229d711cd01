//! Service layer for book operations.
//!
//! High-level functions over the repository trait. The HTTP layer calls
//! these instead of talking to a repository implementation directly, so the
//! same logic runs against any backend. Failures are logged here before
//! being propagated; no retries happen at this level (the Postgres backend
//! retries transient failures internally).

use log::error;

use crate::api::{Book, BookId, BookQuery};
use crate::db::repository::{BookRepository, RepositoryResult};

/// Check that the underlying store is reachable.
pub async fn health_check(repo: &dyn BookRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Create a new book with the given name.
///
/// No validation is performed; an empty name is stored as-is.
pub async fn create_book(repo: &dyn BookRepository, name: &str) -> RepositoryResult<Book> {
    repo.create_book(name).await.inspect_err(|e| {
        error!("Failed to create book: {}", e);
    })
}

/// List books matching the query within its pagination window.
pub async fn list_books(
    repo: &dyn BookRepository,
    query: &BookQuery,
) -> RepositoryResult<Vec<Book>> {
    repo.list_books(query).await.inspect_err(|e| {
        error!("Failed to list books: {}", e);
    })
}

/// Fetch a single book by identifier.
pub async fn get_book(repo: &dyn BookRepository, id: BookId) -> RepositoryResult<Book> {
    repo.get_book(id).await
}

/// Replace the name of an existing book.
pub async fn update_book(
    repo: &dyn BookRepository,
    id: BookId,
    name: &str,
) -> RepositoryResult<Book> {
    repo.update_book(id, name).await.inspect_err(|e| {
        if !e.is_not_found() {
            error!("Failed to update book {}: {}", id, e);
        }
    })
}

/// Delete a book and return the removed record.
pub async fn delete_book(repo: &dyn BookRepository, id: BookId) -> RepositoryResult<Book> {
    repo.delete_book(id).await.inspect_err(|e| {
        if !e.is_not_found() {
            error!("Failed to delete book {}: {}", id, e);
        }
    })
}
