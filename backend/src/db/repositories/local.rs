//! In-memory repository implementation.
//!
//! Used for unit tests and local development without a database. Identifiers
//! come from a process-wide counter so they are never reused, matching the
//! Postgres `BIGSERIAL` behaviour.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{Book, BookId, BookQuery};
use crate::db::repository::{BookRepository, ErrorContext, RepositoryError, RepositoryResult};

/// In-memory book store backed by a `RwLock`ed map.
#[derive(Debug, Default)]
pub struct LocalRepository {
    books: RwLock<BTreeMap<i64, String>>,
    next_id: AtomicI64,
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            books: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored records, ignoring any filter.
    pub fn len(&self) -> usize {
        self.books.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.books.read().is_empty()
    }

    fn missing(id: BookId, operation: &str) -> RepositoryError {
        RepositoryError::not_found_with_context(
            format!("Book {} not found", id),
            ErrorContext::new(operation).with_entity_id(id),
        )
    }
}

#[async_trait]
impl BookRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn create_book(&self, name: &str) -> RepositoryResult<Book> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.books.write().insert(id, name.to_string());

        Ok(Book {
            id: BookId::new(id),
            name: name.to_string(),
        })
    }

    async fn list_books(&self, query: &BookQuery) -> RepositoryResult<Vec<Book>> {
        let (skip, take) = query.window();

        // BTreeMap iteration is already ordered by id
        let books = self
            .books
            .read()
            .iter()
            .filter(|(_, name)| query.matches(name))
            .skip(skip as usize)
            .take(take as usize)
            .map(|(id, name)| Book {
                id: BookId::new(*id),
                name: name.clone(),
            })
            .collect();

        Ok(books)
    }

    async fn get_book(&self, id: BookId) -> RepositoryResult<Book> {
        self.books
            .read()
            .get(&id.value())
            .map(|name| Book {
                id,
                name: name.clone(),
            })
            .ok_or_else(|| Self::missing(id, "get_book"))
    }

    async fn update_book(&self, id: BookId, name: &str) -> RepositoryResult<Book> {
        let mut books = self.books.write();
        match books.get_mut(&id.value()) {
            Some(stored) => {
                *stored = name.to_string();
                Ok(Book {
                    id,
                    name: name.to_string(),
                })
            }
            None => Err(Self::missing(id, "update_book")),
        }
    }

    async fn delete_book(&self, id: BookId) -> RepositoryResult<Book> {
        self.books
            .write()
            .remove(&id.value())
            .map(|name| Book { id, name })
            .ok_or_else(|| Self::missing(id, "delete_book"))
    }
}
