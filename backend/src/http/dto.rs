//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API
//! and double as the OpenAPI component schemas.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::{Book, BookQuery};

/// A book as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookDto {
    /// Store-assigned identifier
    pub id: i64,
    /// Book name
    pub name: String,
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.value(),
            name: book.name,
        }
    }
}

/// Request body for creating a book.
///
/// No validation is applied; an absent name deserializes to the empty
/// string and is stored as-is.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBookRequest {
    /// Name for the new book
    #[serde(default)]
    pub name: String,
}

/// Request body for updating a book's name.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateBookRequest {
    /// Replacement name
    #[serde(default)]
    pub name: String,
}

/// Query parameters for listing books.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
pub struct ListBooksQuery {
    /// Case-insensitive substring to match against book names
    #[serde(default)]
    pub name: Option<String>,
    /// 1-based page number (default: 1)
    #[serde(default)]
    pub page: Option<i64>,
    /// Page size (default: 10)
    #[serde(default)]
    pub limit: Option<i64>,
}

impl From<ListBooksQuery> for BookQuery {
    fn from(query: ListBooksQuery) -> Self {
        let defaults = BookQuery::default();
        BookQuery {
            name_contains: query.name,
            page: query.page.unwrap_or(defaults.page),
            limit: query.limit.unwrap_or(defaults.limit),
        }
    }
}

/// Book list response wrapper.
///
/// Deliberately carries no total-count metadata; clients detect the end of
/// the collection by requesting an empty page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookListResponse {
    /// Books within the requested pagination window
    pub data: Vec<BookDto>,
}

/// Response for a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteBookResponse {
    /// Confirmation message
    pub message: String,
    /// The record that was removed
    #[serde(rename = "deletedBook")]
    pub deleted_book: BookDto,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Database connection status
    pub database: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults_missing_name_to_empty() {
        let request: CreateBookRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.name, "");
    }

    #[test]
    fn test_list_query_conversion_applies_defaults() {
        let query: BookQuery = ListBooksQuery::default().into();
        assert_eq!(query, BookQuery::default());
    }

    #[test]
    fn test_list_query_conversion_keeps_explicit_values() {
        let query: BookQuery = ListBooksQuery {
            name: Some("gatsby".to_string()),
            page: Some(2),
            limit: Some(5),
        }
        .into();

        assert_eq!(query.name_contains.as_deref(), Some("gatsby"));
        assert_eq!(query.window(), (5, 5));
    }

    #[test]
    fn test_delete_response_uses_camel_case_key() {
        let response = DeleteBookResponse {
            message: "Book deleted successfully".to_string(),
            deleted_book: BookDto {
                id: 1,
                name: "Gone".to_string(),
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("deletedBook").is_some());
    }
}
