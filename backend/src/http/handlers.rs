//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to one API endpoint and delegates to the
//! service layer; no handler holds state between requests.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    BookDto, BookListResponse, CreateBookRequest, DeleteBookResponse, HealthResponse,
    ListBooksQuery, UpdateBookRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{BookId, BookQuery};
use crate::db::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// reachable.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let database = match services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        database,
    }))
}

/// POST /book
///
/// Create a new book. The store assigns the identifier.
#[utoipa::path(
    post,
    path = "/book",
    tag = "books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created", body = BookDto),
        (status = 500, description = "Store failure", body = super::error::ApiError)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(request): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<BookDto>), AppError> {
    let book = services::create_book(state.repository.as_ref(), &request.name).await?;

    Ok((StatusCode::CREATED, Json(book.into())))
}

/// GET /book
///
/// List books, optionally filtered by a case-insensitive name substring and
/// restricted to the requested pagination window.
#[utoipa::path(
    get,
    path = "/book",
    tag = "books",
    params(ListBooksQuery),
    responses(
        (status = 200, description = "Matching books", body = BookListResponse),
        (status = 500, description = "Store failure", body = super::error::ApiError)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<ListBooksQuery>,
) -> HandlerResult<BookListResponse> {
    let query: BookQuery = query.into();
    let books = services::list_books(state.repository.as_ref(), &query).await?;

    Ok(Json(BookListResponse {
        data: books.into_iter().map(Into::into).collect(),
    }))
}

/// PATCH /book/{id}
///
/// Replace the name of an existing book. The identifier is immutable.
#[utoipa::path(
    patch,
    path = "/book/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book identifier")),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Updated book", body = BookDto),
        (status = 404, description = "No such book", body = super::error::ApiError),
        (status = 500, description = "Store failure", body = super::error::ApiError)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateBookRequest>,
) -> HandlerResult<BookDto> {
    let book =
        services::update_book(state.repository.as_ref(), BookId::new(id), &request.name).await?;

    Ok(Json(book.into()))
}

/// DELETE /book/{id}
///
/// Remove a book and return the deleted record for confirmation.
#[utoipa::path(
    delete,
    path = "/book/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Deleted book", body = DeleteBookResponse),
        (status = 404, description = "No such book", body = super::error::ApiError),
        (status = 500, description = "Store failure", body = super::error::ApiError)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<DeleteBookResponse> {
    let book = services::delete_book(state.repository.as_ref(), BookId::new(id)).await?;

    Ok(Json(DeleteBookResponse {
        message: "Book deleted successfully".to_string(),
        deleted_book: book.into(),
    }))
}
