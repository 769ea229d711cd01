//! OpenAPI document for the book service.
//!
//! The schema is generated from the handler annotations and DTO derives;
//! the Swagger UI serves it interactively (see `router`).

use utoipa::OpenApi;

use super::dto::{
    BookDto, BookListResponse, CreateBookRequest, DeleteBookResponse, HealthResponse,
    UpdateBookRequest,
};
use super::error::ApiError;
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Service API",
        description = "CRUD operations over the book catalog"
    ),
    paths(
        handlers::health_check,
        handlers::create_book,
        handlers::list_books,
        handlers::update_book,
        handlers::delete_book,
    ),
    components(schemas(
        BookDto,
        BookListResponse,
        CreateBookRequest,
        UpdateBookRequest,
        DeleteBookResponse,
        HealthResponse,
        ApiError,
    )),
    tags(
        (name = "books", description = "Book catalog operations"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_lists_all_routes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/book"));
        assert!(paths.contains_key("/book/{id}"));
        assert!(paths.contains_key("/health"));
    }
}
