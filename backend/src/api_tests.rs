use super::{Book, BookId, BookQuery};

#[test]
fn test_book_id_new() {
    let id = BookId::new(42);
    assert_eq!(id.value(), 42);
}

#[test]
fn test_book_id_equality() {
    let id1 = BookId::new(100);
    let id2 = BookId::new(100);
    let id3 = BookId::new(101);

    assert_eq!(id1, id2);
    assert_ne!(id1, id3);
}

#[test]
fn test_book_id_ordering() {
    let id1 = BookId::new(1);
    let id2 = BookId::new(2);

    assert!(id1 < id2);
    assert!(id2 > id1);
}

#[test]
fn test_book_id_display() {
    assert_eq!(BookId::new(7).to_string(), "7");
}

#[test]
fn test_book_serialization_shape() {
    let book = Book {
        id: BookId::new(3),
        name: "Dune".to_string(),
    };
    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["name"], "Dune");
}

#[test]
fn test_query_defaults() {
    let query = BookQuery::default();
    assert_eq!(query.page, 1);
    assert_eq!(query.limit, 10);
    assert!(query.name_contains.is_none());
}

#[test]
fn test_query_window_first_page() {
    let query = BookQuery::default();
    assert_eq!(query.window(), (0, 10));
}

#[test]
fn test_query_window_later_page() {
    let query = BookQuery {
        page: 3,
        limit: 25,
        ..Default::default()
    };
    assert_eq!(query.window(), (50, 25));
}

#[test]
fn test_query_window_clamps_invalid_values() {
    let query = BookQuery {
        page: 0,
        limit: -5,
        ..Default::default()
    };
    assert_eq!(query.window(), (0, 0));
}

#[test]
fn test_query_window_saturates_on_extreme_values() {
    let query = BookQuery {
        page: i64::MAX,
        limit: 10,
        ..Default::default()
    };
    let (skip, take) = query.window();
    assert_eq!(skip, i64::MAX);
    assert_eq!(take, 10);

    let query = BookQuery {
        page: i64::MAX,
        limit: i64::MAX,
        ..Default::default()
    };
    assert_eq!(query.window(), (i64::MAX, i64::MAX));
}

#[test]
fn test_query_matches_is_case_insensitive() {
    let query = BookQuery {
        name_contains: Some("GATSBY".to_string()),
        ..Default::default()
    };
    assert!(query.matches("The Great Gatsby"));
    assert!(query.matches("the great gatsby"));
    assert!(!query.matches("Moby Dick"));
}

#[test]
fn test_query_without_filter_matches_everything() {
    let query = BookQuery::default();
    assert!(query.matches(""));
    assert!(query.matches("anything"));
}
