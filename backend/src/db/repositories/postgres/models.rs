use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::books;
use crate::api::{Book, BookId};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)] // created_at is used only on the database side
pub struct BookRow {
    pub book_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = books)]
pub struct NewBookRow {
    pub name: String,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book {
            id: BookId::new(row.book_id),
            name: row.name,
        }
    }
}
