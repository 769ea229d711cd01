//! Domain types shared across the repository, service, and HTTP layers.

use serde::{Deserialize, Serialize};

/// Book identifier (database primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookId(pub i64);

impl BookId {
    pub fn new(value: i64) -> Self {
        BookId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted book record.
///
/// The identifier is assigned by the store on creation and is immutable
/// afterwards. The name carries no uniqueness or format constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub name: String,
}

/// Query parameters for listing books.
///
/// `page` is 1-based; the pagination window is `skip = (page - 1) * limit`,
/// `take = limit`. The name filter matches case-insensitively on substring
/// containment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookQuery {
    /// Case-insensitive substring to match against book names.
    pub name_contains: Option<String>,
    /// 1-based page number.
    pub page: i64,
    /// Maximum number of records per page.
    pub limit: i64,
}

impl Default for BookQuery {
    fn default() -> Self {
        Self {
            name_contains: None,
            page: 1,
            limit: 10,
        }
    }
}

impl BookQuery {
    /// Compute the `(skip, take)` pagination window.
    ///
    /// Pages below 1 are clamped to the first page and negative limits to
    /// zero. The multiplication saturates, so extreme client-supplied values
    /// yield a valid (if unreachable) offset instead of overflowing.
    pub fn window(&self) -> (i64, i64) {
        let limit = self.limit.max(0);
        let skip = self.page.max(1).saturating_sub(1).saturating_mul(limit);
        (skip, limit)
    }

    /// Whether `name` matches the filter (no filter matches everything).
    pub fn matches(&self, name: &str) -> bool {
        match &self.name_contains {
            Some(needle) => name.to_lowercase().contains(&needle.to_lowercase()),
            None => true,
        }
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
