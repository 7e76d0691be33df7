//! Book (catalog entry) model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::BookId;

/// Full book model.
///
/// `available_copies` and `times_issued` are mutated only by the
/// circulation engine; everything else is fixed at creation. The engine
/// keeps `available_copies <= total_copies` at all times, and
/// `times_issued` only ever grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub category: String,
    pub total_copies: u32,
    pub available_copies: u32,
    pub times_issued: u32,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(range(min = 1, message = "At least one copy is required"))]
    pub total_copies: u32,
}

impl CreateBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        total_copies: u32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            category: category.into(),
            total_copies,
        }
    }
}
