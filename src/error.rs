//! Error types for the Libris engine

use thiserror::Error;

use crate::models::{BookId, MemberId};

/// Main engine error type.
///
/// Every variant is recoverable and reported to the caller as a value:
/// the engine performs no I/O and has no failure modes beyond logical
/// precondition violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("book {0} not found")]
    BookNotFound(BookId),

    #[error("member {0} not found")]
    MemberNotFound(MemberId),

    #[error("member {member} has not borrowed book {book}")]
    NotBorrowed { book: BookId, member: MemberId },

    #[error("reservation queue for book {0} is full")]
    ReservationQueueFull(BookId),

    #[error("book {0} has available copies, issue it directly")]
    CopiesAvailable(BookId),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("inconsistent state: {0}")]
    Inconsistent(String),
}

impl From<validator::ValidationErrors> for LibraryError {
    fn from(errors: validator::ValidationErrors) -> Self {
        LibraryError::Validation(errors.to_string())
    }
}

/// Result type alias for engine operations
pub type LibraryResult<T> = Result<T, LibraryError>;
