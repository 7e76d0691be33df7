//! Data models for Libris

pub mod book;
pub mod circulation;
pub mod member;
pub mod overdue;

// Re-export commonly used types
pub use book::{Book, CreateBook};
pub use circulation::{IssueOutcome, IssueRecord, Reservation, ReturnOutcome};
pub use member::{CreateMember, Member, MemberDetails, OpenIssue};
pub use overdue::OverdueRecord;

/// Catalog-assigned book identifier (monotonic, never reused)
pub type BookId = u32;

/// Directory-assigned member identifier
pub type MemberId = u32;
