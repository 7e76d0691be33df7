//! Circulation records and operation outcomes

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{BookId, MemberId};

/// One issue event.
///
/// The log is append-only: a record is never removed, only flagged
/// returned. The same (book, member) pair may accumulate several records
/// over time as the book is re-borrowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRecord {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub returned: bool,
}

/// A pending reservation in a per-book FIFO queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub reserved_at: DateTime<Utc>,
}

/// Outcome of a successful issue request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IssueOutcome {
    /// A copy was handed out
    Issued { due_date: NaiveDate },
    /// No copy available; the member was queued (1-based position)
    Queued { position: usize },
}

/// Outcome of a successful return request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReturnOutcome {
    Returned,
    /// The freed copy went straight to the head of the reservation queue
    ReturnedAndReassigned {
        member_id: MemberId,
        due_date: NaiveDate,
    },
}
