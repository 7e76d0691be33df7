//! Member model and related types

use std::collections::HashSet;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::book::Book;
use super::circulation::Reservation;
use super::{BookId, MemberId};

/// Mobile numbers: exactly 10 digits, leading digit 6-9.
static MOBILE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").unwrap());

/// Full member model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub registration_date: NaiveDate,
    /// Ids of the books currently on loan to this member
    pub current_borrowed_books: HashSet<BookId>,
    pub pending_fines: f64,
}

/// Member registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMember {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Rejected at registration time when it does not match the mobile
    /// pattern; never silently coerced.
    #[validate(regex(path = *MOBILE_RE, message = "Invalid mobile number"))]
    pub phone: String,
}

impl CreateMember {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// One open loan in a member-details view
#[derive(Debug, Clone, Serialize)]
pub struct OpenIssue {
    pub book: Book,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub is_overdue: bool,
}

/// Member plus everything the circulation engine currently knows about
/// them: open loans and queued reservations.
#[derive(Debug, Clone, Serialize)]
pub struct MemberDetails {
    pub member: Member,
    pub open_issues: Vec<OpenIssue>,
    pub reservations: Vec<Reservation>,
}
