//! Member registration and lookup

use chrono::{NaiveDate, Utc};
use validator::Validate;

use super::LibraryService;
use crate::error::{LibraryError, LibraryResult};
use crate::models::{CreateMember, Member, MemberDetails, MemberId, OpenIssue};

impl LibraryService {
    /// Register a member.
    ///
    /// The phone number must be a 10-digit mobile number starting 6-9;
    /// invalid input is rejected here, never coerced.
    pub fn register_member(&mut self, new: CreateMember) -> LibraryResult<Member> {
        new.validate()?;
        let member = self.members.register(new);
        tracing::info!(id = member.id, "member registered");
        Ok(member.clone())
    }

    pub fn get_member(&self, id: MemberId) -> LibraryResult<&Member> {
        self.members.get(id).ok_or(LibraryError::MemberNotFound(id))
    }

    pub fn get_all_members(&self) -> Vec<&Member> {
        self.members.iter().collect()
    }

    /// Member plus open loans (with overdue flags) and queued
    /// reservations.
    pub fn get_member_details(&self, id: MemberId) -> LibraryResult<MemberDetails> {
        self.member_details_as_of(id, Utc::now().date_naive())
    }

    /// [`get_member_details`](Self::get_member_details) with an explicit
    /// reference date for the overdue flags.
    pub fn member_details_as_of(
        &self,
        id: MemberId,
        today: NaiveDate,
    ) -> LibraryResult<MemberDetails> {
        let member = self.members.get(id).ok_or(LibraryError::MemberNotFound(id))?;

        let mut open_issues = Vec::new();
        for record in self.issues.iter_open() {
            if record.member_id != id {
                continue;
            }
            let book = self.catalog.get(record.book_id).ok_or_else(|| {
                LibraryError::Inconsistent(format!(
                    "issue record references unknown book {}",
                    record.book_id
                ))
            })?;
            open_issues.push(OpenIssue {
                book: book.clone(),
                issue_date: record.issue_date,
                due_date: record.due_date,
                is_overdue: record.due_date < today,
            });
        }

        let reservations = self
            .reservations
            .all()
            .into_iter()
            .filter(|r| r.member_id == id)
            .collect();

        Ok(MemberDetails {
            member: member.clone(),
            open_issues,
            reservations,
        })
    }

    /// Seed the directory with demo members.
    pub fn load_sample_members(&mut self) -> LibraryResult<Vec<Member>> {
        let samples = [
            CreateMember::new("Aarav Sharma", "aarav.sharma@example.com", "9876543210"),
            CreateMember::new("Priya Patel", "priya.patel@example.com", "8765432109"),
            CreateMember::new("Rohan Gupta", "rohan.gupta@example.com", "7654321098"),
        ];
        samples
            .into_iter()
            .map(|sample| self.register_member(sample))
            .collect()
    }
}
