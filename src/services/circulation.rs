//! Circulation engine: issuing, returning, and reserving books

use chrono::{Duration, NaiveDate, Utc};

use super::LibraryService;
use crate::error::{LibraryError, LibraryResult};
use crate::models::{BookId, IssueOutcome, IssueRecord, MemberId, Reservation, ReturnOutcome};

impl LibraryService {
    /// Issue a copy of `book_id` to `member_id`, or queue the member
    /// when no copy is available.
    pub fn issue_book(
        &mut self,
        book_id: BookId,
        member_id: MemberId,
    ) -> LibraryResult<IssueOutcome> {
        self.issue_book_on(book_id, member_id, Utc::now().date_naive())
    }

    /// [`issue_book`](Self::issue_book) with an explicit issue date.
    pub fn issue_book_on(
        &mut self,
        book_id: BookId,
        member_id: MemberId,
        today: NaiveDate,
    ) -> LibraryResult<IssueOutcome> {
        let Some(book) = self.catalog.get_mut(book_id) else {
            return Err(LibraryError::BookNotFound(book_id));
        };
        let Some(member) = self.members.get_mut(member_id) else {
            return Err(LibraryError::MemberNotFound(member_id));
        };

        if book.available_copies > 0 {
            book.available_copies -= 1;
            book.times_issued += 1;
            member.current_borrowed_books.insert(book_id);

            let due_date = today + Duration::days(self.config.circulation.loan_period_days);
            self.issues.append(IssueRecord {
                book_id,
                member_id,
                issue_date: today,
                due_date,
                returned: false,
            });
            self.actions
                .push(format!("ISSUED: book {book_id} to member {member_id}"));
            tracing::info!(book_id, member_id, %due_date, "book issued");
            return Ok(IssueOutcome::Issued { due_date });
        }

        // No copy on the shelf: queue the member, with backpressure.
        match self.reservations.enqueue(book_id, member_id) {
            Ok(position) => {
                tracing::info!(book_id, member_id, position, "member queued for unavailable book");
                Ok(IssueOutcome::Queued { position })
            }
            Err(_) => Err(LibraryError::ReservationQueueFull(book_id)),
        }
    }

    /// Return a borrowed copy. When someone is waiting, the freed copy
    /// is handed straight to the head of the reservation queue.
    pub fn return_book(
        &mut self,
        book_id: BookId,
        member_id: MemberId,
    ) -> LibraryResult<ReturnOutcome> {
        self.return_book_on(book_id, member_id, Utc::now().date_naive())
    }

    /// [`return_book`](Self::return_book) with an explicit date for the
    /// follow-up issue.
    pub fn return_book_on(
        &mut self,
        book_id: BookId,
        member_id: MemberId,
        today: NaiveDate,
    ) -> LibraryResult<ReturnOutcome> {
        let Some(book) = self.catalog.get_mut(book_id) else {
            return Err(LibraryError::BookNotFound(book_id));
        };
        let Some(member) = self.members.get_mut(member_id) else {
            return Err(LibraryError::MemberNotFound(member_id));
        };
        if !member.current_borrowed_books.contains(&book_id) {
            return Err(LibraryError::NotBorrowed {
                book: book_id,
                member: member_id,
            });
        }

        // Close the oldest open record for this pair before mutating
        // anything. Finding none means the borrowed set and the issue
        // log disagree.
        let Some(record) = self.issues.first_open_mut(book_id, member_id) else {
            return Err(LibraryError::Inconsistent(format!(
                "no open issue record for book {book_id} and member {member_id}"
            )));
        };
        record.returned = true;
        member.current_borrowed_books.remove(&book_id);
        book.available_copies += 1;
        tracing::info!(book_id, member_id, "book returned");

        // A freed copy goes to the queue head, if anyone is waiting.
        // This nests exactly one level: one copy was freed, so the inner
        // issue consumes it instead of dequeuing again.
        if let Some(next) = self.reservations.dequeue(book_id) {
            let outcome = self.issue_book_on(book_id, next.member_id, today)?;
            return match outcome {
                IssueOutcome::Issued { due_date } => {
                    tracing::info!(
                        book_id,
                        member_id = next.member_id,
                        "freed copy reassigned to reservation head"
                    );
                    Ok(ReturnOutcome::ReturnedAndReassigned {
                        member_id: next.member_id,
                        due_date,
                    })
                }
                IssueOutcome::Queued { .. } => Err(LibraryError::Inconsistent(format!(
                    "freed copy of book {book_id} was re-queued instead of issued"
                ))),
            };
        }

        Ok(ReturnOutcome::Returned)
    }

    /// Queue a member for a book without attempting issuance.
    ///
    /// Books with stock on the shelf cannot be reserved: reservations
    /// never jump ahead of available copies. Returns the 1-based queue
    /// position.
    pub fn reserve_book(&mut self, book_id: BookId, member_id: MemberId) -> LibraryResult<usize> {
        let Some(book) = self.catalog.get(book_id) else {
            return Err(LibraryError::BookNotFound(book_id));
        };
        if !self.members.contains(member_id) {
            return Err(LibraryError::MemberNotFound(member_id));
        }
        if book.available_copies > 0 {
            return Err(LibraryError::CopiesAvailable(book_id));
        }

        match self.reservations.enqueue(book_id, member_id) {
            Ok(position) => {
                tracing::info!(book_id, member_id, position, "reservation queued");
                Ok(position)
            }
            Err(_) => Err(LibraryError::ReservationQueueFull(book_id)),
        }
    }

    /// Pending reservations for one book, queue order.
    pub fn get_reservations_for_book(&self, book_id: BookId) -> Vec<Reservation> {
        self.reservations.for_book(book_id)
    }

    /// Every pending reservation, oldest first.
    pub fn get_all_reservations(&self) -> Vec<Reservation> {
        self.reservations.all()
    }

    /// The append-only issue log, oldest first.
    pub fn issue_records(&self) -> impl Iterator<Item = &IssueRecord> + '_ {
        self.issues.iter()
    }
}
