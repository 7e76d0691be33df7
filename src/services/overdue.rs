//! Overdue ranking, derived on demand from the issue log

use std::collections::BinaryHeap;

use chrono::{NaiveDate, Utc};

use super::LibraryService;
use crate::models::OverdueRecord;

impl LibraryService {
    /// Currently-overdue loans, worst offender first.
    pub fn get_overdue_books(&self) -> Vec<OverdueRecord> {
        self.overdue_books_as_of(Utc::now().date_naive())
    }

    /// [`get_overdue_books`](Self::get_overdue_books) with an explicit
    /// reference date.
    ///
    /// Scans the full issue log, pushes every unreturned record whose
    /// due date precedes `today` through a transient max-heap (largest
    /// `days_overdue` wins, see `Ord for OverdueRecord`), and drains it
    /// into the output. O(m log m) in the number of overdue records; the
    /// heap is discarded after the call.
    pub fn overdue_books_as_of(&self, today: NaiveDate) -> Vec<OverdueRecord> {
        let fine_per_day = self.config.circulation.fine_per_day;
        let mut heap = BinaryHeap::new();

        for record in self.issues.iter_open() {
            if record.due_date >= today {
                continue;
            }
            let days_overdue = (today - record.due_date).num_days();
            let member_name = self
                .members
                .get(record.member_id)
                .map(|m| m.name.clone())
                .unwrap_or_else(|| "Unknown".to_string());
            let book_title = self
                .catalog
                .get(record.book_id)
                .map(|b| b.title.clone())
                .unwrap_or_else(|| "Unknown".to_string());

            heap.push(OverdueRecord {
                book_id: record.book_id,
                member_id: record.member_id,
                member_name,
                book_title,
                days_overdue,
                fine_amount: days_overdue as f64 * fine_per_day,
            });
        }

        let mut ranked = Vec::with_capacity(heap.len());
        while let Some(record) = heap.pop() {
            ranked.push(record);
        }
        ranked
    }
}
