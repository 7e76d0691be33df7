//! Summary statistics over the in-memory stores

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use super::LibraryService;

/// Point-in-time counters for dashboards
#[derive(Debug, Clone, Serialize)]
pub struct LibraryStats {
    pub total_titles: usize,
    pub total_copies: u64,
    pub available_copies: u64,
    pub total_members: usize,
    pub active_loans: usize,
    pub overdue_loans: usize,
    pub pending_reservations: usize,
}

impl LibraryService {
    /// Library-wide counters as of today.
    pub fn stats(&self) -> LibraryStats {
        self.stats_as_of(Utc::now().date_naive())
    }

    /// [`stats`](Self::stats) with an explicit reference date for the
    /// overdue count.
    pub fn stats_as_of(&self, today: NaiveDate) -> LibraryStats {
        LibraryStats {
            total_titles: self.catalog.len(),
            total_copies: self.catalog.iter().map(|b| u64::from(b.total_copies)).sum(),
            available_copies: self
                .catalog
                .iter()
                .map(|b| u64::from(b.available_copies))
                .sum(),
            total_members: self.members.len(),
            active_loans: self.issues.iter_open().count(),
            overdue_loans: self
                .issues
                .iter_open()
                .filter(|r| r.due_date < today)
                .count(),
            pending_reservations: self.reservations.total_pending(),
        }
    }
}
