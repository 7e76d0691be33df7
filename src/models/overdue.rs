//! Derived overdue records and their ranking order

use std::cmp::Ordering;

use serde::Serialize;

use super::{BookId, MemberId};

/// One currently-overdue loan.
///
/// Derived per query from the issue log, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct OverdueRecord {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub member_name: String,
    pub book_title: String,
    pub days_overdue: i64,
    pub fine_amount: f64,
}

// Ranking contract: the most-overdue record is the greatest, so a
// max-heap surfaces the worst offender first. Only `days_overdue`
// participates in the ordering.
impl Ord for OverdueRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.days_overdue.cmp(&other.days_overdue)
    }
}

impl PartialOrd for OverdueRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OverdueRecord {
    fn eq(&self, other: &Self) -> bool {
        self.days_overdue == other.days_overdue
    }
}

impl Eq for OverdueRecord {}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(days_overdue: i64) -> OverdueRecord {
        OverdueRecord {
            book_id: 101,
            member_id: 1,
            member_name: "Asha".into(),
            book_title: "Clean Code".into(),
            days_overdue,
            fine_amount: days_overdue as f64 * 5.0,
        }
    }

    #[test]
    fn worst_offender_ranks_greatest() {
        let mut heap = std::collections::BinaryHeap::new();
        heap.push(record(2));
        heap.push(record(9));
        heap.push(record(5));

        let drained: Vec<i64> = std::iter::from_fn(|| heap.pop())
            .map(|r| r.days_overdue)
            .collect();
        assert_eq!(drained, vec![9, 5, 2]);
    }
}
