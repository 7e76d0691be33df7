//! Per-book reservation queues

use std::collections::HashMap;

use chrono::Utc;

use crate::index::BoundedQueue;
use crate::models::{BookId, MemberId, Reservation};

/// Bounded FIFO reservation queues, one per book, created lazily on
/// first use. Every queue shares the capacity fixed at construction.
#[derive(Debug)]
pub struct ReservationQueues {
    queues: HashMap<BookId, BoundedQueue<Reservation>>,
    capacity: usize,
}

impl ReservationQueues {
    pub fn new(capacity: usize) -> Self {
        Self {
            queues: HashMap::new(),
            capacity,
        }
    }

    /// Queue `member` for `book`. Returns the 1-based queue position, or
    /// the rejected reservation when the queue is already at capacity.
    pub fn enqueue(&mut self, book: BookId, member: MemberId) -> Result<usize, Reservation> {
        let capacity = self.capacity;
        let queue = self
            .queues
            .entry(book)
            .or_insert_with(|| BoundedQueue::new(capacity));
        queue.enqueue(Reservation {
            book_id: book,
            member_id: member,
            reserved_at: Utc::now(),
        })
    }

    /// Pop the head of `book`'s queue, if anyone is waiting.
    pub fn dequeue(&mut self, book: BookId) -> Option<Reservation> {
        self.queues.get_mut(&book)?.dequeue()
    }

    /// Pending reservations for `book`, O(1).
    pub fn pending(&self, book: BookId) -> usize {
        self.queues.get(&book).map_or(0, BoundedQueue::len)
    }

    /// Reservations for one book, head first, without disturbing the
    /// queue.
    pub fn for_book(&self, book: BookId) -> Vec<Reservation> {
        self.queues
            .get(&book)
            .map(|queue| queue.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Every pending reservation across all queues, oldest first.
    pub fn all(&self) -> Vec<Reservation> {
        let mut all: Vec<Reservation> = self
            .queues
            .values()
            .flat_map(|queue| queue.iter().cloned())
            .collect();
        all.sort_by_key(|r| r.reserved_at);
        all
    }

    pub fn total_pending(&self) -> usize {
        self.queues.values().map(BoundedQueue::len).sum()
    }
}
