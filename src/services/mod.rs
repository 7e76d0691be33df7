//! Business logic services

mod catalog;
mod circulation;
mod members;
mod overdue;
mod stats;

pub use stats::LibraryStats;

use crate::config::LibraryConfig;
use crate::store::{ActionLog, CatalogStore, IssueLog, MemberDirectory, ReservationQueues};

/// The library engine.
///
/// One explicitly constructed instance owns every store, and mutating
/// operations take `&mut self`, serializing access call by call. Hosts
/// that need concurrent callers wrap the service in their own lock:
/// issue, return, and reserve on the same book are read-modify-write
/// sequences that must not interleave.
pub struct LibraryService {
    pub(crate) config: LibraryConfig,
    pub(crate) catalog: CatalogStore,
    pub(crate) members: MemberDirectory,
    pub(crate) issues: IssueLog,
    pub(crate) reservations: ReservationQueues,
    pub(crate) actions: ActionLog,
}

impl LibraryService {
    /// Create an empty library with default configuration.
    pub fn new() -> Self {
        Self::with_config(LibraryConfig::default())
    }

    /// Create an empty library with the given configuration.
    pub fn with_config(config: LibraryConfig) -> Self {
        let reservations = ReservationQueues::new(config.circulation.reservation_capacity);
        Self {
            config,
            catalog: CatalogStore::new(),
            members: MemberDirectory::new(),
            issues: IssueLog::new(),
            reservations,
            actions: ActionLog::new(),
        }
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// Circulation audit entries, most recent first.
    pub fn recent_actions(&self) -> impl Iterator<Item = &str> + '_ {
        self.actions.iter_recent()
    }
}

impl Default for LibraryService {
    fn default() -> Self {
        Self::new()
    }
}
