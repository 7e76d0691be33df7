//! Libris Library Catalog & Circulation Engine
//!
//! An in-memory engine managing a library's catalog, membership, and
//! circulation lifecycle: a height-balanced id index, a title prefix trie,
//! a category index, bounded per-book reservation queues, an on-demand
//! overdue ranking, and the orchestration keeping them consistent while
//! books are issued, returned, and reserved.
//!
//! The engine performs no I/O. Hosts construct one [`LibraryService`] per
//! process and pass it by reference into their request handlers; callers
//! that need concurrency wrap it in a lock of their choosing.

pub mod config;
pub mod error;
pub mod index;
pub mod models;
pub mod services;
pub mod store;

pub use config::LibraryConfig;
pub use error::{LibraryError, LibraryResult};
pub use services::LibraryService;
