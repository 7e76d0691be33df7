//! Purpose-built indexing structures backing the catalog and the
//! circulation engine.

pub mod avl;
pub mod queue;
pub mod trie;

pub use avl::AvlMap;
pub use queue::BoundedQueue;
pub use trie::TitleTrie;
