//! Catalog store: owns every book record plus the indexes kept in
//! lockstep with it.

use indexmap::IndexMap;

use crate::index::{AvlMap, TitleTrie};
use crate::models::{Book, BookId, CreateBook};

/// First id handed out by the catalog.
const FIRST_BOOK_ID: BookId = 101;

/// Append-only, ordered collection of books and the indexes over it.
///
/// `books` is the single owner of every record; the id index, title
/// trie, and category index hold slots into it and are updated together
/// on every insert, so the set of books reachable through any of them is
/// always identical to the store itself.
#[derive(Debug)]
pub struct CatalogStore {
    books: Vec<Book>,
    by_id: AvlMap<usize>,
    by_title: TitleTrie,
    by_category: IndexMap<String, Vec<usize>>,
    next_id: BookId,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            by_id: AvlMap::new(),
            by_title: TitleTrie::new(),
            by_category: IndexMap::new(),
            next_id: FIRST_BOOK_ID,
        }
    }

    /// Insert a new book, assigning the next id and wiring every index
    /// in the same step. Returns the stored record.
    pub fn insert(&mut self, new: CreateBook) -> &Book {
        let id = self.next_id;
        self.next_id += 1;

        let slot = self.books.len();
        let book = Book {
            id,
            title: new.title,
            author: new.author,
            category: new.category,
            total_copies: new.total_copies,
            available_copies: new.total_copies,
            times_issued: 0,
        };

        self.by_id.insert(id, slot);
        self.by_title.insert(&book.title, slot);
        self.by_category
            .entry(book.category.clone())
            .or_insert_with(Vec::new)
            .push(slot);
        self.books.push(book);

        &self.books[slot]
    }

    /// O(log n) lookup through the balanced id index.
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.by_id.get(id).map(|&slot| &self.books[slot])
    }

    pub fn get_mut(&mut self, id: BookId) -> Option<&mut Book> {
        match self.by_id.get(id) {
            Some(&slot) => self.books.get_mut(slot),
            None => None,
        }
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.by_id.contains(id)
    }

    /// Enumerate in insertion order (the store is append-only).
    pub fn iter(&self) -> impl Iterator<Item = &Book> + '_ {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Books whose normalized title starts with `prefix`.
    pub fn search_title_prefix(&self, prefix: &str) -> Vec<&Book> {
        self.by_title
            .search_prefix(prefix)
            .into_iter()
            .map(|slot| &self.books[slot])
            .collect()
    }

    /// Books in a category, in the order they were added. Unknown
    /// categories yield an empty list.
    pub fn by_category(&self, category: &str) -> Vec<&Book> {
        self.by_category
            .get(category)
            .map(|slots| slots.iter().map(|&slot| &self.books[slot]).collect())
            .unwrap_or_default()
    }

    /// Category names in first-seen order.
    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_category.keys().map(String::as_str)
    }

    /// Ids in ascending order, read off the balanced index.
    pub fn ids_in_order(&self) -> Vec<BookId> {
        self.by_id
            .iter_in_order()
            .into_iter()
            .map(|(id, _)| id)
            .collect()
    }

    /// Number of books reachable through the category index.
    pub fn category_entry_count(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
