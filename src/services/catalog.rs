//! Catalog operations: adding, listing, and searching books

use validator::Validate;

use super::LibraryService;
use crate::error::{LibraryError, LibraryResult};
use crate::models::{Book, BookId, CreateBook};

impl LibraryService {
    /// Add a book to the catalog, assigning its id and wiring it into
    /// the id index, title trie, and category index in one step.
    pub fn add_book(&mut self, new: CreateBook) -> LibraryResult<Book> {
        new.validate()?;
        let book = self.catalog.insert(new);
        tracing::info!(id = book.id, title = %book.title, "book added to catalog");
        Ok(book.clone())
    }

    /// Every book, in catalog insertion order.
    pub fn get_all_books(&self) -> Vec<&Book> {
        self.catalog.iter().collect()
    }

    pub fn get_book_by_id(&self, id: BookId) -> LibraryResult<&Book> {
        self.catalog.get(id).ok_or(LibraryError::BookNotFound(id))
    }

    /// Search by id or by title prefix.
    ///
    /// A query that parses as an id with an exact catalog match returns
    /// just that book; anything else falls through to the prefix index.
    /// The result is never a union of both.
    pub fn search_books(&self, query: &str) -> Vec<&Book> {
        if let Ok(id) = query.parse::<BookId>() {
            if let Some(book) = self.catalog.get(id) {
                return vec![book];
            }
        }
        self.catalog.search_title_prefix(query)
    }

    /// Books in a category, append order. Unknown categories yield an
    /// empty list.
    pub fn get_books_by_category(&self, category: &str) -> Vec<&Book> {
        self.catalog.by_category(category)
    }

    /// Category names in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        self.catalog.categories().collect()
    }

    /// Seed the catalog with the standard demo inventory.
    pub fn load_sample_books(&mut self) -> LibraryResult<Vec<Book>> {
        let samples = [
            CreateBook::new("The Great Gatsby", "F. Scott Fitzgerald", "Fiction", 5),
            CreateBook::new("Clean Code", "Robert C. Martin", "Tech", 3),
            CreateBook::new("Data Structures", "Robert Lafore", "Education", 2),
        ];
        samples
            .into_iter()
            .map(|sample| self.add_book(sample))
            .collect()
    }
}
