//! Catalog manager
//!
//! The `Catalog` owns the ordered list of books and keeps the catalog file
//! in step with it:
//! - Opening never fails on bad data. A missing, unreadable or malformed
//!   file is treated as an empty catalog.
//! - Every successful mutation rewrites the whole file. Queries never write.
//! - If that write fails the mutation is undone in memory and the storage
//!   error is returned, so memory always matches the last good snapshot.
//!
//! ## Usage
//!
//! ```ignore
//! let mut catalog = Catalog::open(&config);
//!
//! catalog.add_book("Dune", "Frank Herbert", 1965, "111")?;
//! catalog.borrow_book("111")?;
//!
//! println!("{}", catalog.list_books());
//! ```

use std::path::Path;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{CatalogError, CatalogResult};
use crate::listing::BookListing;
use crate::models::{Book, SearchField};
use crate::storage::JsonPersistence;

/// In-memory catalog backed by a JSON file
pub struct Catalog {
    /// Books in insertion order
    books: Vec<Book>,
    /// Catalog file handler
    persistence: JsonPersistence,
}

impl Catalog {
    /// Open the catalog at the configured storage path
    pub fn open(config: &Config) -> Self {
        Self::open_with_persistence(JsonPersistence::from_config(config))
    }

    /// Open the catalog through a specific persistence handler
    ///
    /// Load failures are logged and replaced by an empty catalog.
    pub fn open_with_persistence(persistence: JsonPersistence) -> Self {
        let books = match persistence.load() {
            Ok(books) => books,
            Err(e) if e.is_corruption() => {
                warn!(
                    "Ignoring corrupt catalog at {:?}, starting empty: {}",
                    persistence.path(),
                    e
                );
                Vec::new()
            }
            Err(e) => {
                warn!(
                    "Could not read catalog at {:?}, starting empty: {}",
                    persistence.path(),
                    e
                );
                Vec::new()
            }
        };

        Self { books, persistence }
    }

    /// Path of the catalog file
    pub fn storage_path(&self) -> &Path {
        self.persistence.path()
    }

    /// All books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Find the book with this ISBN
    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.isbn == isbn)
    }

    // ==================== Mutations ====================

    /// Append a new, available book
    ///
    /// Rejected with `DuplicateIsbn` if the ISBN is already in the catalog.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
        isbn: impl Into<String>,
    ) -> CatalogResult<&Book> {
        let isbn = isbn.into();
        if self.find_by_isbn(&isbn).is_some() {
            return Err(CatalogError::DuplicateIsbn { isbn });
        }

        let index = self.books.len();
        self.books.push(Book::new(title, author, year, isbn));

        if let Err(e) = self.persistence.save(&self.books) {
            self.books.truncate(index);
            return Err(e.into());
        }

        let book = &self.books[index];
        info!("Added book {:?} ({})", book.title, book.isbn);
        Ok(book)
    }

    /// Mark an available book as borrowed
    pub fn borrow_book(&mut self, isbn: &str) -> CatalogResult<&Book> {
        self.set_borrowed(isbn, true)
    }

    /// Mark a borrowed book as available again
    pub fn return_book(&mut self, isbn: &str) -> CatalogResult<&Book> {
        self.set_borrowed(isbn, false)
    }

    fn set_borrowed(&mut self, isbn: &str, borrowed: bool) -> CatalogResult<&Book> {
        let index = self
            .books
            .iter()
            .position(|b| b.isbn == isbn)
            .ok_or_else(|| CatalogError::NotFound {
                isbn: isbn.to_string(),
            })?;

        if self.books[index].borrowed == borrowed {
            let isbn = isbn.to_string();
            return Err(if borrowed {
                CatalogError::AlreadyBorrowed { isbn }
            } else {
                CatalogError::NotBorrowed { isbn }
            });
        }

        self.books[index].borrowed = borrowed;

        if let Err(e) = self.persistence.save(&self.books) {
            self.books[index].borrowed = !borrowed;
            return Err(e.into());
        }

        let book = &self.books[index];
        info!("Book {} is now {}", book.isbn, book.status());
        Ok(book)
    }

    // ==================== Queries ====================

    /// Every book, numbered in insertion order
    pub fn list_books(&self) -> BookListing<'_> {
        BookListing::new(
            "Library Collection:",
            "No books in the library.",
            self.books.iter().collect(),
        )
    }

    /// Books whose `field` contains `keyword`, ignoring case
    ///
    /// Matches keep catalog order.
    pub fn search_books(&self, keyword: &str, field: SearchField) -> BookListing<'_> {
        let keyword = keyword.to_lowercase();
        let matches = self
            .books
            .iter()
            .filter(|b| field.text_of(b).to_lowercase().contains(&keyword))
            .collect();

        BookListing::new(
            format!(
                "Search Results ({} contains '{}'):",
                field.label(),
                keyword
            ),
            "No matching books found.",
            matches,
        )
    }
}
