//! Numbered book listings
//!
//! A `BookListing` is the report produced by listing or searching the
//! catalog. Its `Display` form is what a terminal user sees.

use std::fmt;

use crate::models::Book;

/// An ordered, 1-based view over some books of the catalog
#[derive(Debug, Clone)]
pub struct BookListing<'a> {
    heading: String,
    empty_message: &'static str,
    books: Vec<&'a Book>,
}

impl<'a> BookListing<'a> {
    pub(crate) fn new(
        heading: impl Into<String>,
        empty_message: &'static str,
        books: Vec<&'a Book>,
    ) -> Self {
        Self {
            heading: heading.into(),
            empty_message,
            books,
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn books(&self) -> &[&'a Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Books paired with their 1-based position
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &'a Book)> + '_ {
        self.books.iter().copied().enumerate().map(|(i, b)| (i + 1, b))
    }

    /// Owned copies of the listed books, for serialization
    pub fn to_books(&self) -> Vec<Book> {
        self.books.iter().map(|b| (*b).clone()).collect()
    }
}

/// One listing line: `N. title | author | year | ISBN: isbn | status`
pub fn format_line(position: usize, book: &Book) -> String {
    format!(
        "{}. {} | {} | {} | ISBN: {} | {}",
        position,
        book.title,
        book.author,
        book.year,
        book.isbn,
        book.status()
    )
}

impl fmt::Display for BookListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.books.is_empty() {
            return f.write_str(self.empty_message);
        }

        write!(f, "{}", self.heading)?;
        for (position, book) in self.numbered() {
            write!(f, "\n{}", format_line(position, book))?;
        }
        Ok(())
    }
}
