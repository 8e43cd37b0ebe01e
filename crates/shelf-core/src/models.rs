//! Data models for shelf
//!
//! Defines the catalog entry (`Book`), its derived lending status, and the
//! closed set of fields a search can target.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RecordError;

/// Keys a persisted record must carry. `borrowed` is optional.
const REQUIRED_FIELDS: [&str; 4] = ["title", "author", "year", "isbn"];

/// One catalog entry
///
/// Only `borrowed` changes after creation. ISBN uniqueness is a property of
/// the catalog, not of the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Publication year
    pub year: i64,
    /// Unique identifier within a catalog
    pub isbn: String,
    /// Whether the book is currently lent out
    #[serde(default)]
    pub borrowed: bool,
}

impl Book {
    /// Create an available book
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
        isbn: impl Into<String>,
    ) -> Self {
        Self::with_borrowed(title, author, year, isbn, false)
    }

    /// Create a book with an explicit lending flag (for loading from storage)
    pub fn with_borrowed(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
        isbn: impl Into<String>,
        borrowed: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            isbn: isbn.into(),
            borrowed,
        }
    }

    /// Current lending status
    pub fn status(&self) -> BookStatus {
        if self.borrowed {
            BookStatus::Borrowed
        } else {
            BookStatus::Available
        }
    }

    /// Structured mapping with keys `title`, `author`, `year`, `isbn`, `borrowed`
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "title": self.title,
            "author": self.author,
            "year": self.year,
            "isbn": self.isbn,
            "borrowed": self.borrowed,
        })
    }

    /// Build a book from a structured mapping
    ///
    /// A missing `borrowed` key means the book is available. Any other
    /// missing key is a `RecordError::MissingField`.
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        let map = value.as_object().ok_or(RecordError::NotAMapping)?;

        if let Some(field) = REQUIRED_FIELDS.iter().find(|f| !map.contains_key(**f)) {
            return Err(RecordError::MissingField(*field));
        }

        serde_json::from_value(value).map_err(RecordError::InvalidValue)
    }
}

/// Lending state of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl BookStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::Borrowed => "Borrowed",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Field a search matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Year,
}

impl SearchField {
    /// Text form of this field on the given book
    pub fn text_of(&self, book: &Book) -> String {
        match self {
            SearchField::Title => book.title.clone(),
            SearchField::Author => book.author.clone(),
            SearchField::Year => book.year.to_string(),
        }
    }

    /// Capitalized name used in report headings
    pub fn label(&self) -> &'static str {
        match self {
            SearchField::Title => "Title",
            SearchField::Author => "Author",
            SearchField::Year => "Year",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

impl FromStr for SearchField {
    type Err = String;

    /// Accepts field names (any case) or the menu numbers 1-3
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" | "1" => Ok(SearchField::Title),
            "author" | "2" => Ok(SearchField::Author),
            "year" | "3" => Ok(SearchField::Year),
            other => Err(format!(
                "Unknown search field '{}'. Valid fields: title, author, year",
                other
            )),
        }
    }
}
