//! Catalog and record errors
//!
//! Rejections (duplicate ISBN, unknown ISBN, invalid lending transition)
//! leave the catalog untouched and carry the message shown to the user.
//! Storage failures are fatal and are surfaced to the caller as-is.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors building a `Book` from a structured mapping
#[derive(Error, Debug)]
pub enum RecordError {
    /// A required key is absent
    #[error("Record is missing required field '{0}'")]
    MissingField(&'static str),

    /// The value is not a key-value mapping
    #[error("Record is not a mapping")]
    NotAMapping,

    /// A key is present but holds the wrong kind of value
    #[error("Record has an invalid value: {0}")]
    InvalidValue(#[source] serde_json::Error),
}

/// Errors returned by catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Another book already uses this ISBN
    #[error("A book with this ISBN already exists.")]
    DuplicateIsbn { isbn: String },

    /// No book has this ISBN
    #[error("Book not found.")]
    NotFound { isbn: String },

    /// Borrow requested for a book that is already out
    #[error("This book is already borrowed.")]
    AlreadyBorrowed { isbn: String },

    /// Return requested for a book that is not out
    #[error("This book is not currently borrowed.")]
    NotBorrowed { isbn: String },

    /// Persisting the catalog failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CatalogError {
    /// True when the operation was refused without touching any state
    ///
    /// Rejections are reported and the session continues; anything else
    /// should end the command.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, CatalogError::Storage(_))
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_rejection_messages() {
        let isbn = "111".to_string();

        assert_eq!(
            CatalogError::DuplicateIsbn { isbn: isbn.clone() }.to_string(),
            "A book with this ISBN already exists."
        );
        assert_eq!(
            CatalogError::NotFound { isbn: isbn.clone() }.to_string(),
            "Book not found."
        );
        assert_eq!(
            CatalogError::AlreadyBorrowed { isbn: isbn.clone() }.to_string(),
            "This book is already borrowed."
        );
        assert_eq!(
            CatalogError::NotBorrowed { isbn }.to_string(),
            "This book is not currently borrowed."
        );
    }

    #[test]
    fn test_rejection_classification() {
        let not_found = CatalogError::NotFound {
            isbn: "1".to_string(),
        };
        assert!(not_found.is_rejection());

        let already = CatalogError::AlreadyBorrowed {
            isbn: "1".to_string(),
        };
        assert!(already.is_rejection());

        let storage = CatalogError::from(StorageError::from_io(
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            PathBuf::from("/books.json"),
        ));
        assert!(!storage.is_rejection());
        assert!(storage.to_string().contains("Permission denied"));
    }
}
